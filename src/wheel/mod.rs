//! Two-stop gradient interpolation across a string's characters.
//!
//! A [`WheelFactory`] fixes the interpolation domain: [`WheelFactory::RGB`]
//! lerps the channels directly, [`WheelFactory::HLS`] converts both stops
//! into hue/lightness/saturation, lerps there, and converts back to RGB only
//! when a code is emitted. Stops arrive as already-encoded truecolor escape
//! sequences, the same strings the effect factories produce; the factory
//! parses the embedded codes back out of them.

use crate::color::convert::{hls_to_rgb, rgb_to_hls};
use crate::effect::{Effect, RESET};
use crate::error::Error;

/// Conversion between the interpolation domain and RGB.
type Convert = fn([i32; 3]) -> [i32; 3];

const fn identity(color: [i32; 3]) -> [i32; 3] {
    color
}

/// One interpolation-domain configuration, able to build interpolators.
#[derive(Debug, Clone, Copy)]
pub struct WheelFactory {
    forward: Convert,
    backward: Convert,
}

impl WheelFactory {
    /// Lerp directly on RGB channels.
    pub const RGB: Self = Self {
        forward: identity,
        backward: identity,
    };

    /// Lerp on hue, lightness, and saturation; emit as RGB.
    pub const HLS: Self = Self {
        forward: rgb_to_hls,
        backward: hls_to_rgb,
    };

    /// Look a factory up by its space name, as used in flags and themes.
    pub fn named(space: &str) -> Result<Self, Error> {
        match space {
            "rgb" => Ok(Self::RGB),
            "hls" => Ok(Self::HLS),
            other => Err(Error::InvalidSpace(other.to_string())),
        }
    }

    /// Build an interpolator from two encoded color stops.
    ///
    /// Both stops must be truecolor sequences of the shape
    /// `ESC[<plane>;2;<r>;<g>;<b>m` and must target the same plane; one
    /// foreground and one background stop fail with
    /// [`Error::SpaceMismatch`].
    pub fn between(&self, start: &str, end: &str) -> Result<WheelInterpolator, Error> {
        let (start_plane, start_rgb) = parse_stop(start)?;
        let (end_plane, end_rgb) = parse_stop(end)?;
        if start_plane != end_plane {
            return Err(Error::SpaceMismatch {
                start: start_plane,
                end: end_plane,
            });
        }

        Ok(WheelInterpolator {
            plane: start_plane,
            start: (self.forward)(start_rgb),
            end: (self.forward)(end_rgb),
            to_rgb: self.backward,
        })
    }
}

/// Recover the plane code and RGB triple from an encoded stop.
fn parse_stop(sequence: &str) -> Result<(i32, [i32; 3]), Error> {
    let body = sequence
        .strip_prefix("\x1b[")
        .and_then(|s| s.strip_suffix('m'))
        .ok_or_else(|| Error::InvalidFormat(sequence.to_string()))?;

    let mut codes = [0_i32; 5];
    let mut fields = body.split(';');
    for slot in &mut codes {
        *slot = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| Error::InvalidFormat(sequence.to_string()))?;
    }
    if fields.next().is_some() {
        return Err(Error::InvalidFormat(sequence.to_string()));
    }

    // codes[1] is the truecolor marker; skipped, not validated.
    Ok((codes[0], [codes[2], codes[3], codes[4]]))
}

/// Interpolates between two stops and emits per-position escape codes.
#[derive(Debug, Clone, Copy)]
pub struct WheelInterpolator {
    plane: i32,
    start: [i32; 3],
    end: [i32; 3],
    to_rgb: Convert,
}

impl WheelInterpolator {
    /// The color at fractional position `scalar`, as a ready effect.
    ///
    /// `scalar` is conceptually 0..=1 but is not clamped: values outside
    /// that range extrapolate linearly, and each channel truncates toward
    /// zero. The lerp runs in the factory's domain; conversion to RGB
    /// happens only here, at emission. Pure: the same scalar always yields
    /// the byte-same sequence.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn at(&self, scalar: f64) -> Effect {
        let lerp =
            |a: i32, b: i32| (scalar * f64::from(b) + (1.0 - scalar) * f64::from(a)) as i32;
        let mixed = [
            lerp(self.start[0], self.end[0]),
            lerp(self.start[1], self.end[1]),
            lerp(self.start[2], self.end[2]),
        ];
        let [r, g, b] = (self.to_rgb)(mixed);
        Effect::new(format!("{};2;{r};{g};{b}", self.plane))
    }

    /// Walk `text`, coloring character `i` of `n` at scalar `i / (n - 1)`.
    ///
    /// A single character gets the pure start color. One reset terminates
    /// the whole run; individual characters are not reset.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gradient(&self, text: &str) -> String {
        let count = text.chars().count();
        // max(1) pins the single-character case to scalar 0.
        let span = count.saturating_sub(1).max(1) as f64;

        let mut styled = String::with_capacity(text.len() * 20);
        for (i, ch) in text.chars().enumerate() {
            let scalar = i as f64 / span;
            styled.push_str(&self.at(scalar).sequence());
            styled.push(ch);
        }
        styled.push_str(RESET);
        styled
    }
}
