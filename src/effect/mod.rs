//! SGR escape-code construction and composition.
//!
//! An [`Effect`] holds the semicolon-joined numeric body of one escape
//! sequence. Effects are immutable: build one once, apply it to as many
//! strings as needed. Applying wraps the text with the sequence and a single
//! trailing reset; nesting is the caller's responsibility.

use crate::color::{ColorSpec, Rgb};
use crate::color::convert::hls_to_rgb;
use crate::error::Error;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Terminates any active SGR styling so subsequent text returns to the
/// terminal default.
pub const RESET: &str = "\x1b[0m";

/// The fixed registry of single-code text effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sgr {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    FastBlink,
    /// Swap foreground and background (inverse video).
    Swap,
    Conceal,
    Strikethrough,
    Default,
}

impl Sgr {
    /// The numeric SGR parameter for this effect.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Reset => 0,
            Self::Bold => 1,
            Self::Faint => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::FastBlink => 6,
            Self::Swap => 7,
            Self::Conceal => 8,
            Self::Strikethrough => 9,
            Self::Default => 10,
        }
    }

    /// Lowercase name, matching what CLI flags and config values use.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Bold => "bold",
            Self::Faint => "faint",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::FastBlink => "fast-blink",
            Self::Swap => "swap",
            Self::Conceal => "conceal",
            Self::Strikethrough => "strikethrough",
            Self::Default => "default",
        }
    }

    /// Every effect in registry order.
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::Reset,
            Self::Bold,
            Self::Faint,
            Self::Italic,
            Self::Underline,
            Self::Blink,
            Self::FastBlink,
            Self::Swap,
            Self::Conceal,
            Self::Strikethrough,
            Self::Default,
        ]
    }
}

impl FromStr for Sgr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::InvalidEffect(s.to_string()))
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One escape sequence, held as its semicolon-joined code body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Effect {
    codes: String,
}

impl Effect {
    /// Wrap a single numeric code or a pre-joined semicolon list.
    #[must_use]
    pub fn new(codes: impl Into<String>) -> Self {
        Self {
            codes: codes.into(),
        }
    }

    /// The semicolon-joined code body, without the escape framing.
    #[must_use]
    pub fn codes(&self) -> &str {
        &self.codes
    }

    /// The full escape sequence: `ESC [ codes m`.
    #[must_use]
    pub fn sequence(&self) -> String {
        format!("\x1b[{}m", self.codes)
    }

    /// Layer another effect onto this one.
    ///
    /// The result carries both code lists in one sequence, so a foreground
    /// color can be combined with bold, underline, and so on.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self::new(format!("{};{}", self.codes, other.codes))
    }

    /// Wrap `text` between this sequence and the reset sequence.
    ///
    /// Every styled span is self-terminating.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let start = self.sequence();
        format!("{start}{text}{RESET}")
    }
}

impl From<Sgr> for Effect {
    fn from(effect: Sgr) -> Self {
        Self::new(effect.code().to_string())
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.codes)
    }
}

/// Builds truecolor effects for one color plane.
///
/// The prefix is the SGR truecolor introducer: `38;2` paints the foreground,
/// `48;2` the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectFactory {
    prefix: &'static str,
}

/// Foreground truecolor factory.
pub const FG: EffectFactory = EffectFactory::new("38;2");
/// Background truecolor factory.
pub const BG: EffectFactory = EffectFactory::new("48;2");

impl EffectFactory {
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Resolve any color shape against a name table and build its effect.
    ///
    /// This is the single polymorphic entry point; the shape dispatch lives
    /// in [`ColorSpec`], not here.
    pub fn color(
        &self,
        spec: &ColorSpec,
        colors: &HashMap<String, String>,
    ) -> Result<Effect, Error> {
        // HLS keeps the verbatim-triple path so unvalidated input flows
        // through unchanged, as it does for the wheel.
        if let ColorSpec::Hls(hls) = spec {
            return Ok(self.hls(*hls));
        }
        Ok(self.rgb(spec.resolve(colors)?))
    }

    /// Effect for a canonical RGB color.
    #[must_use]
    pub fn rgb(&self, color: Rgb) -> Effect {
        self.triple(color.triple())
    }

    /// Effect for an HLS triple, converted to RGB for emission.
    #[must_use]
    pub fn hls(&self, hls: [i32; 3]) -> Effect {
        self.triple(hls_to_rgb(hls))
    }

    /// Code body `<prefix>;<r>;<g>;<b>`, components emitted verbatim.
    fn triple(&self, [r, g, b]: [i32; 3]) -> Effect {
        Effect::new(format!("{};{r};{g};{b}", self.prefix))
    }
}

/// Color `text` with a truecolor foreground, reset at the end.
#[must_use]
pub fn colorize(text: &str, color: Rgb) -> String {
    FG.rgb(color).apply(text)
}

/// Color `text` with both foreground and background, reset at the end.
#[must_use]
pub fn colorize_bg(text: &str, fg: Rgb, bg: Rgb) -> String {
    let fg_code = FG.rgb(fg).sequence();
    let bg_code = BG.rgb(bg).sequence();
    format!("{fg_code}{bg_code}{text}{RESET}")
}
