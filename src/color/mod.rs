//! Color parsing and canonical RGB representation.
//!
//! Every input shape (hex string, packed integer, named lookup, RGB or HLS
//! triple) funnels into [`Rgb`], the canonical parsed form. Dispatch happens
//! through the [`ColorSpec`] variants; there is no runtime type inspection.

pub mod convert;

use crate::error::Error;
use std::collections::HashMap;
use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `const` so theme palettes and named colors can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string with an optional leading `#`.
    ///
    /// Three digits expand each nibble to a full byte (`#F00` is (255,0,0));
    /// six digits are byte-exact. Any other length, or a non-hex digit,
    /// fails with [`Error::InvalidFormat`].
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(Error::InvalidFormat(hex.to_string()));
        }

        let channel = |span: &str, weight: u8| -> Result<u8, Error> {
            u8::from_str_radix(span, 16)
                .map(|v| v * weight)
                .map_err(|_| Error::InvalidFormat(hex.to_string()))
        };

        match digits.len() {
            // One digit per channel; 0xF * 17 = 0xFF.
            3 => Ok(Self {
                r: channel(&digits[0..1], 17)?,
                g: channel(&digits[1..2], 17)?,
                b: channel(&digits[2..3], 17)?,
            }),
            6 => Ok(Self {
                r: channel(&digits[0..2], 1)?,
                g: channel(&digits[2..4], 1)?,
                b: channel(&digits[4..6], 1)?,
            }),
            _ => Err(Error::InvalidFormat(hex.to_string())),
        }
    }

    /// Parse a packed 24-bit RGB integer (`0xRRGGBB`).
    ///
    /// The value is formatted as a zero-padded 6-digit hex string and parsed
    /// like any other hex color, so anything above 24 bits fails with
    /// [`Error::InvalidFormat`].
    pub fn from_packed(packed: u32) -> Result<Self, Error> {
        Self::from_hex(&format!("{packed:06x}"))
    }

    /// Components widened to the triple form the converter and wheel use.
    #[must_use]
    pub const fn triple(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(80, 250, 123)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }

    #[must_use]
    pub const fn pink() -> Self {
        Self::new(255, 121, 198)
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(255, 184, 108)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(98, 114, 164)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in one of the supported input shapes, not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// Name to look up in a caller-supplied table, falling back to literal hex.
    Named(String),
    /// Hex string, `#RGB` or `#RRGGBB`.
    Hex(String),
    /// Already-canonical RGB triple.
    Rgb(Rgb),
    /// Packed 24-bit integer, `0xRRGGBB`.
    Packed(u32),
    /// HLS triple: hue 0..=360, lightness and saturation 0..=100.
    Hls([i32; 3]),
}

impl ColorSpec {
    /// Classify a flag or config string into a color shape.
    ///
    /// `#…` is hex, `hls:h,l,s` is an HLS triple, `r,g,b` an RGB triple,
    /// a decimal or `0x…` number a packed integer, and a bare word a named
    /// lookup. Anything else fails with [`Error::UnsupportedColorType`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        let spec = input.trim();
        if spec.is_empty() {
            return Err(Error::UnsupportedColorType {
                value: input.to_string(),
                kind: "empty string",
            });
        }

        if spec.starts_with('#') {
            return Ok(Self::Hex(spec.to_string()));
        }

        if let Some(body) = spec.strip_prefix("hls:") {
            let fields: Vec<&str> = body.split(',').collect();
            if fields.len() != 3 {
                return Err(Error::UnsupportedColorType {
                    value: input.to_string(),
                    kind: "hls tuple",
                });
            }
            let mut triple = [0_i32; 3];
            for (slot, field) in triple.iter_mut().zip(&fields) {
                *slot = field
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidFormat(input.to_string()))?;
            }
            return Ok(Self::Hls(triple));
        }

        if spec.contains(',') {
            let fields: Vec<&str> = spec.split(',').collect();
            if fields.len() != 3 {
                return Err(Error::UnsupportedColorType {
                    value: input.to_string(),
                    kind: "rgb tuple",
                });
            }
            let mut triple = [0_u8; 3];
            for (slot, field) in triple.iter_mut().zip(&fields) {
                *slot = field
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidFormat(input.to_string()))?;
            }
            return Ok(Self::Rgb(Rgb::new(triple[0], triple[1], triple[2])));
        }

        if let Some(digits) = spec.strip_prefix("0x") {
            let packed = u32::from_str_radix(digits, 16)
                .map_err(|_| Error::InvalidFormat(input.to_string()))?;
            return Ok(Self::Packed(packed));
        }
        if spec.bytes().all(|b| b.is_ascii_digit()) {
            let packed = spec
                .parse()
                .map_err(|_| Error::InvalidFormat(input.to_string()))?;
            return Ok(Self::Packed(packed));
        }

        if spec.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Ok(Self::Named(spec.to_string()));
        }

        Err(Error::UnsupportedColorType {
            value: input.to_string(),
            kind: "unrecognized shape",
        })
    }

    /// Resolve this spec to a canonical [`Rgb`] against a name table.
    ///
    /// Lookup is case-sensitive. A name missing from the table is retried as
    /// a literal hex string; only when that also fails is the spec an error.
    pub fn resolve(&self, colors: &HashMap<String, String>) -> Result<Rgb, Error> {
        match self {
            Self::Named(name) => {
                let hex = colors.get(name).map_or(name.as_str(), String::as_str);
                Rgb::from_hex(hex)
            }
            Self::Hex(hex) => Rgb::from_hex(hex),
            Self::Rgb(rgb) => Ok(*rgb),
            Self::Packed(packed) => Rgb::from_packed(*packed),
            // In-range HLS lands in 0..=255 per channel; out-of-range input
            // is not defended anywhere in the conversion pipeline.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self::Hls(hls) => {
                let [r, g, b] = convert::hls_to_rgb(*hls);
                Ok(Rgb::new(r as u8, g as u8, b as u8))
            }
        }
    }
}
