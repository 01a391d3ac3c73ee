//! Unified error type for all hyprtint operations.

/// Error type for hyprtint operations.
#[derive(Debug)]
pub enum Error {
    /// Hex string, packed integer, or stop sequence with an invalid shape.
    InvalidFormat(String),
    /// Color specification matching none of the recognized shapes.
    UnsupportedColorType {
        /// The offending input, verbatim.
        value: String,
        /// The shape that was rejected.
        kind: &'static str,
    },
    /// Gradient stops carrying different color planes.
    SpaceMismatch {
        /// Plane code of the first stop.
        start: i32,
        /// Plane code of the second stop.
        end: i32,
    },
    /// Unknown interpolation space name.
    InvalidSpace(String),
    /// Unknown text effect name.
    InvalidEffect(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML theme parsing error.
    ThemeParse(toml::de::Error),
    /// Serialization error.
    Format(String),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "invalid color format: '{s}'"),
            Self::UnsupportedColorType { value, kind } => {
                write!(f, "color '{value}' of kind '{kind}' is not supported")
            }
            Self::SpaceMismatch { start, end } => {
                write!(
                    f,
                    "gradient stops use different color planes ({start} vs {end})"
                )
            }
            Self::InvalidSpace(s) => {
                write!(f, "unknown interpolation space: '{s}' (expected rgb or hls)")
            }
            Self::InvalidEffect(s) => write!(f, "unknown text effect: '{s}'"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThemeParse(e) => write!(f, "theme parse error: {e}"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ThemeParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ThemeParse(e)
    }
}
