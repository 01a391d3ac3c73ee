#![forbid(unsafe_code)]

//! `hyprtint` - Truecolor styling and gradient rendering for terminals.
//!
//! Maps color specifications (named colors, hex strings, RGB tuples, packed
//! integers, HLS triples) to SGR escape sequences, composes text effects,
//! and renders two-stop color gradients across a string's characters,
//! interpolating in either RGB or HLS space.
//!
//! # Example
//!
//! ```
//! use hyprtint::{ColorSpec, FG, Sgr, Effect, WheelFactory};
//! use std::collections::HashMap;
//!
//! let colors = HashMap::new();
//!
//! // A bold red line.
//! let red = FG.color(&ColorSpec::Hex("#FF0000".into()), &colors).unwrap();
//! let styled = Effect::from(Sgr::Bold).combine(&red).apply("alert");
//! assert_eq!(styled, "\x1b[1;38;2;255;0;0malert\x1b[0m");
//!
//! // A gradient sweeping hue from red to blue.
//! let blue = FG.color(&ColorSpec::Hex("#0000FF".into()), &colors).unwrap();
//! let wheel = WheelFactory::HLS
//!     .between(&red.sequence(), &blue.sequence())
//!     .unwrap();
//! let banner = wheel.gradient("hyprtint");
//! assert!(banner.ends_with("\x1b[0m"));
//! ```
//!
//! The library never touches the terminal; it only builds escape-coded
//! strings. Printing them is the caller's business (the `hyprtint` binary,
//! behind the default `cli` feature, does exactly that).

// Core modules (always available)
pub mod color;
pub mod effect;
pub mod error;
pub mod theme;
pub mod wheel;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use color::{ColorSpec, Rgb};
pub use effect::{BG, Effect, EffectFactory, FG, RESET, Sgr, colorize, colorize_bg};
pub use error::Error;
pub use theme::Theme;
pub use wheel::{WheelFactory, WheelInterpolator};
