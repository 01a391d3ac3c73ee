//! Command-line interface for hyprtint.
//!
//! Thin layer over the library: color specs come in as strings, get
//! classified through [`ColorSpec::parse`], and resolve against the loaded
//! theme. All terminal output happens here; the library itself never prints.

use crate::color::ColorSpec;
use crate::effect::{BG, Effect, FG, Sgr, colorize};
use crate::error::Error;
use crate::theme::Theme;
use crate::wheel::WheelFactory;
use clap::{Parser, Subcommand};

/// Interpolation space for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Space {
    Rgb,
    Hls,
}

impl Space {
    const fn factory(self) -> WheelFactory {
        match self {
            Self::Rgb => WheelFactory::RGB,
            Self::Hls => WheelFactory::HLS,
        }
    }
}

/// hyprtint - Style terminal text from the command line.
#[derive(Parser)]
#[command(
    name = "hyprtint",
    version,
    about = "Style terminal text from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Style a line of text with colors and attributes.
    Paint {
        /// Text to style
        text: String,
        /// Foreground color: name, #hex, r,g,b, hls:h,l,s, or packed integer
        #[arg(long)]
        color: Option<String>,
        /// Background color, same shapes as --color
        #[arg(long)]
        bg: Option<String>,
        /// Comma-separated text effects (bold, italic, underline, ...)
        #[arg(long, value_delimiter = ',')]
        effects: Vec<String>,
    },
    /// Render a two-stop color gradient across the text.
    Gradient {
        /// Text to color
        text: String,
        /// Start color
        #[arg(long)]
        from: String,
        /// End color
        #[arg(long)]
        to: String,
        /// Interpolation space; defaults to the theme's gradient.space
        #[arg(long, value_enum)]
        space: Option<Space>,
        /// Color the background instead of the foreground
        #[arg(long)]
        bg: bool,
    },
    /// List the theme's named colors.
    Palette {
        /// Dump the raw name-to-hex map as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch a parsed command against the loaded theme.
pub fn run(cli: &Cli, theme: &Theme) -> Result<(), Error> {
    match &cli.command {
        Command::Paint {
            text,
            color,
            bg,
            effects,
        } => cmd_paint(theme, text, color.as_deref(), bg.as_deref(), effects),
        Command::Gradient {
            text,
            from,
            to,
            space,
            bg,
        } => cmd_gradient(theme, text, from, to, *space, *bg),
        Command::Palette { json } => cmd_palette(theme, *json),
    }
}

fn cmd_paint(
    theme: &Theme,
    text: &str,
    color: Option<&str>,
    bg: Option<&str>,
    effects: &[String],
) -> Result<(), Error> {
    let mut layered: Option<Effect> = None;
    let mut layer = |next: Effect| {
        layered = Some(match layered.take() {
            Some(prev) => prev.combine(&next),
            None => next,
        });
    };

    for name in effects {
        layer(Effect::from(name.parse::<Sgr>()?));
    }
    if let Some(spec) = color {
        layer(FG.color(&ColorSpec::parse(spec)?, &theme.colors)?);
    }
    if let Some(spec) = bg {
        layer(BG.color(&ColorSpec::parse(spec)?, &theme.colors)?);
    }

    match layered {
        Some(effect) => println!("{}", effect.apply(text)),
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_gradient(
    theme: &Theme,
    text: &str,
    from: &str,
    to: &str,
    space: Option<Space>,
    bg: bool,
) -> Result<(), Error> {
    let factory = match space {
        Some(s) => s.factory(),
        None => WheelFactory::named(&theme.gradient.space)?,
    };
    let plane = if bg { BG } else { FG };

    let start = plane.color(&ColorSpec::parse(from)?, &theme.colors)?;
    let end = plane.color(&ColorSpec::parse(to)?, &theme.colors)?;
    let wheel = factory.between(&start.sequence(), &end.sequence())?;

    println!("{}", wheel.gradient(text));
    Ok(())
}

fn cmd_palette(theme: &Theme, json: bool) -> Result<(), Error> {
    if json {
        let dump = serde_json::to_string_pretty(&theme.colors)
            .map_err(|e| Error::Format(e.to_string()))?;
        println!("{dump}");
        return Ok(());
    }

    if theme.colors.is_empty() {
        println!("(no named colors in theme)");
        return Ok(());
    }

    let mut entries: Vec<(&String, &String)> = theme.colors.iter().collect();
    entries.sort();
    for (name, hex) in entries {
        match ColorSpec::Named(name.clone()).resolve(&theme.colors) {
            Ok(rgb) => println!("{} {name}  {hex}", colorize("███", rgb)),
            Err(_) => println!("    {name}  {hex} (invalid)"),
        }
    }
    Ok(())
}
