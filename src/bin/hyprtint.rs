//! hyprtint binary: style text, render gradients, inspect the theme.

use clap::Parser;
use hyprtint::cli::{self, Cli};
use hyprtint::theme::Theme;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The theme drives named-color resolution and gradient defaults; it must
    // load before any command runs.
    let theme = match Theme::load() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error loading theme: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&cli, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
