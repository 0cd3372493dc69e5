//! Color support with `--color`, NO_COLOR and CLICOLOR handling
//!
//! With `--color auto` the conventions are checked in this order:
//! - `NO_COLOR` (any value): colors off (https://no-color.org/)
//! - `CLICOLOR_FORCE` non-zero: colors on, even when not a TTY
//! - `CLICOLOR=0`: colors off
//! - otherwise colors follow whether stdout is a terminal

use clap::ValueEnum;
use colored::control;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Configure colored output for the whole process. Call early in main().
pub fn init_colors(choice: ColorChoice) {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());
    control::set_override(should_colorize(choice, |key| std::env::var(key).ok(), is_tty));
}

fn should_colorize(
    choice: ColorChoice,
    env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> bool {
    match choice {
        ColorChoice::Always => return true,
        ColorChoice::Never => return false,
        ColorChoice::Auto => {}
    }

    if env("NO_COLOR").is_some() {
        return false;
    }

    if env("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if env("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}
