//! Console color policy.
//!
//! Follows NO_COLOR (https://no-color.org/) and the CLICOLOR conventions:
//!
//! - `NO_COLOR` set to anything: no colors
//! - `CLICOLOR_FORCE` set and not `0`: colors even when piped
//! - `CLICOLOR=0`: no colors
//! - otherwise colors only when stdout is a terminal
//!
//! Only progress messages are colored. The Markdown report never is.

use colored::control;
use std::io::IsTerminal;

/// Decide whether to color output from the relevant environment values
pub fn colors_enabled(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
    is_tty: bool,
) -> bool {
    if no_color.is_some() {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    is_tty
}

/// Configure `colored` for the whole process. Call early in `main`.
pub fn init_colors() {
    let var = |name: &str| std::env::var(name).ok();
    let enabled = colors_enabled(
        var("NO_COLOR").as_deref(),
        var("CLICOLOR").as_deref(),
        var("CLICOLOR_FORCE").as_deref(),
        std::io::stdout().is_terminal(),
    );
    control::set_override(enabled);
}
