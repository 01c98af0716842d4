// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Help section headers and report titles: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders: medium grey
    pub const CONTEXT: u8 = 245;
    /// Classification conflicts: soft red
    pub const ERROR: u8 = 167;
}

const RESET: &str = "\x1b[0m";

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
}

/// Colors report text when enabled, otherwise passes it through.
///
/// Commands decide once with [`Painter::detect`] and hand the painter to
/// their renderers, which stay pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn detect() -> Self {
        Self { enabled: should_colorize() }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn forced() -> Self {
        Self { enabled: true }
    }

    fn paint(self, code: u8, text: &str) -> String {
        if self.enabled {
            format!("\x1b[38;5;{code}m{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn title(self, text: &str) -> String {
        self.paint(codes::HEADER, text)
    }

    pub fn error(self, text: &str) -> String {
        self.paint(codes::ERROR, text)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
