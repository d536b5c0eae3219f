//! Terminal colors and the depth-indexed palette.

use anyhow::{ensure, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Number of depth levels before the palette starts over.
const CYCLE_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl ConsoleColor {
    /// SGR escape that switches the foreground to this color.
    pub fn code(self) -> &'static str {
        match self {
            ConsoleColor::Black => "\x1b[0;30m",
            ConsoleColor::Red => "\x1b[0;31m",
            ConsoleColor::Green => "\x1b[0;32m",
            ConsoleColor::Yellow => "\x1b[0;33m",
            ConsoleColor::Blue => "\x1b[0;34m",
            ConsoleColor::Purple => "\x1b[0;35m",
            ConsoleColor::Cyan => "\x1b[0;36m",
            ConsoleColor::White => "\x1b[0;37m",
        }
    }
}

/// Escape that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Ordered, non-empty list of colors applied by depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSequence {
    colors: Vec<ConsoleColor>,
}

impl ColorSequence {
    pub fn new(colors: Vec<ConsoleColor>) -> Result<Self> {
        ensure!(!colors.is_empty(), "Color palette must contain at least one color");
        Ok(Self { colors })
    }

    #[cfg(test)]
    pub fn colors(&self) -> &[ConsoleColor] {
        &self.colors
    }

    /// Color for a line at `depth`. The root is always the first color.
    ///
    /// Cycles every three levels; palettes shorter than that cycle over
    /// their own length, and colors past the third are never reached.
    pub fn color_at(&self, depth: usize) -> ConsoleColor {
        let modulus = self.colors.len().min(CYCLE_LEN);
        self.colors[depth % modulus]
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self {
            colors: vec![ConsoleColor::White, ConsoleColor::Purple, ConsoleColor::Yellow],
        }
    }
}
