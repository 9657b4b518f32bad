// SPDX-License-Identifier: MIT
//
// Command-line surface and the run configuration built from it.
//
// clap does the parsing; names of glyph presets and styles go straight
// through their `FromStr` impls. What clap cannot check on its own (anchor
// syntax and range, the color decision) is resolved in `Config::from_cli`.

use std::str::FromStr;

use clap::{ArgAction, Parser, ValueEnum};
use sg_box::Preset;
use sg_term::{Style, terminal};
use sg_window::{Placement, Scheme, Window};
use thiserror::Error;

const DEFAULT_TITLE: &str = "Semigraphics Demo";
const DEFAULT_ROW: &str = "  Copyright (c) 2025";

// ─── CLI ────────────────────────────────────────────────────────────────────

/// Draw a titled, bordered window with box-drawing glyphs and ANSI color.
#[derive(Debug, Parser)]
#[command(name = "semigraph", version, about, long_about = None)]
pub struct Cli {
    /// Window title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Content row (repeat for more rows)
    #[arg(short, long = "row", value_name = "TEXT", default_values_t = [DEFAULT_ROW.to_owned()])]
    pub rows: Vec<String>,

    /// Glyph preset: rounded, square, double, double-horizontal, double-vertical, ascii
    #[arg(short, long, default_value_t = Preset::Rounded)]
    pub glyphs: Preset,

    /// Anchor the window's top-left corner at ROW,COL (1-based)
    #[arg(long, value_name = "ROW,COL")]
    pub at: Option<Anchor>,

    /// Style of the frame, as MODE,FG,BG
    #[arg(long, value_name = "MODE,FG,BG", default_value_t = Scheme::CLASSIC.frame)]
    pub frame: Style,

    /// Style left active after the window, as MODE,FG,BG
    #[arg(long, value_name = "MODE,FG,BG", default_value_t = Scheme::CLASSIC.resting)]
    pub resting: Style,

    /// When to emit color sequences
    #[arg(long, value_enum, default_value_t = ColorChoice::Always)]
    pub color: ColorChoice,

    /// Clear the screen and home the cursor first
    #[arg(long)]
    pub clear: bool,

    /// Draw the rows without the title line and splitter
    #[arg(long)]
    pub frame_only: bool,

    /// Print the window descriptor after rendering
    #[arg(long)]
    pub show: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// When SGR sequences are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn resolve(self) -> bool {
        match self {
            Self::Auto => terminal::is_tty(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

// ─── Anchor ─────────────────────────────────────────────────────────────────

/// A `ROW,COL` screen position given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: i32,
    pub col: i32,
}

impl FromStr for Anchor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedAnchor(s.to_owned());
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        let row: i32 = row.trim().parse().map_err(|_| malformed())?;
        let col: i32 = col.trim().parse().map_err(|_| malformed())?;
        if row < 1 || col < 1 {
            return Err(ConfigError::AnchorOutOfRange { row, col });
        }
        Ok(Self { row, col })
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("malformed anchor `{0}` (expected `ROW,COL`)")]
    MalformedAnchor(String),

    #[error("anchor {row},{col} is off screen (rows and columns start at 1)")]
    AnchorOutOfRange { row: i32, col: i32 },
}

// ─── Config ─────────────────────────────────────────────────────────────────

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub rows: Vec<String>,
    pub preset: Preset,
    pub placement: Placement,
    pub scheme: Scheme,
    pub color: bool,
    pub clear: bool,
    pub frame_only: bool,
    pub show: bool,
}

impl Config {
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            title: cli.title,
            rows: cli.rows,
            preset: cli.glyphs,
            placement: cli
                .at
                .map_or(Placement::Inline, |a| Placement::At { row: a.row, col: a.col }),
            scheme: Scheme::new(cli.frame, cli.resting),
            color: cli.color.resolve(),
            clear: cli.clear,
            frame_only: cli.frame_only,
            show: cli.show,
        }
    }

    /// Build the window this configuration describes.
    #[must_use]
    pub fn window(&self) -> Window {
        let mut window = Window::new();
        window.set_placement(self.placement);
        window.set_title(self.title.as_str());
        for row in &self.rows {
            window.add_row(row.as_str());
        }
        window
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
