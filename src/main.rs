// SPDX-License-Identifier: MIT
//
// semigraph — draw a titled, bordered window in the terminal.
//
// This is the binary that wires the crates together:
//
//   sg-term   → SGR tables, escape encoding, the Styler
//   sg-box    → glyph presets and the BoxRenderer
//   sg-window → Window geometry, Session, render passes
//
// One run builds one window from the command line and renders it to
// stdout. Logging goes to stderr so it never mixes with the window.

mod config;
mod logger;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::info;
use sg_box::BoxRenderer;
use sg_term::Styler;
use sg_window::Session;

use crate::config::{Cli, Config};

/// Render the configured window into `out`.
fn run<W: Write>(config: &Config, out: W) -> io::Result<()> {
    let styler = if config.color { Styler::new() } else { Styler::plain() };
    let mut session = Session::new(out, BoxRenderer::new(config.preset.glyphs()))
        .with_styler(styler)
        .with_scheme(config.scheme);

    if config.clear {
        session.clear_screen()?;
        session.move_cursor(1, 1)?;
    }

    let window = config.window();
    info!(
        "drawing {} row(s) with {} glyphs at width {}",
        window.height(),
        config.preset,
        window.width()
    );

    if config.frame_only {
        window.render_frame(&mut session)?;
    } else {
        window.render(&mut session)?;
    }

    if config.show {
        window.show(session.get_mut())?;
    }

    session.flush()
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    let config = Config::from_cli(cli);

    if let Err(e) = run(&config, io::stdout().lock()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            process::exit(0);
        }
        eprintln!("semigraph: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
