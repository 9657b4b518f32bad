// SPDX-License-Identifier: MIT
//
// Stderr backend for the `log` facade.
//
// stdout carries the rendered window, so diagnostics must never touch it.
// Each record is one line: `semigraph[LEVEL] target: message`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "semigraph[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Map the `-v` count to a level filter: none → warn, then info, debug, trace.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(verbosity: u8) {
    // Already installed on repeat calls; only the level changes.
    log::set_logger(&LOGGER).ok();
    log::set_max_level(level_for(verbosity));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(200), LevelFilter::Trace);
    }

    #[test]
    fn repeated_init_only_changes_the_level() {
        init(0);
        init(2);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
