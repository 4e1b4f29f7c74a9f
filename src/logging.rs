#![cfg(feature = "std")]

use std::env;
use std::sync::OnceLock;

use log::{self, LevelFilter, Metadata, Record};

/// Level settings parsed from `BROADSIDE_LOG`, e.g. `warn,broadside::engine=debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    default: LevelFilter,
    /// Per-target overrides, longest prefix wins.
    targets: Vec<(String, LevelFilter)>,
}

impl Filter {
    fn parse(spec: &str) -> Self {
        let mut filter = Filter {
            default: LevelFilter::Info,
            targets: Vec::new(),
        };
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        filter.targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        filter
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

struct StderrLogger {
    filter: OnceLock<Filter>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.filter.get() {
            Some(filter) => metadata.level() <= filter.level_for(metadata.target()),
            None => metadata.level() <= log::max_level(),
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger {
    filter: OnceLock::new(),
};

/// Initialize logging from the `BROADSIDE_LOG` environment variable.
///
/// The variable holds a default level and optional `target=level`
/// overrides, comma separated. Defaults to `info`. Output goes to stderr so
/// stdout stays free for reports.
pub fn init_logging() {
    let filter = Filter::parse(&env::var("BROADSIDE_LOG").unwrap_or_default());
    let max = filter.max_level();
    if LOGGER.filter.set(filter).is_ok() {
        let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(max));
    }
}
