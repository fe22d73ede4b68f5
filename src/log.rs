use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Sets up `env_logger` to print messages up to `level` to stderr with a compact
/// `[LEVEL elapsed] message` format. Calling it more than once is a no-op.
pub fn build_logger_for_level(level: LevelFilter) {
    let start = std::time::Instant::now();
    let _ = Builder::new()
        .filter_level(level)
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:<5} {:>8.3}s] {}",
                record.level(),
                start.elapsed().as_secs_f64(),
                record.args()
            )
        })
        .try_init();
}

/// Like [`build_logger_for_level`] where each level of `verbosity` (e.g. number of `-v` flags)
/// raises the level above `base` by one step.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base_idx = levels.iter().position(|&l| l == base).unwrap_or(0);
    levels[(base_idx + verbosity).min(levels.len() - 1)]
}
