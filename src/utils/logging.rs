use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Install a terminal logger. Debug mode lowers the filter so per-move
/// traces and search statistics show up.
pub fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // A second install (tests, embedding binaries) keeps the first logger.
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_ok() {
        log::debug!("Logger initialized at {}.", level);
    }
}
