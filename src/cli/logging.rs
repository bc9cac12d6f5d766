use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // init only fails when a logger is already installed
    let _ = SimpleLogger::new()
        .with_level(log_level)
        .init();

    log_level
}
