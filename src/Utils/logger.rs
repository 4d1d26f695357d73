use log::LevelFilter;
use simplelog::*;
use std::fs::File;

/// Installs a terminal logger and, when a file name is given, a file logger next to it.
///
/// Returns false when no logger could be installed (another logger is already active,
/// which is the normal case in test binaries).
pub fn init_logger(level: LevelFilter, log_to_file: Option<&str>) -> bool {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if let Some(filename) = log_to_file {
        match File::create(filename) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
        }
    }
    CombinedLogger::init(loggers).is_ok()
}

/// Logger for tests: debug level, console only, silently ignored if already installed
pub fn init_test_logger() {
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());
}
