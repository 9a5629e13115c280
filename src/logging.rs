/**
 * Logging setup. Warnings go to standard error by default; `-v` and `-vv` make the
 * terminal logger chattier, and `--log-file` keeps a full debug log on disk.
 */
use std::fs::File;
use std::path::Path;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use super::common::{QuizError, Result};


pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}


pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            level_for_verbosity(verbose),
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    ];

    if let Some(path) = log_file {
        let file = File::create(path)
            .map_err(|e| QuizError::Logger(format!("{}: {}", path.to_string_lossy(), e)))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    CombinedLogger::init(loggers).map_err(|e| QuizError::Logger(e.to_string()))
}
