//! Logger setup for the dashboard binary.
//!
//! Terminal output is reserved for the dashboard itself, so logs go to
//! `./painel_vagas.log` in the working directory. When that file cannot be
//! created, logs fall back to stderr.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./painel_vagas.log";

pub fn initialize() {
    let _ = CombinedLogger::init(vec![open_logger(Path::new(LOG_FILENAME))]);
}

fn open_logger(path: &Path) -> Box<dyn SharedLogger> {
    let level = LevelFilter::Info;
    let config = build_config();

    match File::create(path) {
        Ok(file) => WriteLogger::new(level, config, file),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {}: {err}", path.display());
            TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("html5ever")
        .add_filter_ignore_str("selectors")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_created_when_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("painel_vagas.log");

        let logger = open_logger(&path);

        assert!(path.exists());
        assert_eq!(logger.level(), LevelFilter::Info);
    }

    #[test]
    fn unwritable_log_path_falls_back_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("painel_vagas.log");

        let logger = open_logger(&path);

        assert!(!path.exists());
        assert_eq!(logger.level(), LevelFilter::Info);
    }
}
