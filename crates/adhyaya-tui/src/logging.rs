//! File logging for the reader. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr while it runs.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Default log location: the user cache directory, else the working directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("adhyaya").join("adhyaya.log"))
        .unwrap_or_else(|| PathBuf::from("./adhyaya.log"))
}

/// Start writing log records to `path`. Failing to create the file only costs
/// the log, so it is reported and otherwise ignored.
pub fn initialize(path: &Path, level: LevelFilter) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, config, file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
        }
    }
}
