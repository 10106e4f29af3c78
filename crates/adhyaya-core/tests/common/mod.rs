#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Once;

use adhyaya_core::{ChapterLoader, ChapterSource};
use tempfile::TempDir;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
        // Ignore the error if a logger was already set.
        let _ = TermLogger::init(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        );
    });
}

pub fn write_chapter(dir: &Path, chapter: u32, verses: usize) {
    let mut csv = String::from("Shloka,Meaning\n");
    for i in 1..=verses {
        csv.push_str(&format!("\"श्लोक {chapter}.{i}\",\"अर्थ {chapter}.{i}\"\n"));
    }
    fs::write(dir.join(format!("adhyaya_{chapter}.csv")), csv).unwrap();
}

pub fn library(chapters: &[(u32, usize)]) -> (TempDir, ChapterLoader) {
    init_logging();
    let dir = TempDir::new().unwrap();
    for &(chapter, verses) in chapters {
        write_chapter(dir.path(), chapter, verses);
    }
    let loader = ChapterLoader::new(ChapterSource::new(dir.path()));
    (dir, loader)
}
