//! Chapter file loading with a per-loader cache.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::StringRecord;

use crate::config::Config;
use crate::error::LoadError;
use crate::verse::{ChapterDataset, ChapterId, VerseRecord};

/// Where chapter files live and how their columns are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSource {
    pub data_dir: PathBuf,
    /// File name with `{n}` standing for the chapter number.
    pub file_pattern: String,
    pub verse_column: String,
    pub meaning_column: String,
}

impl ChapterSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            data_dir: data_dir.into(),
            file_pattern: defaults.file_pattern,
            verse_column: defaults.verse_column,
            meaning_column: defaults.meaning_column,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            file_pattern: config.file_pattern.clone(),
            verse_column: config.verse_column.clone(),
            meaning_column: config.meaning_column.clone(),
        }
    }

    pub fn path_for(&self, chapter: ChapterId) -> PathBuf {
        let file_name = self.file_pattern.replace("{n}", &chapter.to_string());
        self.data_dir.join(file_name)
    }
}

/// Loads chapter files and keeps every parsed chapter for the loader's lifetime.
///
/// Files are assumed static while the loader lives; there is no invalidation.
/// Failed loads are not cached, so a later call retries the read.
#[derive(Debug)]
pub struct ChapterLoader {
    source: ChapterSource,
    cache: HashMap<ChapterId, ChapterDataset>,
}

impl ChapterLoader {
    pub fn new(source: ChapterSource) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    pub fn source(&self) -> &ChapterSource {
        &self.source
    }

    pub fn is_cached(&self, chapter: ChapterId) -> bool {
        self.cache.contains_key(&chapter)
    }

    /// Verses of `chapter`, reading its file on first access only.
    ///
    /// A chapter without a file yields an empty dataset.
    pub fn load(&mut self, chapter: ChapterId) -> Result<ChapterDataset, LoadError> {
        if let Some(dataset) = self.cache.get(&chapter) {
            log::debug!("chapter {} served from cache", chapter);
            return Ok(Arc::clone(dataset));
        }

        let path = self.source.path_for(chapter);
        let verses = match File::open(&path) {
            Ok(file) => {
                let verses = parse_chapter(
                    file,
                    &path,
                    &self.source.verse_column,
                    &self.source.meaning_column,
                )?;
                log::info!("loaded {} verses from {}", verses.len(), path.display());
                verses
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("no file for chapter {} at {}", chapter, path.display());
                Vec::new()
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        let dataset: ChapterDataset = verses.into();
        self.cache.insert(chapter, Arc::clone(&dataset));
        Ok(dataset)
    }
}

/// Parse delimited rows with a header line into verse records.
///
/// The verse and meaning columns are matched by name and deserialized into
/// [`VerseRecord`]. Rows that lack either column, or that cannot be decoded,
/// are skipped. Read failures surface as [`LoadError::Io`].
pub fn parse_chapter<R: Read>(
    reader: R,
    path: &Path,
    verse_column: &str,
    meaning_column: &str,
) -> Result<Vec<VerseRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(path, e))?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| normalize_header(h) == name)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let verse_idx = column(verse_column)?;
    let meaning_idx = column(meaning_column)?;

    // Other columns get blank names, which the record type ignores.
    let fields: StringRecord = (0..headers.len())
        .map(|i| match i {
            i if i == verse_idx => "text",
            i if i == meaning_idx => "meaning",
            _ => "",
        })
        .collect();

    let mut verses = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(csv_error(path, err)),
            Err(err) => {
                log::warn!("{}: skipping row {}: {}", path.display(), row + 1, err);
                continue;
            }
        };

        match record.deserialize::<VerseRecord>(Some(&fields)) {
            Ok(verse) => verses.push(verse),
            Err(err) => log::warn!(
                "{}: skipping row {}: expected `{}` and `{}`: {}",
                path.display(),
                row + 1,
                verse_column,
                meaning_column,
                err
            ),
        }
    }

    Ok(verses)
}

fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    let path = path.to_path_buf();
    if !err.is_io_error() {
        return LoadError::Csv { path, source: err };
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io { path, source },
        other => LoadError::Io {
            path,
            source: io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
        },
    }
}

// Spreadsheet exports often prepend a byte-order mark to the first header.
fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}
