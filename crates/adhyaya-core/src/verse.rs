//! Verse data shared between the loader, the session and any front end.

use serde::Deserialize;
use std::sync::Arc;

/// Chapters are numbered from 1.
pub type ChapterId = u32;

/// One row of a chapter file: the original verse and its translated meaning.
///
/// Rows are deserialized with the file's verse and meaning columns renamed to
/// `text` and `meaning`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseRecord {
    pub text: String,
    pub meaning: String,
}

impl VerseRecord {
    pub fn new(text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meaning: meaning.into(),
        }
    }
}

/// Verses of one chapter in file order. Position is the verse number minus one.
pub type ChapterDataset = Arc<[VerseRecord]>;
