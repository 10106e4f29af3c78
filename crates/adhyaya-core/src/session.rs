//! One reader's session: navigation state plus the open chapter's verses.

use std::sync::Arc;

use crate::error::LoadError;
use crate::loader::ChapterLoader;
use crate::navigation::{chapter_loaded, update, Action, Effect, NavigationState, Page};
use crate::verse::{ChapterDataset, ChapterId, VerseRecord};

#[derive(Debug)]
pub struct Session {
    state: NavigationState,
    dataset: Option<ChapterDataset>,
    unavailable: Option<String>,
}

impl Session {
    pub fn new(chapters: Vec<ChapterId>) -> Self {
        Self {
            state: NavigationState::new(chapters),
            dataset: None,
            unavailable: None,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Apply one action, loading chapter data if the transition asks for it.
    pub fn dispatch(&mut self, loader: &mut ChapterLoader, action: Action) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, action);
        self.state = state;

        for effect in effects {
            match effect {
                Effect::LoadChapter(chapter) => self.open(loader, chapter),
            }
        }
    }

    fn open(&mut self, loader: &mut ChapterLoader, chapter: ChapterId) {
        let verse_count = match loader.load(chapter) {
            Ok(dataset) => {
                let count = dataset.len();
                self.dataset = Some(dataset);
                self.unavailable = None;
                count
            }
            Err(err) => {
                log::error!("chapter {} unavailable: {}", chapter, err);
                self.dataset = Some(Arc::from(Vec::<VerseRecord>::new()));
                self.unavailable = Some(describe(&err));
                0
            }
        };

        let state = std::mem::take(&mut self.state);
        self.state = chapter_loaded(state, chapter, verse_count);
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    /// Verses of the open chapter, if the reader is on a chapter page.
    pub fn verses(&self) -> &[VerseRecord] {
        match (self.state.page(), &self.dataset) {
            (Page::Chapter, Some(dataset)) => &dataset[..],
            _ => &[],
        }
    }

    pub fn current_verse(&self) -> Option<&VerseRecord> {
        self.verses().get(self.state.verse_index())
    }

    /// Reason the open chapter could not be read, if it failed.
    pub fn unavailable(&self) -> Option<&str> {
        match self.state.page() {
            Page::Chapter => self.unavailable.as_deref(),
            _ => None,
        }
    }
}

fn describe(err: &LoadError) -> String {
    match err {
        LoadError::MissingColumn { column, .. } => format!("missing column `{}`", column),
        other => other.to_string(),
    }
}
