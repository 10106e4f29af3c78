//! Page navigation as a pure state machine.
//!
//! Front ends never mutate [`NavigationState`] directly; they feed [`Action`]s
//! through [`update`] and carry out the returned [`Effect`]s. The verse count
//! of an opened chapter only enters the state through `chapter_loaded`,
//! which the session calls with the length of the dataset it holds.

use crate::verse::ChapterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Cover,
    Index,
    Chapter,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    page: Page,
    selected_chapter: Option<ChapterId>,
    verse_index: usize,
    verse_count: usize,
    chapters: Vec<ChapterId>,
}

impl NavigationState {
    /// Start on the cover with the chapters the index offers.
    pub fn new(chapters: Vec<ChapterId>) -> Self {
        Self {
            chapters,
            ..Self::default()
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_chapter(&self) -> Option<ChapterId> {
        self.selected_chapter
    }

    pub fn verse_index(&self) -> usize {
        self.verse_index
    }

    /// Verses in the open chapter, 0 until its dataset has been loaded.
    pub fn verse_count(&self) -> usize {
        self.verse_count
    }

    pub fn chapters(&self) -> &[ChapterId] {
        &self.chapters
    }

    pub fn can_go_previous(&self) -> bool {
        self.page == Page::Chapter && self.verse_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page == Page::Chapter && self.verse_index + 1 < self.verse_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the cover for the index.
    Proceed,
    /// Open a chapter from the index.
    OpenChapter(ChapterId),
    /// Index back to the cover.
    Back,
    PreviousVerse,
    NextVerse,
    BackToIndex,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadChapter(ChapterId),
}

/// Pure update function: applies an action to state and returns any effects.
///
/// Actions that do not apply to the current page, and verse moves whose
/// control is disabled, leave the state untouched.
pub fn update(mut state: NavigationState, action: Action) -> (NavigationState, Vec<Effect>) {
    let effects = match (state.page, action) {
        (Page::Cover, Action::Proceed) => {
            state.page = Page::Index;
            Vec::new()
        }
        (Page::Index, Action::OpenChapter(chapter)) => {
            if !state.chapters.contains(&chapter) {
                log::warn!("chapter {} is not in the index", chapter);
                return (state, Vec::new());
            }
            state.page = Page::Chapter;
            state.selected_chapter = Some(chapter);
            state.verse_index = 0;
            state.verse_count = 0;
            vec![Effect::LoadChapter(chapter)]
        }
        (Page::Index, Action::Back) => {
            state.page = Page::Cover;
            Vec::new()
        }
        (Page::Chapter, Action::PreviousVerse) => {
            if state.can_go_previous() {
                state.verse_index -= 1;
            }
            Vec::new()
        }
        (Page::Chapter, Action::NextVerse) => {
            if state.can_go_next() {
                state.verse_index += 1;
            }
            Vec::new()
        }
        (Page::Chapter, Action::BackToIndex) => {
            state.page = Page::Index;
            Vec::new()
        }
        (Page::Chapter, Action::Home) => {
            state.page = Page::Cover;
            Vec::new()
        }
        (page, action) => {
            log::debug!("{:?} ignored on {:?} page", action, page);
            Vec::new()
        }
    };

    (state, effects)
}

/// Record the size of the dataset loaded for `chapter`.
///
/// A late result for a chapter the reader already left is dropped.
pub(crate) fn chapter_loaded(
    mut state: NavigationState,
    chapter: ChapterId,
    verse_count: usize,
) -> NavigationState {
    if state.page == Page::Chapter && state.selected_chapter == Some(chapter) {
        state.verse_count = verse_count;
        state.verse_index = 0;
    }
    state
}
