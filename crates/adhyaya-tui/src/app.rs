use adhyaya_core::{Action, ChapterId, ChapterLoader, ChapterSource, Config, Page, Session};
use ratatui::widgets::ListState;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub loader: ChapterLoader,
    pub session: Session,
    /// Cursor over the index page's chapter list.
    pub index_state: ListState,
    pub cover_present: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let loader = ChapterLoader::new(ChapterSource::from_config(&config));
        let session = Session::new(config.chapters.clone());
        let cover_present = config.cover_path().exists();

        let mut index_state = ListState::default();
        if !config.chapters.is_empty() {
            index_state.select(Some(0));
        }

        Self {
            should_quit: false,
            config,
            loader,
            session,
            index_state,
            cover_present,
        }
    }

    pub fn page(&self) -> Page {
        self.session.state().page()
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {:?}", action);
        self.session.dispatch(&mut self.loader, action);
    }

    pub fn chapters(&self) -> &[ChapterId] {
        &self.config.chapters
    }

    pub fn chapter_label(&self, chapter: ChapterId) -> String {
        format!("{} {}", self.config.labels.chapter_prefix, chapter)
    }

    // Index navigation
    pub fn highlighted_chapter(&self) -> Option<ChapterId> {
        self.index_state
            .selected()
            .and_then(|i| self.chapters().get(i).copied())
    }

    pub fn index_down(&mut self) {
        let len = self.chapters().len();
        if len > 0 {
            let i = self.index_state.selected().unwrap_or(0);
            self.index_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn index_up(&mut self) {
        let i = self.index_state.selected().unwrap_or(0);
        self.index_state.select(Some(i.saturating_sub(1)));
    }

    pub fn open_highlighted(&mut self) {
        if let Some(chapter) = self.highlighted_chapter() {
            self.dispatch(Action::OpenChapter(chapter));
        }
    }

    /// Open a chapter by number, moving the index cursor onto it.
    pub fn open_chapter(&mut self, chapter: ChapterId) {
        if let Some(pos) = self.chapters().iter().position(|&c| c == chapter) {
            self.index_state.select(Some(pos));
            self.dispatch(Action::OpenChapter(chapter));
        }
    }

    // Verse navigation only fires when the control is enabled
    pub fn previous_verse(&mut self) {
        if self.session.can_go_previous() {
            self.dispatch(Action::PreviousVerse);
        }
    }

    pub fn next_verse(&mut self) {
        if self.session.can_go_next() {
            self.dispatch(Action::NextVerse);
        }
    }
}
