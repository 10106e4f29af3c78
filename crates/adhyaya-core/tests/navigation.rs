mod common;

use adhyaya_core::{update, Action, NavigationState, Page, Session};
use common::library;

fn open(session: &mut Session, loader: &mut adhyaya_core::ChapterLoader, chapter: u32) {
    session.dispatch(loader, Action::Proceed);
    session.dispatch(loader, Action::OpenChapter(chapter));
}

#[test]
fn next_six_times_stops_at_last_verse() {
    let (_dir, mut loader) = library(&[(1, 3), (2, 5)]);
    let mut session = Session::new(vec![1, 2, 3, 4]);

    assert_eq!(session.state().page(), Page::Cover);
    session.dispatch(&mut loader, Action::Proceed);
    assert_eq!(session.state().page(), Page::Index);
    session.dispatch(&mut loader, Action::OpenChapter(2));
    for _ in 0..6 {
        session.dispatch(&mut loader, Action::NextVerse);
    }

    assert_eq!(session.state().verse_index(), 4);
    assert_eq!(session.current_verse().unwrap().text, "श्लोक 2.5");
}

#[test]
fn verse_index_stays_in_bounds_for_any_walk() {
    let (_dir, mut loader) = library(&[(1, 4)]);
    let mut session = Session::new(vec![1]);
    open(&mut session, &mut loader, 1);

    // Deterministic pseudo-random walk of previous/next presses.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let action = if seed % 2 == 0 {
            Action::NextVerse
        } else {
            Action::PreviousVerse
        };
        session.dispatch(&mut loader, action);
        assert!(session.state().verse_index() < 4);
        assert!(session.current_verse().is_some());
    }
}

#[test]
fn boundary_moves_leave_state_unchanged() {
    let (_dir, mut loader) = library(&[(1, 2)]);
    let mut session = Session::new(vec![1]);
    open(&mut session, &mut loader, 1);

    let before = session.state().clone();
    session.dispatch(&mut loader, Action::PreviousVerse);
    assert_eq!(session.state(), &before);

    session.dispatch(&mut loader, Action::NextVerse);
    let at_end = session.state().clone();
    session.dispatch(&mut loader, Action::NextVerse);
    assert_eq!(session.state(), &at_end);
    assert_eq!(at_end.verse_index(), 1);
}

#[test]
fn opening_a_chapter_always_starts_at_first_verse() {
    let (_dir, mut loader) = library(&[(1, 5), (2, 5)]);
    let mut session = Session::new(vec![1, 2]);
    open(&mut session, &mut loader, 1);
    session.dispatch(&mut loader, Action::NextVerse);
    session.dispatch(&mut loader, Action::NextVerse);
    assert_eq!(session.state().verse_index(), 2);

    session.dispatch(&mut loader, Action::BackToIndex);
    session.dispatch(&mut loader, Action::OpenChapter(2));
    assert_eq!(session.state().page(), Page::Chapter);
    assert_eq!(session.state().selected_chapter(), Some(2));
    assert_eq!(session.state().verse_index(), 0);

    // Reopening the same chapter resets too.
    session.dispatch(&mut loader, Action::NextVerse);
    session.dispatch(&mut loader, Action::BackToIndex);
    session.dispatch(&mut loader, Action::OpenChapter(2));
    assert_eq!(session.state().verse_index(), 0);
}

#[test]
fn empty_chapter_disables_both_moves() {
    let (_dir, mut loader) = library(&[]);
    let mut session = Session::new(vec![1]);
    open(&mut session, &mut loader, 1);

    assert!(!session.can_go_previous());
    assert!(!session.can_go_next());
    session.dispatch(&mut loader, Action::NextVerse);
    assert!(session.current_verse().is_none());
}

#[test]
fn chapter_data_is_loaded_once_per_loader() {
    let (_dir, mut loader) = library(&[(1, 2)]);
    let mut session = Session::new(vec![1]);
    assert!(!loader.is_cached(1));
    open(&mut session, &mut loader, 1);
    assert!(loader.is_cached(1));

    let mut other = Session::new(vec![1]);
    open(&mut other, &mut loader, 1);
    other.dispatch(&mut loader, Action::NextVerse);

    // Sessions share the cache but not their position.
    assert_eq!(other.state().verse_index(), 1);
    assert_eq!(session.state().verse_index(), 0);
}

#[test]
fn pure_update_walks_full_page_cycle() {
    let state = NavigationState::new(vec![1, 2, 3, 4]);
    let (state, _) = update(state, Action::Proceed);
    let (state, _) = update(state, Action::Back);
    assert_eq!(state.page(), Page::Cover);

    let (state, _) = update(state, Action::Proceed);
    let (state, _) = update(state, Action::OpenChapter(3));
    let (state, _) = update(state, Action::Home);
    assert_eq!(state.page(), Page::Cover);
    assert_eq!(state.selected_chapter(), Some(3));
}
