use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use adhyaya_core::{Action, Page};

use crate::app::App;
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) | AppEvent::Tick => {}
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work on any page
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    match app.page() {
        Page::Cover => handle_cover(app, key),
        Page::Index => handle_index(app, key),
        Page::Chapter => handle_chapter(app, key),
    }
}

fn handle_cover(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
            app.dispatch(Action::Proceed)
        }
        _ => {}
    }
}

fn handle_index(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.index_down(),
        KeyCode::Char('k') | KeyCode::Up => app.index_up(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.open_highlighted(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(chapter) = c.to_digit(10) {
                app.open_chapter(chapter);
            }
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.dispatch(Action::Back)
        }
        _ => {}
    }
}

fn handle_chapter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.previous_verse(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') => app.next_verse(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('i') => {
            app.dispatch(Action::BackToIndex)
        }
        KeyCode::Home | KeyCode::Char('c') => app.dispatch(Action::Home),
        _ => {}
    }
}
