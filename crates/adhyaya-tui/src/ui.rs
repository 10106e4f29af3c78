use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use adhyaya_core::Page;

use crate::app::App;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.page() {
        Page::Cover => render_cover(app, frame, body_area),
        Page::Index => render_index(app, frame, body_area),
        Page::Chapter => render_chapter(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", app.config.title),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

/// Key hints for the footer. Verse moves appear only while enabled.
pub fn footer_hints(app: &App) -> Vec<(&'static str, String)> {
    let labels = &app.config.labels;
    let mut hints = match app.page() {
        Page::Cover => vec![("Enter", labels.proceed.clone())],
        Page::Index => vec![
            ("j/k", labels.move_cursor.clone()),
            ("Enter", labels.open_chapter.clone()),
            ("Esc", labels.back_to_cover.clone()),
        ],
        Page::Chapter => {
            let mut hints = Vec::new();
            if app.session.can_go_previous() {
                hints.push(("←", labels.previous.clone()));
            }
            if app.session.can_go_next() {
                hints.push(("→", labels.next.clone()));
            }
            hints.push(("Esc", labels.index.clone()));
            hints.push(("Home", labels.home.clone()));
            hints
        }
    };
    hints.push(("q", labels.quit.clone()));
    hints
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (key, label) in footer_hints(app) {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {}  ", label), label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cover(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cover_name = app
        .config
        .cover_image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cover_line = if app.cover_present {
        Line::styled(format!("🖼  {}", cover_name), Style::default().fg(Color::DarkGray))
    } else {
        Line::styled(
            format!("{} {}", cover_name, app.config.labels.cover_missing),
            Style::default().fg(Color::Red),
        )
    };

    let text = Text::from(vec![
        Line::styled(
            app.config.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        cover_line,
        Line::raw(""),
        Line::styled(
            format!("📖 {}", app.config.labels.proceed),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let height = text.height() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
}

fn render_index(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📚 {} ", app.config.labels.index_title));

    let items: Vec<ListItem> = app
        .chapters()
        .iter()
        .map(|&chapter| {
            ListItem::new(format!(
                "📖 {} {}",
                app.chapter_label(chapter),
                app.config.labels.open_chapter
            ))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.index_state);
}

fn render_chapter(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.session.state();
    let title = state
        .selected_chapter()
        .map(|c| app.chapter_label(c))
        .unwrap_or_default();
    let position = if state.verse_count() > 0 {
        format!(" {} / {} ", state.verse_index() + 1, state.verse_count())
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📖 {} ", title))
        .title_bottom(Line::from(position).right_aligned());

    let labels = &app.config.labels;
    let text = if let Some(reason) = app.session.unavailable() {
        Text::from(vec![
            Line::styled(labels.unavailable.clone(), Style::default().fg(Color::Red)),
            Line::styled(reason.to_string(), Style::default().fg(Color::DarkGray)),
        ])
    } else if let Some(verse) = app.session.current_verse() {
        let mut lines = vec![Line::styled(
            format!("🕉 {}:", labels.verse_heading),
            Style::default().fg(Color::Yellow).bold(),
        )];
        lines.extend(
            verse
                .text
                .lines()
                .map(|l| Line::styled(l.to_string(), Style::default().italic())),
        );
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("🔹 {}:", labels.meaning_heading),
            Style::default().fg(Color::Green).bold(),
        ));
        lines.extend(verse.meaning.lines().map(|l| Line::raw(l.to_string())));
        Text::from(lines)
    } else {
        Text::from(Line::styled(
            labels.empty_chapter.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhyaya_core::{Action, Config};
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;

    fn app(verses: usize) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let mut csv = String::from("Shloka,Meaning\n");
        for i in 1..=verses {
            csv.push_str(&format!("verse {i},meaning {i}\n"));
        }
        fs::write(dir.path().join("adhyaya_1.csv"), csv).unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        (dir, App::new(config))
    }

    fn keys(app: &App) -> Vec<&'static str> {
        footer_hints(app).into_iter().map(|(k, _)| k).collect()
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_hints_show_only_enabled_moves() {
        let (_dir, mut app) = app(2);
        app.dispatch(Action::Proceed);
        app.dispatch(Action::OpenChapter(1));
        assert_eq!(keys(&app), vec!["→", "Esc", "Home", "q"]);

        app.next_verse();
        assert_eq!(keys(&app), vec!["←", "Esc", "Home", "q"]);
    }

    #[test]
    fn test_empty_chapter_has_no_moves() {
        let (_dir, mut app) = app(0);
        app.dispatch(Action::Proceed);
        app.dispatch(Action::OpenChapter(3));
        assert_eq!(keys(&app), vec!["Esc", "Home", "q"]);
    }

    #[test]
    fn test_chapter_page_draws_verse_and_position() {
        let (_dir, mut app) = app(3);
        app.dispatch(Action::Proceed);
        app.dispatch(Action::OpenChapter(1));
        app.next_verse();

        let screen = screen(&mut app);
        assert!(screen.contains("verse 2"));
        assert!(screen.contains("meaning 2"));
        assert!(screen.contains("2 / 3"));
    }

    #[test]
    fn test_cover_reports_missing_image() {
        let (_dir, mut app) = app(0);
        app.config.labels.cover_missing = "missing".to_string();
        assert!(!app.cover_present);
        assert!(screen(&mut app).contains("cover.jpg missing"));
    }

    #[test]
    fn test_hint_labels_come_from_config() {
        let (_dir, mut app) = app(1);
        app.config.labels.move_cursor = "move".to_string();
        app.config.labels.quit = "exit".to_string();
        app.dispatch(Action::Proceed);

        let hints = footer_hints(&app);
        assert_eq!(hints[0], ("j/k", "move".to_string()));
        assert_eq!(hints.last(), Some(&("q", "exit".to_string())));
    }
}
