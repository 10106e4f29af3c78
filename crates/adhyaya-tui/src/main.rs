use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use adhyaya_core::{ChapterId, ChapterLoader, ChapterSource, Config};
use anyhow::{bail, Context, Result};
use clap::Parser;

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use app::App;
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "adhyaya", version)]
#[command(about = "Read shlokas and their meaning chapter by chapter")]
struct Cli {
    /// Use a specific configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the chapter files and cover image
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Chapters listed on the index page, e.g. `1,2,3,4`
    #[arg(long, value_delimiter = ',')]
    chapters: Option<Vec<ChapterId>>,

    /// Print one chapter to stdout instead of starting the reader
    #[arg(long, value_name = "CHAPTER", value_parser = clap::value_parser!(u32).range(1..))]
    dump: Option<ChapterId>,

    /// Log file location
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::initialize(&log_path, logging::level_for(cli.verbose));

    let config = load_config(&cli)?;

    if let Some(chapter) = cli.dump {
        let stdout = io::stdout();
        return dump_chapter(&config, chapter, &mut stdout.lock());
    }

    if !config.cover_path().exists() {
        log::warn!("cover image missing at {}", config.cover_path().display());
    }

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, App::new(config)).await;
    tui::restore()?;

    result
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(chapters) = &cli.chapters {
        config.chapters = chapters.clone();
    }
    config.validate()?;

    log::info!(
        "reading {} chapters from {}",
        config.chapters.len(),
        config.data_dir.display()
    );
    Ok(config)
}

async fn run(terminal: &mut tui::Tui, mut app: App) -> Result<()> {
    let mut events = EventHandler::new(Duration::from_millis(250));

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(&mut app, event)?,
            None => break,
        }
    }

    Ok(())
}

fn dump_chapter(config: &Config, chapter: ChapterId, out: &mut impl Write) -> Result<()> {
    if !config.chapters.contains(&chapter) {
        bail!("chapter {} is not in the index {:?}", chapter, config.chapters);
    }

    let mut loader = ChapterLoader::new(ChapterSource::from_config(config));
    let verses = loader
        .load(chapter)
        .with_context(|| format!("chapter {} unavailable", chapter))?;

    writeln!(out, "{} {}", config.labels.chapter_prefix, chapter)?;
    if verses.is_empty() {
        writeln!(out, "{}", config.labels.empty_chapter)?;
    }
    for (i, verse) in verses.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}.{}", chapter, i + 1)?;
        writeln!(out, "{}", verse.text)?;
        writeln!(out, "{}", verse.meaning)?;
    }
    Ok(())
}
