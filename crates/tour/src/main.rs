//! guided-tour - step-by-step guided tour over a terminal page.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize logging, load the tour and set up the terminal.
//! - Run the event loop.
//!
//! Does NOT handle:
//! - Tour semantics (see `guided_tour::controller`).
//! - Tour file parsing (see `tour_config`).
//!
//! Invariants:
//! - The terminal enters raw mode and the alternate screen on startup and is restored by `TerminalGuard`.
//! - Configuration precedence: CLI args > env vars > tour file > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Events are handled one at a time; each handler runs to completion before the next.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use guided_tour::action::Action;
use guided_tour::app::App;
use guided_tour::cli::Cli;
use guided_tour::controller::Tour;
use guided_tour::demo::{sample_page, sample_tour};
use guided_tour::runtime::terminal::TerminalGuard;
use guided_tour::step::resolve_steps;
use tour_config::{Theme, TourFile, TourLoader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "guided-tour.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let tour_file = load_tour(&cli)?;
    tracing::info!(
        steps = tour_file.steps.len(),
        theme = %tour_file.settings.theme,
        "Tour loaded"
    );

    let mouse = !cli.no_mouse;
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let _terminal_guard = TerminalGuard::new(mouse);

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let size = terminal.size()?;

    let page = sample_page(size.width, size.height);
    let steps = resolve_steps(&tour_file.steps, &page);
    let theme = Theme::from_color_theme(tour_file.settings.theme);
    let mut app = App::new(page, Tour::new(steps, tour_file.settings), theme);
    app.update(Action::StartTour);

    let mut reader = EventStream::new();
    loop {
        terminal.draw(|f| app.render(f))?;

        let Some(event) = reader.next().await else {
            break;
        };
        let action = match event.context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_input(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => app.handle_resize(width, height),
            _ => None,
        };

        match action {
            Some(Action::Quit) => break,
            Some(action) => {
                tracing::debug!(?action, "Handling action");
                app.update(action);
            }
            None => {}
        }
    }

    terminal.show_cursor()?;
    tracing::info!("Exiting");
    Ok(())
}

/// Merge the tour file (or the sample tour), `TOUR_*` variables and CLI flags.
fn load_tour(cli: &Cli) -> Result<TourFile> {
    let mut loader = TourLoader::new().with_steps(sample_tour());
    if let Some(path) = &cli.tour {
        loader = loader.with_path(path);
    }
    if let Some(padding) = cli.padding {
        loader = loader.with_highlight_padding(padding);
    }
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    let tour = loader
        .from_file()
        .context("Failed to read tour file")?
        .from_env()
        .context("Invalid TOUR_* environment variable")?
        .build()
        .context("Invalid tour configuration")?;
    Ok(tour)
}
