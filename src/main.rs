use sampleview::app::{App, AppMessage};
use sampleview::config::AppConfig;
use sampleview::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("sampleview {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = AppConfig::from_env();
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&config);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    result
}

/// File-backed logging, enabled only when SAMPLEVIEW_LOG is set.
///
/// The alternate screen owns stdout, so diagnostics go to a log file
/// instead of the terminal.
fn init_tracing() {
    if std::env::var("SAMPLEVIEW_LOG").is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create("sampleview.log") else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sampleview=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // One fetch per activation; page changes never refetch
    app.load_samples();

    loop {
        // Draw the UI only when state changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Handle keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                    app.quit();
                                }
                                KeyCode::Char('q') => app.quit(),
                                KeyCode::Left | KeyCode::Char('h') => app.go_prev(),
                                KeyCode::Right | KeyCode::Char('l') => app.go_next(),
                                KeyCode::Up => app.select_prev_row(),
                                KeyCode::Down => app.select_next_row(),
                                KeyCode::Char('v') => app.view_selected(),
                                KeyCode::Char('d') => app.delete_selected(),
                                KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                                    app.go_to_page(usize::from(c as u8 - b'0'));
                                }
                                _ => {}
                            }
                        }
                        _ => {
                            // Ignore other events (focus, mouse, etc.)
                        }
                    }
                }
            }

            // Handle async messages from the fetch task
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
