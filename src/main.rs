use blogdeck::app::{App, AppMessage};
use blogdeck::cli::{parse_args, run_cli_command, CliCommand};
use blogdeck::config::AppConfig;
use blogdeck::logging;
use blogdeck::terminal::{setup_panic_hook, TerminalManager};
use blogdeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("blogdeck: {}\nTry 'blogdeck --help'.", e);
            std::process::exit(2);
        }
    };

    // Handle CLI commands before any TUI initialization
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    let mut config = AppConfig::from_env();
    if let CliCommand::RunTui(options) = &command {
        if let Some(url) = &options.base_url {
            config = config.with_base_url(url.clone());
        }
    }

    logging::init_file_logging(&config)?;
    tracing::info!(version = blogdeck::cli::VERSION, "starting");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    // reqwest must be built inside the runtime context
    let mut app = runtime.block_on(async { App::from_config(&config) })?;

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    term_manager.restore()?;

    if let Err(e) = &result {
        tracing::error!("exited with error: {}", e);
    } else {
        tracing::info!("exited");
    }
    result
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

    loop {
        // Start whatever fetches the current state calls for
        app.sync_queries();

        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // 16ms tick drives the spinner and notice expiry
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            // Results from spawned request tasks
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
    }
}
