use cluck::app::App;
use cluck::cli::{parse_args, run_cli_command, CliCommand, VERSION};
use cluck::config::AppConfig;
use cluck::error::CluckError;
use cluck::logging;
use cluck::terminal::{setup_panic_hook, TerminalManager};
use cluck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let cli_tab = match command {
        CliCommand::RunTui { tab } => tab,
        _ => None,
    };

    let config = AppConfig::from_env_with_tab(cli_tab)
        .map_err(|e| CluckError::from(e).into_report())?;

    let log_path = logging::init(&config);
    info!(
        version = VERSION,
        tab = config.initial_tab.label(),
        log = ?log_path,
        "starting"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let mut app = App::new(&config).map_err(CluckError::into_report)?;
    let mut manager = TerminalManager::new(config.mouse)?;
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app, config.tick_rate()).await;
    manager.restore();

    info!(dispatches = app.store().dispatch_count(), "exiting");
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let mut snapshots = app.subscribe();
    let mut ticker = tokio::time::interval(tick_rate.max(Duration::from_millis(1)));

    loop {
        if app.should_quit {
            return Ok(());
        }

        // Draw only when something visible changed.
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app.state(), &app.view))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {}

            changed = snapshots.changed() => {
                if changed.is_ok() {
                    let tab = snapshots.borrow_and_update().selected_tab;
                    debug!(tab = tab.label(), "snapshot published");
                    app.mark_dirty();
                }
            }

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Mouse(mouse))) => {
                    app.handle_mouse(mouse);
                }
                Some(Ok(Event::Resize(width, height))) => {
                    app.update_terminal_dimensions(width, height);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                // Input closed.
                None => return Ok(()),
            },
        }
    }
}
