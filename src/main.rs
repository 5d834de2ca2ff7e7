use taskdeck::animation::ANIMATION_STEP;
use taskdeck::app::App;
use taskdeck::cli::{parse_args, run_cli_command, LaunchOptions};
use taskdeck::config::Preferences;
use taskdeck::error::ConfigError;
use taskdeck::logging;
use taskdeck::terminal::{setup_panic_hook, TerminalManager};
use taskdeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

fn main() -> Result<()> {
    // Print-and-exit flags run before anything touches the terminal
    let command = parse_args(std::env::args()).map_err(report_config_error)?;
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    color_eyre::install()?;
    // Dropping the guard flushes buffered log lines, so it lives until exit
    let _log_guard = logging::init(None);

    let prefs = load_preferences(&options).map_err(report_config_error)?;
    tracing::info!(
        max_tasks = prefs.max_tasks,
        default_priority = %prefs.default_priority,
        theme = %prefs.theme,
        "Starting"
    );

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;

    let mut term = TerminalManager::new()?;
    let mut app = App::new(prefs);
    let result = runtime.block_on(run_app(term.terminal(), &mut app));
    term.restore();

    if let Err(ref err) = result {
        tracing::error!("Exited with error: {}", err);
    } else {
        tracing::info!("Exited cleanly with {} tasks", app.manager.len());
    }
    result
}

/// Defaults, then the preferences file and environment, then CLI flags.
fn load_preferences(options: &LaunchOptions) -> std::result::Result<Preferences, ConfigError> {
    let prefs = options.apply(Preferences::load(options.config_path.as_deref())?);
    prefs.validate()?;
    Ok(prefs)
}

/// Log a start-up configuration failure and attach the recovery hint.
fn report_config_error(err: ConfigError) -> color_eyre::Report {
    let category = err.category();
    tracing::error!(code = err.error_code(), %category, "Start-up failed: {}", err);
    color_eyre::Report::new(err).wrap_err(category.recovery_hint())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(ANIMATION_STEP);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        tracing::debug!(width, height, "Terminal resized");
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!("Event stream error: {}", err);
                        return Err(err.into());
                    }
                    None => {
                        tracing::warn!("Event stream closed");
                        return Ok(());
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
