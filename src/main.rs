use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use titlepick::app::App;
use titlepick::cli::Cli;
use titlepick::config::Config;
use titlepick::lookup::TitleClient;

/// Fallback poll timeout when no debounced lookup is scheduled
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // TUI-safe logging: only active in debug builds, direct it to a file via
    // RUST_LOG=debug titlepick 2>lookup.log
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    // Validate the endpoint before touching the terminal
    let client = TitleClient::new(&config.endpoint, Duration::from_millis(config.timeout_ms))?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &config, client);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    // Print the confirmed app id where shells can pick it up
    if let Some(app_id) = result? {
        println!("{app_id}");
    }

    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    config: &Config,
    client: TitleClient,
) -> Result<Option<String>> {
    let mut app = App::new(config);
    app.lookup.start_worker(client);

    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Fold in worker responses and dispatch any debounced lookup
        app.lookup.drain_responses();
        app.lookup.dispatch_ready(Instant::now());

        // Wake early enough for the next scheduled dispatch
        let timeout = app
            .lookup
            .time_until_dispatch(Instant::now())
            .unwrap_or(TICK)
            .min(TICK);
        app.handle_events(timeout)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.output.take())
}
