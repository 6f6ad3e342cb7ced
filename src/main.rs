use termfolio::adapters::{FileCredentialsProvider, ReqwestHttpClient, SystemClock};
use termfolio::api::{PortfolioApi, PortfolioService};
use termfolio::app::App;
use termfolio::cache::RequestCache;
use termfolio::cli::{parse_args, run_cli_command, CliCommand};
use termfolio::startup::{init_logging, restore_credentials, AppConfig};
use termfolio::terminal::{setup_panic_hook, TerminalManager};
use termfolio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let api_url = match parse_args(std::env::args()) {
        CliCommand::RunTui { api_url } => api_url,
        other => std::process::exit(run_cli_command(&other)),
    };

    color_eyre::install()?;
    setup_panic_hook();

    let mut config = AppConfig::from_env();
    if let Some(url) = api_url {
        config = config.with_api_base_url(url);
    }
    if let Err(e) = init_logging(&config) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::info!(api = %config.api_base_url, "starting termfolio");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let http = ReqwestHttpClient::new(config.request_timeout)?;
    let api = PortfolioApi::new(Arc::new(http), &config.api_base_url);
    let cache = RequestCache::with_ttl(Arc::new(SystemClock), config.cache_ttl);
    let service = Arc::new(PortfolioService::new(api, Arc::new(cache)));
    let credentials = Arc::new(FileCredentialsProvider::new(&config.data_dir));

    let saved = restore_credentials(credentials.as_ref(), chrono::Utc::now().timestamp()).await;

    let mut app = App::new(config, service, credentials);
    if let Some(creds) = saved {
        app.restore_session(creds);
    }

    let mut manager = TerminalManager::new()?;
    app.start();
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let Some(mut message_rx) = app.message_rx.take() else {
        return Ok(());
    };
    // Periodic redraw while idle.
    let mut tick = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(message) = message_rx.recv() => app.handle_message(message),
            _ = tick.tick() => {}
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("exiting");
    Ok(())
}
