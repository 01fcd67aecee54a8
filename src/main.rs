//! curlman - compose HTTP requests in the terminal, run them through curl
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async subprocess execution

use std::fs;
use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use curlman::constants::{APP_VERSION, LOG_ENV_VAR, LOG_FILE_NAME};
use curlman::{ui, AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, RenderState};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        println!("{}", failure_message(&err));
        std::process::exit(1);
    }
}

/// Printed once the terminal is restored; includes the whole context chain
fn failure_message(err: &anyhow::Error) -> String {
    format!("Uh oh, there was an error: {:#}", err)
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let _log_guard = init_logging(&config)?;
    tracing::info!(version = APP_VERSION, curl = %config.curl_path, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (key_tx, key_rx) = mpsc::unbounded_channel::<KeyEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(config.curl_path.clone(), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(key_rx, net_resp_rx));

    let result = run_ui_loop(&mut terminal, key_tx, &mut render_rx).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "UI loop failed");
    }
    result
}

fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log dir {}", config.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(guard)
}

/// Draw, forward keys, and apply render snapshots until the app actor quits
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    key_tx: mpsc::UnboundedSender<KeyEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| ui::draw(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = key_tx.send(key);
            }
        }

        // Check for state updates (non-blocking)
        loop {
            match render_rx.try_recv() {
                Ok(state) => current_state = state,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_includes_context_chain() {
        let err = anyhow::anyhow!("unexpected end of stream").context("invalid config config.yaml");
        assert_eq!(
            failure_message(&err),
            "Uh oh, there was an error: invalid config config.yaml: unexpected end of stream"
        );
    }

    #[test]
    fn test_failure_message_for_io_error() {
        let err = anyhow::Error::from(io::Error::new(io::ErrorKind::Other, "not a terminal"));
        assert_eq!(failure_message(&err), "Uh oh, there was an error: not a terminal");
    }
}
