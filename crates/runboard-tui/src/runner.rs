//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use runboard_app::message::Message;
use runboard_app::process::{process_message, reconcile_poll_timer};
use runboard_app::signals;
use runboard_app::AppState;
use runboard_client::RunService;
use runboard_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard until the user quits.
///
/// The initial snapshot is fetched before the terminal is taken over, so the
/// first frame already shows data (or the fetch error). A failure that a
/// retry cannot fix is returned before the terminal is touched.
pub async fn run<S>(mut state: AppState, service: Arc<S>) -> Result<()>
where
    S: RunService + Sync + 'static,
{
    let snapshot = match service.list_runs().await {
        Ok(runs) => {
            info!("Initial snapshot: {} runs", runs.len());
            Ok((runs, Utc::now()))
        }
        Err(e) if e.is_recoverable() => {
            warn!("Initial fetch failed: {}", e);
            Err(e.to_string())
        }
        Err(e) => {
            error!("Initial fetch failed: {}", e);
            return Err(e);
        }
    };
    state.seed_runs(snapshot);

    let mut term = terminal::enter();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    reconcile_poll_timer(&mut state, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &service);

    // In-flight requests are left to finish on their own
    state.refresh.stop_timer();

    terminal::leave();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: &Arc<S>,
) -> Result<()>
where
    S: RunService + Sync + 'static,
{
    while !state.should_quit() {
        // Background results, poll ticks and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, service);
        }

        terminal.draw(|frame| render::view(frame, state, Utc::now()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, service);
        }
    }

    Ok(())
}
