//! Backend main loop: polls UI actions and drives script playback.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use super::handlers::{self, Flow, ScriptTasks};
use crate::protocol::{PeerAction, PeerEvent};

/// How long the loop sleeps when no action is waiting
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run the peer backend on a tokio runtime until the UI shuts it down or
/// drops its sender.
pub fn run_backend(action_rx: Receiver<PeerAction>, event_tx: Sender<PeerEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(PeerEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    info!("peer backend started");

    rt.block_on(async move {
        let mut tasks = ScriptTasks::default();

        'outer: loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        if handlers::handle_action(action, &mut tasks, &event_tx) == Flow::Stop {
                            break 'outer;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        debug!("action channel closed");
                        tasks.abort_all();
                        break 'outer;
                    }
                }
            }

            tasks.prune_finished();
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    });

    info!("peer backend stopped");
}
