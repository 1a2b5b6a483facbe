//! Peer action handling and scripted playback.

use crossbeam_channel::Sender;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::protocol::{PeerAction, PeerEvent};
use crate::script::Script;

/// Whether the main loop keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Script playback tasks that are still running
#[derive(Default)]
pub struct ScriptTasks {
    handles: Vec<JoinHandle<()>>,
}

impl ScriptTasks {
    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn prune_finished(&mut self) {
        self.handles.retain(|h| !h.is_finished());
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

/// Apply one UI action. Must be called from inside the tokio runtime.
pub fn handle_action(
    action: PeerAction,
    tasks: &mut ScriptTasks,
    event_tx: &Sender<PeerEvent>,
) -> Flow {
    match action {
        PeerAction::Play { generation, script } => {
            debug!(generation, script = script.name, lines = script.len(), "playing script");
            let tx = event_tx.clone();
            tasks
                .handles
                .push(tokio::spawn(play_script(generation, script, tx)));
            Flow::Continue
        }
        PeerAction::CancelAll => {
            debug!(running = tasks.len(), "cancelling scripts");
            tasks.abort_all();
            Flow::Continue
        }
        PeerAction::Shutdown => {
            tasks.abort_all();
            Flow::Stop
        }
    }
}

/// Deliver every line of `script` at its offset from the start.
async fn play_script(generation: u64, script: Script, event_tx: Sender<PeerEvent>) {
    let start = Instant::now();
    let name = script.name;

    for line in script.lines {
        tokio::time::sleep_until(start + line.delay).await;
        let event = PeerEvent::MessageArrived {
            generation,
            text: line.text,
        };
        // The UI went away; nothing left to deliver to
        if event_tx.send(event).is_err() {
            return;
        }
    }

    let _ = event_tx.send(PeerEvent::ScriptFinished { generation, name });
}
