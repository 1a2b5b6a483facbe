//! Event processing from the peer backend

use std::time::Instant;
use tracing::{debug, warn};

use super::LiquidChatApp;
use crate::protocol::PeerEvent;

impl LiquidChatApp {
    /// Drain pending backend events. Returns the number of bubbles added.
    pub fn process_events(&mut self, now: Instant) -> usize {
        let mut added = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                PeerEvent::MessageArrived { generation, text } => {
                    if self.engine.receive(generation, &text, now).is_some() {
                        added += 1;
                    }
                }
                PeerEvent::ScriptFinished { generation, name } => {
                    debug!(script = name, generation, "script finished");
                }
                PeerEvent::Error(message) => {
                    warn!("Peer backend error: {message}");
                }
            }
        }
        added
    }
}
