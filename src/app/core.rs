//! Core LiquidChatApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::engine::{ChatEngine, EngineConfig};
use crate::input_state::InputState;
use crate::protocol::{PeerAction, PeerEvent};
use crate::script::Script;
use crate::ui::theme::{apply_app_style, ChatTheme};
use crate::viewport::ViewportState;

pub struct LiquidChatApp {
    // Bubble records, grouping and bridge state
    pub engine: ChatEngine,

    // Channels for backend communication
    pub action_tx: Sender<PeerAction>,
    pub event_rx: Receiver<PeerEvent>,

    // Composer text and sent-message recall
    pub input: InputState,

    // Keyboard layout and effective viewport height
    pub viewport: ViewportState,

    pub settings: Settings,
    pub theme: ChatTheme,
    // Theme needs to be pushed into the egui style on the next frame
    pub(super) style_dirty: bool,
    // Write settings back on exit
    persist: bool,

    backend: Option<JoinHandle<()>>,
}

impl LiquidChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {e}");
            Settings::default()
        });

        let mut app = Self::with_settings(settings);
        apply_app_style(&cc.egui_ctx, &app.theme);
        app.persist = true;
        app.play(Script::seed());
        app
    }

    /// Build the app state and spawn the peer backend without touching egui.
    pub fn with_settings(settings: Settings) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<PeerAction>();
        let (event_tx, event_rx) = unbounded::<PeerEvent>();

        let backend = thread::Builder::new()
            .name("peer-backend".into())
            .spawn(move || run_backend(action_rx, event_tx))
            .map_err(|e| warn!("Failed to spawn peer backend: {e}"))
            .ok();

        Self {
            engine: ChatEngine::new(EngineConfig::from(&settings)),
            action_tx,
            event_rx,
            input: InputState::new(),
            viewport: ViewportState::new(),
            theme: ChatTheme::by_name(&settings.theme),
            settings,
            style_dirty: false,
            persist: false,
            backend,
        }
    }

    /// Ask the backend to play `script` for the current conversation.
    pub fn play(&self, script: Script) {
        let generation = self.engine.generation();
        info!(script = script.name, generation, "playing script");
        if self
            .action_tx
            .send(PeerAction::Play { generation, script })
            .is_err()
        {
            warn!("Peer backend is gone, script dropped");
        }
    }

    pub fn play_demo(&self) {
        self.play(Script::demo());
    }

    /// Clear the conversation and replay the opening exchange.
    pub fn reset(&mut self) {
        let _ = self.action_tx.send(PeerAction::CancelAll);
        let generation = self.engine.reset();
        info!(generation, "conversation reset");
        self.play(Script::seed());
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = if self.theme.is_dark() {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        self.theme = ChatTheme::by_name(&self.settings.theme);
        self.style_dirty = true;
    }
}

impl Drop for LiquidChatApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(PeerAction::Shutdown);
        if let Some(handle) = self.backend.take() {
            if handle.join().is_err() {
                warn!("Peer backend panicked");
            }
        }

        if !self.persist {
            return;
        }
        if let Err(e) = save_settings(&self.settings) {
            warn!("Failed to save settings: {e}");
        }
    }
}
