//! Liquid Chat - a messenger-style chat screen built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the grouping engine
//! - Backend thread: runs a Tokio runtime that plays the peer's scripted messages
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use liquid_chat::app::LiquidChatApp;
use liquid_chat::logging;

fn main() -> eframe::Result<()> {
    logging::init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Liquid Chat")
            .with_inner_size([560.0, 960.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Liquid Chat",
        options,
        Box::new(|cc| Ok(Box::new(LiquidChatApp::new(cc)))),
    )
}
