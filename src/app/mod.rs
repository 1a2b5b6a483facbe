//! Application module structure for LiquidChatApp
//!
//! - `core`: LiquidChatApp struct, initialization, reset and shutdown
//! - `events`: Event processing from the peer backend
//! - `update`: Main update loop and repaint scheduling
//! - `ui::panels`: Device frame, header bar and message area
//! - `ui::input`: Composer with send and history recall

pub mod core;
pub mod events;
pub mod ui;
pub mod update;

pub use core::LiquidChatApp;
