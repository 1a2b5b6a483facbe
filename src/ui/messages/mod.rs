//! Liquid bubble rendering for the chat screen.
//! Features: merged group shapes, bridges, timestamps, entrance motion.

mod helpers;
mod render;

// Re-export public API
pub use render::{paint_scroll_fade, render_messages, MessagesOutput};
