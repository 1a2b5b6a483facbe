//! UI rendering modules for the chat window.
//!
//! - `toolbar`: chat header with profile, reset and theme controls
//! - `messages`: bubble list rendering
//! - `theme`: color schemes and styling utilities

mod messages;
pub mod theme;
mod toolbar;

pub use messages::*;
pub use theme::*;
pub use toolbar::*;
