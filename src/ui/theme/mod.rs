//! Color themes and styling utilities for the chat window.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::{faded, ChatTheme};
pub use fonts::{apply_app_style, bubble_font, configure_text_styles, timestamp_font};
pub use widgets::{avatar_color, avatar_initial, render_avatar};
