//! Color themes for the chat window.
//!
//! # Overview
//!
//! The window shows a phone-like device frame on a backdrop. Colors are
//! grouped by where they appear:
//!
//! - `backdrop`: window background around the device frame
//! - `surface[0..3]`: device screen, header/composer bars, composer field
//! - `bubble_sent` / `bubble_received`: bubble fills (bridges use the
//!   received fill so they read as part of the bubble)
//! - `text_*`: bubble text, header text, timestamps
//!
//! Dark is the primary design; light mirrors it.

use eframe::egui::Color32;

#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    pub backdrop: Color32,
    pub frame_border: Color32,
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub bubble_sent: Color32,
    pub bubble_received: Color32,
    pub text_on_sent: Color32,
    pub text_on_received: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
}

impl ChatTheme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            backdrop: Color32::from_rgb(10, 10, 15),
            frame_border: Color32::from_rgb(46, 46, 62),
            surface: [
                Color32::from_rgb(0, 0, 0),    // surface_0: screen
                Color32::from_rgb(19, 19, 26), // surface_1: header and composer bars
                Color32::from_rgb(37, 37, 50), // surface_2: composer field
            ],
            accent: Color32::from_rgb(10, 132, 255),
            bubble_sent: Color32::from_rgb(10, 132, 255),
            bubble_received: Color32::from_rgb(38, 38, 41),
            text_on_sent: Color32::WHITE,
            text_on_received: Color32::from_rgb(235, 235, 240),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(114, 118, 125),
            border_subtle: Color32::from_rgb(32, 34, 37),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            backdrop: Color32::from_rgb(227, 229, 232),
            frame_border: Color32::from_rgb(24, 24, 28),
            surface: [
                Color32::from_rgb(255, 255, 255), // surface_0: screen
                Color32::from_rgb(246, 246, 247), // surface_1: header and composer bars
                Color32::from_rgb(233, 233, 235), // surface_2: composer field
            ],
            accent: Color32::from_rgb(0, 122, 255),
            bubble_sent: Color32::from_rgb(0, 122, 255),
            bubble_received: Color32::from_rgb(233, 233, 235),
            text_on_sent: Color32::WHITE,
            text_on_received: Color32::from_rgb(6, 6, 7),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_muted: Color32::from_rgb(116, 127, 141),
            border_subtle: Color32::from_rgb(230, 232, 236),
        }
    }

    /// Theme by settings name; anything but "light" is dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "Dark"
    }
}

/// Apply an opacity factor (0..=1) to a color.
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}
