//! Text style definitions and global egui styling.

use eframe::egui::{Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::colors::ChatTheme;

/// Bubble text size at scale 1.
pub const BUBBLE_TEXT_SIZE: f32 = 16.0;
/// Timestamp size at scale 1.
pub const TIMESTAMP_SIZE: f32 = 11.0;
/// Header title size at scale 1.
pub const TITLE_SIZE: f32 = 15.0;

/// Text hierarchy
///
/// - **Small**: 10px - metadata
/// - **Body**: 14px - standard UI text
/// - **Button**: 13px - button labels
/// - **Heading**: 16px - section headers
///
/// Bubble text and timestamps scale with the device frame and use
/// [`bubble_font`] / [`timestamp_font`] instead.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
    ]
    .into()
}

/// Bubble font at the given interface scale
pub fn bubble_font(scale: f32) -> FontId {
    FontId::proportional(BUBBLE_TEXT_SIZE * scale)
}

/// Timestamp font at the given interface scale
pub fn timestamp_font(scale: f32) -> FontId {
    FontId::proportional(TIMESTAMP_SIZE * scale)
}

/// Apply the global style for `theme`
///
/// Sets visuals (dark/light), text styles, spacing, and flat rounded
/// buttons. Call on startup and whenever the theme changes.
pub fn apply_app_style(ctx: &eframe::egui::Context, theme: &ChatTheme) {
    ctx.set_visuals(if theme.is_dark() {
        eframe::egui::Visuals::dark()
    } else {
        eframe::egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = eframe::egui::vec2(8.0, 6.0);
    style.spacing.button_padding = eframe::egui::vec2(10.0, 5.0);

    // Flat round buttons
    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.bg_stroke = eframe::egui::Stroke::NONE;
        widget.corner_radius = eframe::egui::CornerRadius::same(16);
    }
    style.visuals.widgets.active.bg_fill = theme.accent;
    style.visuals.widgets.active.weak_bg_fill = theme.accent;

    style.visuals.extreme_bg_color = theme.surface[2];
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(
        theme.accent.r(),
        theme.accent.g(),
        theme.accent.b(),
        100,
    );

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_cover_builtin_styles() {
        let styles = configure_text_styles();
        assert_eq!(styles.len(), 5);
        assert_eq!(styles.get(&TextStyle::Body).map(|f| f.size), Some(14.0));
        assert!(styles.contains_key(&TextStyle::Monospace));
    }

    #[test]
    fn test_fonts_scale() {
        assert_eq!(bubble_font(0.5).size, BUBBLE_TEXT_SIZE * 0.5);
        assert_eq!(timestamp_font(1.0).size, TIMESTAMP_SIZE);
    }
}
