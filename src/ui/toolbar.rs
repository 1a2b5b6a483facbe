//! Chat header: peer avatar and name, reset button, theme toggle.

use eframe::egui::{self, RichText};

use super::theme::{fonts::TITLE_SIZE, render_avatar, ChatTheme};

/// Actions that the header can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Profile area clicked: play the demo script
    PlayDemo,
    /// Refresh button: reset the conversation
    Reset,
    /// Switch between dark and light
    ToggleTheme,
}

/// Render the chat header bar.
/// Returns Some(HeaderAction) if an action was requested.
pub fn render_header(
    ui: &mut egui::Ui,
    peer_name: &str,
    theme: &ChatTheme,
    scale: f32,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0 * scale;

        let avatar = render_avatar(ui, peer_name, 32.0 * scale);
        let title = ui.add(
            egui::Label::new(
                RichText::new(peer_name)
                    .size(TITLE_SIZE * scale)
                    .strong()
                    .color(theme.text_primary),
            )
            .sense(egui::Sense::click()),
        );
        let profile = avatar.union(title);
        if profile.clicked() {
            action = Some(HeaderAction::PlayDemo);
        }
        profile
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("Play demo messages");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon_size = 16.0 * scale;

            let theme_icon = if theme.is_dark() { "☀" } else { "🌙" };
            if ui
                .button(RichText::new(theme_icon).size(icon_size).color(theme.accent))
                .on_hover_text("Toggle theme")
                .clicked()
            {
                action = Some(HeaderAction::ToggleTheme);
            }

            if ui
                .button(RichText::new("⟳").size(icon_size).color(theme.accent))
                .on_hover_text("Reset conversation")
                .clicked()
            {
                action = Some(HeaderAction::Reset);
            }
        });
    });

    action
}
