//! Composer with send button, Enter to send, and history recall

use eframe::egui::{self, CornerRadius, RichText};
use std::time::Instant;

use crate::app::LiquidChatApp;

impl LiquidChatApp {
    /// Render the composer row inside the bottom bar.
    pub(in crate::app) fn render_composer(&mut self, ui: &mut egui::Ui, scale: f32, now: Instant) {
        let theme = self.theme.clone();
        let mut send = false;
        let mut refocus = false;

        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0 * scale;
            let button_width = 64.0 * scale;

            let field = egui::Frame::new()
                .fill(theme.surface[2])
                .corner_radius(CornerRadius::same((18.0 * scale).round() as u8))
                .inner_margin(egui::Margin::symmetric(
                    (12.0 * scale).round() as i8,
                    (8.0 * scale).round() as i8,
                ));

            field.show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input.message_input)
                        .font(egui::FontId::proportional(15.0 * scale))
                        .text_color(theme.text_primary)
                        .desired_width(ui.available_width() - button_width - 24.0 * scale)
                        .frame(false)
                        .hint_text("Message"),
                );

                // Singleline edits drop focus on Enter
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send = true;
                    refocus = true;
                }

                if response.has_focus() {
                    if ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                        self.input.recall_older();
                    }
                    if ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                        self.input.recall_newer();
                    }
                }

                if refocus {
                    response.request_focus();
                }
                match self.input.update_focus(response.has_focus() || refocus) {
                    Some(true) => self.viewport.input_focus_gained(),
                    Some(false) => self.viewport.input_focus_lost(now),
                    None => {}
                }
            });

            let button = egui::Button::new(
                RichText::new("Send")
                    .size(14.0 * scale)
                    .strong()
                    .color(theme.text_on_sent),
            )
            .fill(theme.accent)
            .min_size(egui::vec2(button_width, 32.0 * scale));
            if ui.add(button).clicked() {
                send = true;
            }
        });

        if send {
            if let Some(text) = self.input.take_message() {
                self.engine.send(&text, now);
            }
        }
    }
}
