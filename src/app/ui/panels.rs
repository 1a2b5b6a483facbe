//! Device frame, header bar and message area

use eframe::egui::{self, CornerRadius, Rect, Stroke, UiBuilder};
use std::time::Instant;

use crate::app::LiquidChatApp;
use crate::ui::{self, HeaderAction, MessagesOutput};
use crate::viewport::{
    is_mobile, responsive_scale, scroll_fade_visible, BORDER_SIZE, DEVICE_HEIGHT, DEVICE_WIDTH,
};

const HEADER_HEIGHT: f32 = 56.0;
const COMPOSER_HEIGHT: f32 = 60.0;
const SCREEN_RADIUS: f32 = 44.0;

/// Where the chat screen goes inside the window, and at what scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct ScreenLayout {
    pub screen: Rect,
    pub scale: f32,
    /// Drawn inside a device frame (desktop) or edge to edge (mobile).
    pub framed: bool,
}

/// Place the chat screen in `window`.
///
/// Mobile windows use the whole width and the effective viewport height at
/// scale 1. Otherwise the device frame is scaled to the window height and
/// centered.
pub(in crate::app) fn screen_layout(window: Rect, viewport_height: Option<f32>) -> ScreenLayout {
    if is_mobile(window.width()) {
        let height = viewport_height.unwrap_or(window.height()).min(window.height());
        return ScreenLayout {
            screen: Rect::from_min_size(window.min, egui::vec2(window.width(), height)),
            scale: 1.0,
            framed: false,
        };
    }

    let scale = responsive_scale(window.height());
    let size = egui::vec2(DEVICE_WIDTH, DEVICE_HEIGHT) * scale;
    ScreenLayout {
        screen: Rect::from_center_size(window.center(), size),
        scale,
        framed: true,
    }
}

/// Split the screen into header, messages and composer. The header
/// collapses while the keyboard layout is active.
pub(in crate::app) fn split_screen(
    screen: Rect,
    scale: f32,
    keyboard_open: bool,
) -> (Rect, Rect, Rect) {
    let header_height = if keyboard_open {
        0.0
    } else {
        HEADER_HEIGHT * scale
    };
    let composer_height = COMPOSER_HEIGHT * scale;

    let header = Rect::from_min_max(
        screen.min,
        egui::pos2(screen.right(), screen.top() + header_height),
    );
    let composer = Rect::from_min_max(
        egui::pos2(screen.left(), screen.bottom() - composer_height),
        screen.max,
    );
    let messages = Rect::from_min_max(
        egui::pos2(screen.left(), header.bottom()),
        egui::pos2(screen.right(), composer.top()),
    );
    (header, messages, composer)
}

impl LiquidChatApp {
    /// Render the whole chat screen. Returns what the message list reported.
    pub(in crate::app) fn render_screen(
        &mut self,
        ctx: &egui::Context,
        now: Instant,
    ) -> MessagesOutput {
        let theme = self.theme.clone();
        let mut output = MessagesOutput::default();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.backdrop))
            .show(ctx, |panel| {
                let layout = screen_layout(panel.max_rect(), self.viewport.viewport_height());
                let scale = layout.scale;

                if layout.framed {
                    let border = BORDER_SIZE * scale;
                    let radius = (SCREEN_RADIUS * scale).round() as u8;
                    panel.painter().rect(
                        layout.screen.expand(border / 2.0),
                        CornerRadius::same(radius),
                        theme.surface[0],
                        Stroke::new(border, theme.frame_border),
                        egui::StrokeKind::Outside,
                    );
                } else {
                    panel.painter().rect_filled(layout.screen, 0.0, theme.surface[0]);
                }

                let (header, messages, composer) =
                    split_screen(layout.screen, scale, self.viewport.keyboard_open());

                if header.height() > 0.0 {
                    panel.painter().rect_filled(header, 0.0, theme.surface[1]);
                    panel.painter().hline(
                        header.x_range(),
                        header.bottom(),
                        Stroke::new(1.0, theme.border_subtle),
                    );
                    let inner = header.shrink2(egui::vec2(16.0, 8.0) * scale);
                    let action = panel
                        .scope_builder(UiBuilder::new().max_rect(inner), |ui| {
                            ui::render_header(ui, &self.settings.peer_name, &theme, scale)
                        })
                        .inner;
                    match action {
                        Some(HeaderAction::PlayDemo) => self.play_demo(),
                        Some(HeaderAction::Reset) => self.reset(),
                        Some(HeaderAction::ToggleTheme) => self.toggle_theme(),
                        None => {}
                    }
                }

                output = panel
                    .scope_builder(UiBuilder::new().max_rect(messages), |ui| {
                        ui.set_clip_rect(messages);
                        ui::render_messages(
                            ui,
                            self.engine.records(),
                            &theme,
                            scale,
                            now,
                            self.engine.config().entrance_duration,
                        )
                    })
                    .inner;
                if scroll_fade_visible(output.content_height, output.visible_height) {
                    ui::paint_scroll_fade(panel.painter(), messages, theme.surface[0], scale);
                }

                panel.painter().rect_filled(composer, 0.0, theme.surface[1]);
                let inner = composer.shrink2(egui::vec2(12.0, 10.0) * scale);
                panel.scope_builder(UiBuilder::new().max_rect(inner), |ui| {
                    self.render_composer(ui, scale, now);
                });
            });

        output
    }
}
