//! Main update loop and repaint scheduling

use eframe::egui;
use std::time::{Duration, Instant};
use tracing::debug;

use super::LiquidChatApp;
use crate::ui::theme::apply_app_style;
use crate::viewport::ViewportMetrics;

/// Longest the UI sleeps before polling the backend again.
const MAX_IDLE: Duration = Duration::from_millis(100);

/// Delay until the next repaint: the earliest pending deadline, capped at
/// `MAX_IDLE`. Overdue deadlines repaint right away.
pub(super) fn repaint_delay(now: Instant, deadlines: &[Option<Instant>]) -> Duration {
    deadlines
        .iter()
        .flatten()
        .map(|due| due.saturating_duration_since(now))
        .min()
        .map_or(MAX_IDLE, |wait| wait.min(MAX_IDLE))
}

impl eframe::App for LiquidChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.style_dirty {
            apply_app_style(ctx, &self.theme);
            self.style_dirty = false;
        }

        // Peer messages first so this frame's tick sees them
        self.process_events(now);

        // Global shortcuts
        let (reset, toggle_theme) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F5),
                i.modifiers.command && i.key_pressed(egui::Key::T),
            )
        });
        if reset {
            self.reset();
        }
        if toggle_theme {
            self.toggle_theme();
        }

        // Native windows report no visual viewport; a resize only moves the height
        let screen = ctx.screen_rect();
        self.viewport.on_metrics(ViewportMetrics {
            window_width: screen.width(),
            window_height: screen.height(),
            visual_height: None,
        });
        self.viewport.tick(now);

        for event in self.engine.tick(now) {
            debug!(?event, "engine");
        }

        let output = self.render_screen(ctx, now);
        for (id, width) in output.widths {
            self.engine.set_width(id, width);
        }

        if output.animating {
            ctx.request_repaint();
        } else {
            let delay = repaint_delay(
                now,
                &[self.engine.next_deadline(), self.viewport.next_deadline()],
            );
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_repaint_delay_idles_without_deadlines() {
        let now = Instant::now();
        assert_eq!(repaint_delay(now, &[None, None]), MAX_IDLE);
    }

    #[test]
    fn test_repaint_delay_picks_earliest_deadline() {
        let now = Instant::now();
        let delay = repaint_delay(now, &[Some(now + 60 * MS), Some(now + 20 * MS)]);
        assert_eq!(delay, 20 * MS);
    }

    #[test]
    fn test_repaint_delay_caps_long_waits() {
        let now = Instant::now();
        assert_eq!(repaint_delay(now, &[Some(now + 1000 * MS)]), MAX_IDLE);
    }

    #[test]
    fn test_repaint_delay_overdue_is_immediate() {
        let now = Instant::now();
        let past = now.checked_sub(5 * MS).unwrap_or(now);
        assert_eq!(repaint_delay(now, &[Some(past)]), Duration::ZERO);
    }
}
