//! Bubble list rendering: merged shapes, timestamps, bridges, entrance motion.

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, Galley, Rect};

use crate::animation::entrance_at;
use crate::bubble::{BridgeDirection, BubbleId, BubbleRecord, SenderKind};
use crate::ui::theme::{bubble_font, faded, timestamp_font, ChatTheme};

use super::helpers::{
    bridge_rect, corner_radius, gap_before, MAX_WIDTH_RATIO, PAD_X, PAD_Y, SIDE_MARGIN,
    TIMESTAMP_GAP,
};

/// Fade-in time of a revealed bridge, in seconds.
const BRIDGE_FADE_SECS: f32 = 0.25;
/// Height of the fade shown over the top of scrolled content.
const SCROLL_FADE_HEIGHT: f32 = 32.0;

/// What the renderer learned while drawing.
#[derive(Debug, Default)]
pub struct MessagesOutput {
    /// Rendered bubble widths in unscaled points, timestamp excluded.
    pub widths: Vec<(BubbleId, f32)>,
    pub content_height: f32,
    pub visible_height: f32,
    /// Some bubble is still playing its entrance animation.
    pub animating: bool,
}

/// Render the bubble list inside a vertical scroll area stuck to the bottom.
pub fn render_messages(
    ui: &mut egui::Ui,
    records: &[BubbleRecord],
    theme: &ChatTheme,
    scale: f32,
    now: Instant,
    entrance: Duration,
) -> MessagesOutput {
    let mut output = MessagesOutput::default();

    let scroll = egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            ui.add_space(12.0 * scale);
            let rects = render_bubbles(ui, records, theme, scale, now, entrance, &mut output);
            render_bridges(ui, records, &rects, theme, scale);
            ui.add_space(12.0 * scale);
        });

    output.content_height = scroll.content_size.y;
    output.visible_height = scroll.inner_rect.height();
    output
}

/// Lay out and paint every bubble. Returns the settled bubble rects, one per
/// record, for bridge placement.
fn render_bubbles(
    ui: &mut egui::Ui,
    records: &[BubbleRecord],
    theme: &ChatTheme,
    scale: f32,
    now: Instant,
    entrance: Duration,
    output: &mut MessagesOutput,
) -> Vec<Rect> {
    let max_text_width = ui.available_width() * MAX_WIDTH_RATIO - 2.0 * PAD_X * scale;
    let mut rects = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        let prev = idx.checked_sub(1).map(|i| &records[i]);
        ui.add_space(gap_before(prev, record) * scale);

        let (fill, text_color) = match record.sender() {
            SenderKind::Sent => (theme.bubble_sent, theme.text_on_sent),
            SenderKind::Received => (theme.bubble_received, theme.text_on_received),
        };

        let galley = ui.fonts(|f| {
            f.layout(
                record.text().to_string(),
                bubble_font(scale),
                text_color,
                max_text_width.max(1.0),
            )
        });
        let bubble_size = galley.size() + egui::vec2(2.0 * PAD_X, 2.0 * PAD_Y) * scale;
        output.widths.push((record.id, bubble_size.x / scale));

        let (row, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), bubble_size.y),
            egui::Sense::hover(),
        );
        let bubble_rect = match record.sender() {
            SenderKind::Received => Rect::from_min_size(
                egui::pos2(row.left() + SIDE_MARGIN * scale, row.top()),
                bubble_size,
            ),
            SenderKind::Sent => Rect::from_min_size(
                egui::pos2(row.right() - SIDE_MARGIN * scale - bubble_size.x, row.top()),
                bubble_size,
            ),
        };
        rects.push(bubble_rect);

        let motion = entrance_at(record.appeared_at, now, entrance);
        if !motion.is_settled() {
            output.animating = true;
        }
        let painted = Rect::from_center_size(
            bubble_rect.center() + egui::vec2(0.0, motion.offset_y * scale),
            bubble_rect.size() * motion.scale,
        );

        let painter = ui.painter();
        painter.rect_filled(
            painted,
            corner_radius(record.role, record.sender(), scale * motion.scale),
            faded(fill, motion.opacity),
        );
        paint_text(painter, painted, galley, faded(text_color, motion.opacity));

        if let Some(label) = &record.timestamp {
            paint_timestamp(ui, label, record.sender(), bubble_rect, theme, scale, motion.opacity);
        }
    }

    rects
}

fn paint_text(painter: &egui::Painter, bubble: Rect, galley: Arc<Galley>, color: Color32) {
    let pos = bubble.center() - galley.size() / 2.0;
    painter.galley_with_override_text_color(pos, galley, color);
}

/// Received timestamps sit right of the bubble, sent ones left of it, both
/// aligned with the bubble bottom.
fn paint_timestamp(
    ui: &egui::Ui,
    label: &str,
    sender: SenderKind,
    bubble: Rect,
    theme: &ChatTheme,
    scale: f32,
    opacity: f32,
) {
    let galley = ui.fonts(|f| {
        f.layout_no_wrap(label.to_string(), timestamp_font(scale), theme.text_muted)
    });
    let size = galley.size();
    let gap = TIMESTAMP_GAP * scale;
    let x = match sender {
        SenderKind::Received => bubble.right() + gap,
        SenderKind::Sent => bubble.left() - gap - size.x,
    };
    let pos = egui::pos2(x, bubble.bottom() - size.y);
    ui.painter()
        .galley_with_override_text_color(pos, galley, faded(theme.text_muted, opacity));
}

/// Paint the connectors of bridged bubbles. Hidden bridges fade in once the
/// engine marks them visible.
fn render_bridges(
    ui: &egui::Ui,
    records: &[BubbleRecord],
    rects: &[Rect],
    theme: &ChatTheme,
    scale: f32,
) {
    for (idx, record) in records.iter().enumerate() {
        let Some(bridge) = record.bridge else {
            continue;
        };
        let neighbor = match bridge.direction {
            BridgeDirection::Down => idx + 1,
            BridgeDirection::Up => match idx.checked_sub(1) {
                Some(i) => i,
                None => continue,
            },
        };
        let (Some(own), Some(other)) = (rects.get(idx), rects.get(neighbor)) else {
            continue;
        };

        let alpha = ui.ctx().animate_bool_with_time(
            egui::Id::new(("bridge", record.id, neighbor)),
            bridge.visible,
            BRIDGE_FADE_SECS,
        );
        if alpha <= 0.0 {
            continue;
        }

        let rect = bridge_rect(*own, *other, bridge.direction, bridge.magnitude * scale);
        ui.painter().rect_filled(
            rect,
            egui::CornerRadius::same((2.0 * scale).round() as u8),
            faded(theme.bubble_received, alpha),
        );
    }
}

/// Fade over the top edge of the message area, shown while content overflows.
pub fn paint_scroll_fade(painter: &egui::Painter, area: Rect, color: Color32, scale: f32) {
    const STEPS: usize = 8;
    let height = SCROLL_FADE_HEIGHT * scale;
    let step = height / STEPS as f32;
    for i in 0..STEPS {
        let top = area.top() + i as f32 * step;
        let band = Rect::from_min_max(
            egui::pos2(area.left(), top),
            egui::pos2(area.right(), top + step),
        );
        let opacity = 1.0 - (i as f32 + 0.5) / STEPS as f32;
        painter.rect_filled(band, 0.0, faded(color, opacity));
    }
}
