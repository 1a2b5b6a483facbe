//! Bubble geometry: corner shapes, spacing, and bridge placement.

use eframe::egui::{pos2, CornerRadius, Rect};

use crate::bubble::{BridgeDirection, BubbleRecord, Role, SenderKind};

/// Corner radius of a free-standing bubble.
pub(crate) const BUBBLE_RADIUS: f32 = 18.0;
/// Corner radius where two merged bubbles meet.
pub(crate) const JOINED_RADIUS: f32 = 4.0;
/// Horizontal / vertical text padding inside a bubble.
pub(crate) const PAD_X: f32 = 14.0;
pub(crate) const PAD_Y: f32 = 9.0;
/// Distance between a bubble and the screen edge.
pub(crate) const SIDE_MARGIN: f32 = 12.0;
/// Gap between the bubble and its timestamp.
pub(crate) const TIMESTAMP_GAP: f32 = 6.0;
/// Bubbles never grow wider than this share of the screen.
pub(crate) const MAX_WIDTH_RATIO: f32 = 0.7;

/// Vertical gap inside a merged group.
pub(crate) const GAP_MERGED: f32 = 2.0;
/// Gap between unmerged bubbles of the same sender.
pub(crate) const GAP_SAME_SENDER: f32 = 4.0;
/// Gap when the sender changes.
pub(crate) const GAP_NEW_SENDER: f32 = 12.0;

fn radius(points: f32, scale: f32) -> u8 {
    (points * scale).round().clamp(0.0, u8::MAX as f32) as u8
}

/// Corner shape for a bubble. Merged bubbles flatten the corners on the
/// sender's side where they touch their neighbors.
pub(crate) fn corner_radius(role: Role, sender: SenderKind, scale: f32) -> CornerRadius {
    let full = radius(BUBBLE_RADIUS, scale);
    let joined = radius(JOINED_RADIUS, scale);

    // (top, bottom) radius on the sender's side
    let (top, bottom) = match role {
        Role::None => (full, full),
        Role::First => (full, joined),
        Role::Middle => (joined, joined),
        Role::Last => (joined, full),
    };

    match sender {
        SenderKind::Received => CornerRadius {
            nw: top,
            ne: full,
            sw: bottom,
            se: full,
        },
        SenderKind::Sent => CornerRadius {
            nw: full,
            ne: top,
            sw: full,
            se: bottom,
        },
    }
}

/// Space above `current`, in unscaled points.
pub(crate) fn gap_before(prev: Option<&BubbleRecord>, current: &BubbleRecord) -> f32 {
    match prev {
        None => 0.0,
        Some(_) if matches!(current.role, Role::Middle | Role::Last) => GAP_MERGED,
        Some(prev) if prev.sender() == current.sender() => GAP_SAME_SENDER,
        Some(_) => GAP_NEW_SENDER,
    }
}

/// Area of the connector between a bubble and its neighbor.
///
/// Received bubbles are left-aligned, so the connector sits at the right
/// edge of the narrower bubble, spans the seam between the two, and reaches
/// `magnitude` towards the wider one's edge.
pub(crate) fn bridge_rect(
    own: Rect,
    neighbor: Rect,
    direction: BridgeDirection,
    magnitude: f32,
) -> Rect {
    let (upper, lower) = match direction {
        BridgeDirection::Down => (own, neighbor),
        BridgeDirection::Up => (neighbor, own),
    };

    let narrow_right = upper.right().min(lower.right());
    let wide_right = upper.right().max(lower.right());
    let overlap = magnitude * 0.4;

    Rect::from_min_max(
        pos2(narrow_right - JOINED_RADIUS.min(magnitude), upper.bottom() - overlap),
        pos2(
            (narrow_right + magnitude).min(wide_right),
            lower.top() + overlap,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::Message;
    use eframe::egui::vec2;
    use std::time::Instant;

    fn record(sender: SenderKind, role: Role) -> BubbleRecord {
        let mut rec = BubbleRecord::new(1, Message::new("x", sender), Instant::now());
        rec.role = role;
        rec
    }

    #[test]
    fn test_corner_radius_unmerged_is_round() {
        let r = corner_radius(Role::None, SenderKind::Received, 1.0);
        assert_eq!(r, CornerRadius::same(18));
    }

    #[test]
    fn test_corner_radius_flattens_sender_side() {
        let first = corner_radius(Role::First, SenderKind::Received, 1.0);
        assert_eq!((first.nw, first.sw, first.ne, first.se), (18, 4, 18, 18));

        let middle = corner_radius(Role::Middle, SenderKind::Sent, 1.0);
        assert_eq!((middle.ne, middle.se, middle.nw, middle.sw), (4, 4, 18, 18));

        let last = corner_radius(Role::Last, SenderKind::Sent, 1.0);
        assert_eq!((last.ne, last.se), (4, 18));
    }

    #[test]
    fn test_corner_radius_scales() {
        let r = corner_radius(Role::None, SenderKind::Sent, 0.5);
        assert_eq!(r, CornerRadius::same(9));
    }

    #[test]
    fn test_gap_before() {
        let sent = record(SenderKind::Sent, Role::None);
        let received = record(SenderKind::Received, Role::None);
        let middle = record(SenderKind::Received, Role::Middle);

        assert_eq!(gap_before(None, &sent), 0.0);
        assert_eq!(gap_before(Some(&sent), &sent), GAP_SAME_SENDER);
        assert_eq!(gap_before(Some(&sent), &received), GAP_NEW_SENDER);
        assert_eq!(gap_before(Some(&received), &middle), GAP_MERGED);
    }

    #[test]
    fn test_bridge_rect_spans_seam_at_narrow_edge() {
        let upper = Rect::from_min_size(pos2(0.0, 0.0), vec2(60.0, 30.0));
        let lower = Rect::from_min_size(pos2(0.0, 32.0), vec2(100.0, 30.0));

        let down = bridge_rect(upper, lower, BridgeDirection::Down, 20.0);
        assert!(down.top() < upper.bottom());
        assert!(down.bottom() > lower.top());
        assert!(down.left() < 60.0);
        assert_eq!(down.right(), 80.0);

        // the same pair seen from the lower bubble
        let up = bridge_rect(lower, upper, BridgeDirection::Up, 20.0);
        assert_eq!(up, down);
    }

    #[test]
    fn test_bridge_rect_never_passes_wide_edge() {
        let upper = Rect::from_min_size(pos2(0.0, 0.0), vec2(60.0, 30.0));
        let lower = Rect::from_min_size(pos2(0.0, 32.0), vec2(70.0, 30.0));
        let rect = bridge_rect(upper, lower, BridgeDirection::Down, 32.4);
        assert_eq!(rect.right(), 70.0);
    }
}
