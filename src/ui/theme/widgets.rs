//! Avatar rendering for the chat header.

use eframe::egui::{self, Color32};

const AVATAR_COLORS: [Color32; 8] = [
    Color32::from_rgb(0xFF, 0x66, 0x66),
    Color32::from_rgb(0x66, 0xCC, 0xFF),
    Color32::from_rgb(0xFF, 0xCC, 0x66),
    Color32::from_rgb(0x99, 0xCC, 0x99),
    Color32::from_rgb(0xCC, 0x99, 0xFF),
    Color32::from_rgb(0xFF, 0x99, 0xCC),
    Color32::from_rgb(0x66, 0x99, 0xFF),
    Color32::from_rgb(0xFF, 0x99, 0x66),
];

fn fnv1a(name: &str) -> u64 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in name.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    hash
}

/// Stable background color for a name.
pub fn avatar_color(name: &str) -> Color32 {
    AVATAR_COLORS[(fnv1a(name) as usize) % AVATAR_COLORS.len()]
}

/// Uppercased first character of a name, or `?`.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Circular avatar with the name's initial. The response senses clicks so
/// the caller can treat the avatar as part of a clickable area.
pub fn render_avatar(ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    let painter = ui.painter();

    // Subtle shadow for depth
    painter.circle_filled(
        rect.center() + egui::vec2(0.0, 1.5),
        size / 2.0,
        Color32::from_black_alpha(30),
    );
    painter.circle_filled(rect.center(), size / 2.0, avatar_color(name));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        avatar_initial(name),
        egui::FontId::proportional(size * 0.45),
        Color32::WHITE,
    );
    painter.circle_stroke(
        rect.center(),
        size / 2.0,
        egui::Stroke::new(1.0, Color32::from_white_alpha(15)),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_color_deterministic() {
        assert_eq!(avatar_color("Mina"), avatar_color("Mina"));
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("mina"), "M");
        assert_eq!(avatar_initial("  jo"), "J");
        assert_eq!(avatar_initial(""), "?");
    }
}
