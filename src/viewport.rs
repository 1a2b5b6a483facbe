//! Viewport adaptation: responsive scale, keyboard avoidance, scroll fade.
//!
//! The device frame has a fixed design size. When the window gets shorter
//! than the frame the whole interface is scaled down; on narrow ("mobile")
//! windows the frame follows the visible viewport height and switches into
//! keyboard layout when an on-screen keyboard eats into it.

use std::time::{Duration, Instant};

use crate::scheduler::DeferredTask;

/// Design width of the device frame.
pub const DEVICE_WIDTH: f32 = 402.0;
/// Design height of the device frame.
pub const DEVICE_HEIGHT: f32 = 874.0;
/// Frame border, both sides together.
pub const BORDER_SIZE: f32 = 10.0;
/// Vertical breathing room around the frame.
pub const PADDING: f32 = 40.0;
/// The interface never shrinks below this.
pub const MIN_SCALE: f32 = 0.5;
/// Height needed to show the frame unscaled.
pub const TOTAL_HEIGHT: f32 = DEVICE_HEIGHT + BORDER_SIZE + PADDING;

/// Windows at most this wide are treated as mobile.
pub const MOBILE_MAX_WIDTH: f32 = 480.0;
/// Height loss that counts as an on-screen keyboard.
pub const KEYBOARD_THRESHOLD: f32 = 100.0;
/// Grace period after the input loses focus before the keyboard closes.
pub const BLUR_GRACE: Duration = Duration::from_millis(100);

/// Scale factor for the device frame at the given viewport height, rounded
/// to three decimals.
pub fn responsive_scale(viewport_height: f32) -> f32 {
    if viewport_height >= TOTAL_HEIGHT {
        return 1.0;
    }
    let scale = (viewport_height / TOTAL_HEIGHT).max(MIN_SCALE);
    (scale * 1000.0).round() / 1000.0
}

pub fn is_mobile(window_width: f32) -> bool {
    window_width <= MOBILE_MAX_WIDTH
}

/// The scroll fade shows only when the content overflows.
pub fn scroll_fade_visible(content_height: f32, visible_height: f32) -> bool {
    content_height > visible_height
}

/// Size information delivered with a viewport change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    pub window_width: f32,
    pub window_height: f32,
    /// Height of the visible viewport, when the platform reports one.
    pub visual_height: Option<f32>,
}

/// Tracks the keyboard layout state and the effective viewport height.
#[derive(Debug, Default)]
pub struct ViewportState {
    keyboard_open: bool,
    /// Effective viewport height on mobile windows.
    viewport_height: Option<f32>,
    input_focused: bool,
    blur_check: DeferredTask,
    last_metrics: Option<ViewportMetrics>,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyboard_open(&self) -> bool {
        self.keyboard_open
    }

    pub fn viewport_height(&self) -> Option<f32> {
        self.viewport_height
    }

    pub fn input_focus_gained(&mut self) {
        self.input_focused = true;
        self.keyboard_open = true;
        self.blur_check.cancel();
    }

    pub fn input_focus_lost(&mut self, now: Instant) {
        self.input_focused = false;
        self.blur_check.schedule(now, BLUR_GRACE);
    }

    /// Feed the current window metrics. Returns true when they changed since
    /// the last call, i.e. a resize notification was handled.
    pub fn on_metrics(&mut self, metrics: ViewportMetrics) -> bool {
        if self.last_metrics == Some(metrics) {
            return false;
        }
        self.last_metrics = Some(metrics);

        if !is_mobile(metrics.window_width) {
            return true;
        }

        match metrics.visual_height {
            Some(visual) => {
                self.viewport_height = Some(visual);
                if metrics.window_height - visual > KEYBOARD_THRESHOLD {
                    self.keyboard_open = true;
                }
            }
            // Plain resize: only the height follows the window
            None => self.viewport_height = Some(metrics.window_height),
        }
        true
    }

    /// Close the keyboard layout once the blur grace period has passed and
    /// the input did not regain focus.
    pub fn tick(&mut self, now: Instant) {
        if self.blur_check.fire_if_due(now) && !self.input_focused {
            self.keyboard_open = false;
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.blur_check.due()
    }
}
