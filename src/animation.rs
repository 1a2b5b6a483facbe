//! Bubble entrance animation.

use std::time::{Duration, Instant};

/// Overshoot of the entrance easing.
pub const BACK_OVERSHOOT: f32 = 1.7;
/// Starting scale of a new bubble.
pub const START_SCALE: f32 = 0.8;
/// Starting downward offset of a new bubble, in unscaled points.
pub const START_OFFSET_Y: f32 = 20.0;

/// "Back out" easing: overshoots slightly past 1 before settling.
pub fn ease_out_back(t: f32, overshoot: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    1.0 + (overshoot + 1.0) * t * t * t + overshoot * t * t
}

/// Visual state of a bubble during its entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
}

impl Entrance {
    pub const SETTLED: Entrance = Entrance {
        opacity: 1.0,
        scale: 1.0,
        offset_y: 0.0,
    };

    pub fn is_settled(&self) -> bool {
        *self == Self::SETTLED
    }
}

/// Entrance state of a bubble that appeared at `appeared_at`.
pub fn entrance_at(appeared_at: Instant, now: Instant, duration: Duration) -> Entrance {
    let elapsed = now.saturating_duration_since(appeared_at);
    if duration.is_zero() || elapsed >= duration {
        return Entrance::SETTLED;
    }
    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
    let eased = ease_out_back(t, BACK_OVERSHOOT);
    Entrance {
        opacity: eased.clamp(0.0, 1.0),
        scale: START_SCALE + (1.0 - START_SCALE) * eased,
        offset_y: START_OFFSET_Y * (1.0 - eased),
    }
}
