use serde::{Deserialize, Serialize};

use super::config::TipConfig;
use super::style::{clamp_px, BoxStyle, TipMetrics};

/// Absolute tooltip placement in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

impl Position {
    /// The same point moved up by `distance` pixels
    #[must_use]
    pub fn raised(self, distance: i32) -> Self {
        Self {
            top: self.top.saturating_sub(distance),
            left: self.left,
        }
    }
}

/// Combine the anchor point with the reference element's box offsets, the
/// configured nudge and the tooltip's own size.
///
/// `base` is `(0, 0)` for plain elements and the area anchor for image maps.
#[must_use]
pub fn place_tip(base: Position, reference: &BoxStyle, tip: &TipMetrics, config: &TipConfig) -> Position {
    let (ref_top, ref_left) = reference.offset();

    let top = i64::from(base.top) + i64::from(config.y) + i64::from(ref_top) + i64::from(tip.top_inset());
    let left = i64::from(base.left) + i64::from(config.x) + i64::from(ref_left) - i64::from(tip.half_width());

    Position {
        top: clamp_px(top),
        left: clamp_px(left),
    }
}
