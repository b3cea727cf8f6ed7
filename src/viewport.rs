//! Viewport transform between screen and logical coordinates.
//!
//! Screen points are relative to the canvas container's top-left corner.
//! The mapping is `screen = logical * scale + offset`; everything here is
//! pure and allocation free.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Pan/zoom state of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::reset()
    }
}

impl Viewport {
    /// The identity viewport `{scale: 1, offset: (0, 0)}`
    pub const fn reset() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[inline]
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Convert a screen position to logical diagram coordinates
    #[inline]
    pub fn to_logical(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset_x) / self.scale,
            (screen.y - self.offset_y) / self.scale,
        )
    }

    /// Convert a logical position to screen coordinates
    #[inline]
    pub fn to_screen(&self, logical: Point) -> Point {
        Point::new(
            logical.x * self.scale + self.offset_x,
            logical.y * self.scale + self.offset_y,
        )
    }

    /// Convert a screen-space delta to a logical delta (for drag operations)
    #[inline]
    pub fn delta_to_logical(&self, delta: Point) -> Point {
        Point::new(delta.x / self.scale, delta.y / self.scale)
    }

    /// Shift the offset by a raw screen-space delta.
    pub fn panned_by(&self, delta: Point) -> Self {
        Self {
            offset_x: self.offset_x + delta.x,
            offset_y: self.offset_y + delta.y,
            ..*self
        }
    }

    /// Change the scale by `delta`, clamped to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// Without an anchor the offset is kept. With an anchor (a screen
    /// point) the offset is solved so the logical point under the anchor
    /// stays under it after rescaling.
    pub fn zoom_at(&self, delta: f64, anchor: Option<Point>) -> Self {
        let scale = clamp_scale(self.scale + delta);
        let Some(anchor) = anchor else {
            return Self { scale, ..*self };
        };
        let anchor_logical = self.to_logical(anchor);
        Self {
            scale,
            offset_x: anchor.x - anchor_logical.x * scale,
            offset_y: anchor.y - anchor_logical.y * scale,
        }
    }
}

/// Clamp a scale to the supported zoom range.
#[inline]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
