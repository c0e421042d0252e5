//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in arena pixels, origin at the top-left corner.
/// x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Per-tick displacement (pixels per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Center point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Squared distance between rectangle centers (pixels squared).
    pub fn center_distance_sq(&self, other: &Rect) -> f64 {
        self.center().distance_squared(other.center())
    }

    /// Strict overlap test. Rectangles that merely touch edges do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Whether `other` lies fully inside this rectangle (shared edges count
    /// as inside).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }

    /// Clamp the position so the rectangle lies within a `width` x `height`
    /// arena anchored at the origin. On an axis where the rectangle is at
    /// least as large as the arena, the position pins to 0.
    pub fn clamp_within(&mut self, width: f64, height: f64) {
        self.x = self.x.clamp(0.0, (width - self.w).max(0.0));
        self.y = self.y.clamp(0.0, (height - self.h).max(0.0));
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
