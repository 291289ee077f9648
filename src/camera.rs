#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{INITIAL_SCALE, MAX_SCALE, MIN_SCALE};

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }
}

/// Inclusive bounds on the camera scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: MIN_SCALE, max: MAX_SCALE }
    }
}

impl ZoomLimits {
    /// Whether `scale` lies inside the bounds. `NaN` never does.
    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

/// Camera state for pan/zoom over the infinite logical plane.
///
/// `offset_x` / `offset_y` are the logical coordinates aligned with the
/// surface's top-left corner. `scale` is screen pixels per logical unit
/// (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: INITIAL_SCALE }
    }
}

impl Camera {
    /// Convert a screen-space point (surface pixels) to logical coordinates.
    #[must_use]
    pub fn screen_to_logical(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.scale + self.offset_x,
            y: screen.y / self.scale + self.offset_y,
        }
    }

    /// Convert a logical point to screen coordinates (surface pixels).
    #[must_use]
    pub fn logical_to_screen(&self, logical: Point) -> Point {
        Point {
            x: (logical.x - self.offset_x) * self.scale,
            y: (logical.y - self.offset_y) * self.scale,
        }
    }

    /// Convert a screen-space distance (pixels) to a logical distance.
    #[must_use]
    pub fn screen_dist_to_logical(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Shift the camera by a screen-pixel delta.
    ///
    /// The delta is divided by the scale so a drag covers the same screen
    /// distance at every zoom level.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx / self.scale;
        self.offset_y += dy / self.scale;
    }

    /// Multiply the scale by `factor`, keeping the logical point under
    /// `anchor` fixed on screen.
    ///
    /// Returns `false` and leaves the camera untouched when the resulting
    /// scale falls outside `limits`. Out-of-range steps are dropped, never
    /// clamped.
    pub fn zoom_about(&mut self, factor: f64, anchor: Point, limits: ZoomLimits) -> bool {
        let new_scale = self.scale * factor;
        if !limits.contains(new_scale) {
            return false;
        }

        let world = self.screen_to_logical(anchor);
        self.scale = new_scale;
        self.offset_x = world.x - anchor.x / new_scale;
        self.offset_y = world.y - anchor.y / new_scale;
        true
    }
}
