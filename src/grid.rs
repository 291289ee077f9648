//! Grid rendering: paints the dashed reference grid for a camera.
//!
//! Painting goes through the [`Surface`] trait so the same code drives the
//! browser canvas ([`crate::render::CanvasSurface`]) and in-memory surfaces in
//! tests. Line placement is a pure function ([`grid_lines`]); [`draw_grid`]
//! only turns it into paint calls.
//!
//! The grid is not incremental: each call clears the surface and repaints
//! every line.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::camera::Camera;
use crate::config::ViewportConfig;

/// An immediate-mode 2D paint target.
///
/// Mirrors the subset of the Canvas 2D API the grid needs. Calls that can
/// fail on the real canvas return `Result`.
pub trait Surface {
    /// Error raised by fallible paint calls.
    type Error;

    /// Current surface width in pixels.
    fn width(&self) -> f64;

    /// Current surface height in pixels.
    fn height(&self) -> f64;

    /// Erase the whole surface.
    fn clear(&mut self);

    fn set_stroke_style(&mut self, color: &str);

    fn set_line_width(&mut self, width: f64);

    /// Set the dash pattern for subsequent strokes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the pattern.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Self::Error>;

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn stroke(&mut self);
}

/// Visual parameters of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    /// Line spacing in logical units.
    pub spacing: f64,
    /// Dash and gap length in screen pixels.
    pub dash_length: f64,
    /// Stroke color.
    pub color: String,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self::from(&ViewportConfig::default())
    }
}

impl From<&ViewportConfig> for GridStyle {
    fn from(config: &ViewportConfig) -> Self {
        Self {
            spacing: config.grid_spacing,
            dash_length: config.dash_length,
            color: config.grid_color.clone(),
        }
    }
}

/// Screen-space placement of the grid lines for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    /// Distance between adjacent lines in screen pixels.
    pub spacing: f64,
    /// Stroke width in screen pixels.
    pub line_width: f64,
    /// x positions of the vertical lines, ascending.
    pub vertical: Vec<f64>,
    /// y positions of the horizontal lines, ascending.
    pub horizontal: Vec<f64>,
}

/// Compute grid line positions covering a `width` x `height` surface.
///
/// The first line sits at the camera offset modulo the screen spacing,
/// normalized into `[0, spacing)`, so lines stay anchored as the camera pans.
#[must_use]
pub fn grid_lines(camera: &Camera, spacing: f64, width: f64, height: f64) -> GridLines {
    let screen_spacing = spacing * camera.scale;
    GridLines {
        spacing: screen_spacing,
        line_width: 1.0 / camera.scale,
        vertical: line_positions(camera.offset_x, screen_spacing, width),
        horizontal: line_positions(camera.offset_y, screen_spacing, height),
    }
}

fn line_positions(offset: f64, spacing: f64, extent: f64) -> Vec<f64> {
    if !(spacing > 0.0 && spacing.is_finite()) {
        return Vec::new();
    }
    let mut first = offset.rem_euclid(spacing);
    // rem_euclid rounds tiny negative offsets up to exactly `spacing`.
    if first >= spacing {
        first = 0.0;
    }
    (0_u32..)
        .map(|i| first + f64::from(i) * spacing)
        .take_while(|pos| *pos < extent)
        .collect()
}

/// Clear `surface` and paint the grid for `camera`.
///
/// # Errors
///
/// Returns `Err` if the surface rejects the dash pattern.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, camera: &Camera, style: &GridStyle) -> Result<(), S::Error> {
    let width = surface.width();
    let height = surface.height();
    let lines = grid_lines(camera, style.spacing, width, height);
    let dash = [style.dash_length, style.dash_length];

    surface.clear();
    surface.set_stroke_style(&style.color);
    surface.set_line_width(lines.line_width);

    for &x in &lines.vertical {
        stroke_dashed(surface, &dash, (x, 0.0), (x, height))?;
    }
    for &y in &lines.horizontal {
        stroke_dashed(surface, &dash, (0.0, y), (width, y))?;
    }
    Ok(())
}

fn stroke_dashed<S: Surface + ?Sized>(
    surface: &mut S,
    dash: &[f64],
    from: (f64, f64),
    to: (f64, f64),
) -> Result<(), S::Error> {
    surface.begin_path();
    surface.set_line_dash(dash)?;
    surface.move_to(from.0, from.1);
    surface.line_to(to.0, to.1);
    surface.stroke();
    Ok(())
}
