//! In-memory [`Surface`] used by the renderer and engine tests.

use crate::grid::Surface;

/// One recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    StrokeStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

/// Records every paint call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<Call>,
    /// When set, `set_line_dash` fails with this message.
    pub fail_dash: Option<&'static str>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clears(&self) -> usize {
        self.count(|c| matches!(c, Call::Clear))
    }

    pub fn strokes(&self) -> usize {
        self.count(|c| matches!(c, Call::Stroke))
    }

    /// `(from, to)` endpoints of each stroked segment, in paint order.
    pub fn segments(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut out = Vec::new();
        let mut from = None;
        for call in &self.calls {
            match *call {
                Call::MoveTo(x, y) => from = Some((x, y)),
                Call::LineTo(x, y) => {
                    if let Some(start) = from.take() {
                        out.push((start, (x, y)));
                    }
                }
                _ => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    type Error = String;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.calls.push(Call::StrokeStyle(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::LineWidth(width));
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), String> {
        if let Some(msg) = self.fail_dash {
            return Err(msg.to_owned());
        }
        self.calls.push(Call::LineDash(segments.to_vec()));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }
}
