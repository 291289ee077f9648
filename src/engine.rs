use crate::camera::{Camera, Point, ZoomLimits};
use crate::config::ViewportConfig;
use crate::grid::{GridStyle, Surface, draw_grid};
use crate::input::{Contacts, GestureSession, InputEvent, WheelInput};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Outcome of handling one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible changed.
    None,
    /// The camera moved; the grid must be repainted once.
    RenderNeeded,
}

impl Action {
    fn rendered_if(changed: bool) -> Self {
        if changed { Self::RenderNeeded } else { Self::None }
    }
}

/// Gesture controller state: camera, gesture session and tuning.
///
/// Separated from `Engine` so it can be tested without a paint surface.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub camera: Camera,
    pub session: GestureSession,
    pub config: ViewportConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(ViewportConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A core with the default camera and the given tuning.
    #[must_use]
    pub fn with_config(config: ViewportConfig) -> Self {
        Self { camera: Camera::default(), session: GestureSession::default(), config }
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The current gesture session.
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    fn limits(&self) -> ZoomLimits {
        self.config.zoom_limits()
    }

    // --- Input ---

    /// Apply one input event to the camera and gesture session.
    ///
    /// Returns [`Action::RenderNeeded`] exactly when the camera changed.
    pub fn handle_input(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Wheel(wheel) => self.on_wheel(wheel),
            InputEvent::PointerDown(pt) => {
                self.session.begin_drag(pt);
                log::trace!("drag started at ({}, {})", pt.x, pt.y);
                Action::None
            }
            InputEvent::PointerMove(pt) => self.on_pointer_move(pt),
            InputEvent::PointerUp(_) | InputEvent::PointerLeave(_) | InputEvent::TouchEnd => {
                self.session.end();
                Action::None
            }
            InputEvent::TouchStart(contacts) => {
                if let Contacts::Pair(a, b) = contacts {
                    self.session.touch_start_distance = a.distance_to(b);
                    log::trace!("pinch baseline {}", self.session.touch_start_distance);
                }
                Action::None
            }
            InputEvent::TouchMove(contacts) => self.on_touch_move(contacts),
        }
    }

    fn on_wheel(&mut self, wheel: WheelInput) -> Action {
        if wheel.modifiers.ctrl {
            let factor = if wheel.delta.dy < 0.0 {
                self.config.wheel_zoom_in
            } else {
                self.config.wheel_zoom_out
            };
            return Action::rendered_if(self.zoom(factor, wheel.position));
        }

        let step = self.config.wheel_pan_speed * wheel.mode.pan_direction();
        self.camera.pan_by(wheel.delta.dx * step, wheel.delta.dy * step);
        Action::RenderNeeded
    }

    fn on_pointer_move(&mut self, pt: Point) -> Action {
        if !self.session.is_dragging() {
            return Action::None;
        }
        let (dx, dy) = self.session.advance(pt);
        self.camera.pan_by(dx, dy);
        Action::RenderNeeded
    }

    fn on_touch_move(&mut self, contacts: Contacts) -> Action {
        match contacts {
            Contacts::Pair(a, b) => {
                let current = a.distance_to(b);
                let mid = a.midpoint(b);
                if (current - self.session.touch_start_distance).abs() > self.config.pinch_threshold_px {
                    let factor = current / self.session.touch_start_distance;
                    self.session.touch_start_distance = current;
                    Action::rendered_if(self.zoom(factor, mid))
                } else {
                    let (dx, dy) = self.session.advance(mid);
                    self.camera.pan_by(dx, dy);
                    Action::RenderNeeded
                }
            }
            Contacts::Single(pt) => {
                if self.session.is_dragging() {
                    let (dx, dy) = self.session.advance(pt);
                    self.camera.pan_by(dx, dy);
                    Action::RenderNeeded
                } else {
                    self.session.begin_drag(pt);
                    Action::None
                }
            }
            Contacts::Many(_) => Action::None,
        }
    }

    fn zoom(&mut self, factor: f64, anchor: Point) -> bool {
        let applied = self.camera.zoom_about(factor, anchor, self.limits());
        if !applied {
            log::debug!(
                "zoom step x{factor} rejected at scale {} (limits {:?})",
                self.camera.scale,
                self.limits()
            );
        }
        applied
    }
}

/// The full viewport engine. Wraps `EngineCore` and owns the paint surface.
pub struct Engine<S: Surface> {
    surface: S,
    style: GridStyle,
    pub core: EngineCore,
}

impl<S: Surface> Engine<S> {
    /// Bind the engine to `surface` and paint the initial grid.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the initial paint fails.
    pub fn attach(surface: S, config: ViewportConfig) -> Result<Self, S::Error> {
        let style = GridStyle::from(&config);
        let mut engine = Self { surface, style, core: EngineCore::with_config(config) };
        log::info!("viewport attached ({}x{})", engine.surface.width(), engine.surface.height());
        engine.render()?;
        Ok(engine)
    }

    /// Handle one input event, repainting if the camera changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the repaint fails. The camera update is kept.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<Action, S::Error> {
        let action = self.core.handle_input(event);
        if action == Action::RenderNeeded {
            self.render()?;
        }
        Ok(action)
    }

    /// Clear the surface and paint the grid for the current camera.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any fallible paint call fails.
    pub fn render(&mut self) -> Result<(), S::Error> {
        draw_grid(&mut self.surface, &self.core.camera, &self.style)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    /// The paint surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
