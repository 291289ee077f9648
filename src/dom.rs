//! Browser binding: DOM event normalization and the one-time canvas attach.
//!
//! The host page calls [`attach`] once with its `<canvas>`. From then on the
//! canvas listeners feed normalized [`InputEvent`]s into the [`Engine`], which
//! repaints synchronously whenever the camera moves. Listener closures are
//! leaked on purpose: they live as long as the page.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent};

use crate::camera::{Camera, Point};
use crate::config::{ConfigError, ViewportConfig};
use crate::engine::Engine;
use crate::input::{Contacts, DeltaMode, InputEvent, Modifiers, WheelDelta, WheelInput};
use crate::render::CanvasSurface;

static LOGGER: Once = Once::new();

// =============================================================
// Normalization
// =============================================================

/// Mouse event kinds the engine listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// Touch event kinds the engine listens to. `touchcancel` maps to `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// Build a pointer event at `position` (surface pixels).
#[must_use]
pub fn pointer_input(phase: PointerPhase, position: Point) -> InputEvent {
    match phase {
        PointerPhase::Down => InputEvent::PointerDown(position),
        PointerPhase::Move => InputEvent::PointerMove(position),
        PointerPhase::Up => InputEvent::PointerUp(position),
        PointerPhase::Leave => InputEvent::PointerLeave(position),
    }
}

/// Build a touch event from the contacts still on the surface.
///
/// Returns `None` for a start or move without contacts.
#[must_use]
pub fn touch_input(phase: TouchPhase, points: &[Point]) -> Option<InputEvent> {
    match phase {
        TouchPhase::Start => Contacts::from_points(points).map(InputEvent::TouchStart),
        TouchPhase::Move => Contacts::from_points(points).map(InputEvent::TouchMove),
        TouchPhase::End => Some(InputEvent::TouchEnd),
    }
}

/// Build a wheel event from raw DOM values.
#[must_use]
pub fn wheel_input(position: Point, dx: f64, dy: f64, delta_mode: u32, modifiers: Modifiers) -> InputEvent {
    InputEvent::Wheel(WheelInput {
        position,
        delta: WheelDelta { dx, dy },
        mode: DeltaMode::from_dom(delta_mode),
        modifiers,
    })
}

fn mouse_position(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

fn mouse_modifiers(ev: &MouseEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}

fn wheel_from_dom(ev: &WheelEvent) -> InputEvent {
    wheel_input(mouse_position(ev), ev.delta_x(), ev.delta_y(), ev.delta_mode(), mouse_modifiers(ev))
}

/// Touch positions relative to the canvas' top-left corner.
fn touch_points(ev: &TouchEvent, canvas: &HtmlCanvasElement) -> Vec<Point> {
    let rect = canvas.get_bounding_client_rect();
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Point::new(f64::from(t.client_x()) - rect.left(), f64::from(t.client_y()) - rect.top()))
        .collect()
}

// =============================================================
// Attach
// =============================================================

/// Handle returned to the host page after [`attach`].
#[wasm_bindgen]
pub struct Viewport {
    engine: Rc<RefCell<Engine<CanvasSurface>>>,
}

#[wasm_bindgen]
impl Viewport {
    /// Current camera scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.camera().scale
    }

    /// Logical x coordinate at the canvas' left edge.
    #[must_use]
    #[wasm_bindgen(js_name = offsetX)]
    pub fn offset_x(&self) -> f64 {
        self.camera().offset_x
    }

    /// Logical y coordinate at the canvas' top edge.
    #[must_use]
    #[wasm_bindgen(js_name = offsetY)]
    pub fn offset_y(&self) -> f64 {
        self.camera().offset_y
    }

    /// Repaint the grid, e.g. after the host resized the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a Canvas 2D call fails.
    pub fn redraw(&self) -> Result<(), JsValue> {
        self.engine.borrow_mut().render()
    }
}

impl Viewport {
    fn camera(&self) -> Camera {
        self.engine.borrow().camera()
    }
}

/// Bind the viewport engine to `canvas`: paint the grid and start listening
/// for wheel, mouse and touch input.
///
/// `config_json` optionally overrides [`ViewportConfig`] fields.
///
/// # Errors
///
/// Returns `Err` for invalid configuration, a canvas without a 2D context,
/// a failed initial paint, or a listener that cannot be registered.
#[wasm_bindgen]
pub fn attach(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Viewport, JsValue> {
    let config = match config_json {
        Some(json) => ViewportConfig::from_json(&json).map_err(config_error)?,
        None => ViewportConfig::default(),
    };
    init_logging(config.level().map_err(config_error)?);

    let surface = CanvasSurface::new(canvas.clone())?;
    let engine = Rc::new(RefCell::new(Engine::attach(surface, config)?));

    listen(&canvas, "wheel", {
        let engine = Rc::clone(&engine);
        move |ev: WheelEvent| {
            ev.prevent_default();
            dispatch(&engine, wheel_from_dom(&ev));
        }
    })?;

    for (kind, phase) in [
        ("mousedown", PointerPhase::Down),
        ("mousemove", PointerPhase::Move),
        ("mouseup", PointerPhase::Up),
        ("mouseleave", PointerPhase::Leave),
    ] {
        let engine = Rc::clone(&engine);
        listen(&canvas, kind, move |ev: MouseEvent| {
            dispatch(&engine, pointer_input(phase, mouse_position(&ev)));
        })?;
    }

    for (kind, phase) in [
        ("touchstart", TouchPhase::Start),
        ("touchmove", TouchPhase::Move),
        ("touchend", TouchPhase::End),
        ("touchcancel", TouchPhase::End),
    ] {
        let engine = Rc::clone(&engine);
        let canvas_tc = canvas.clone();
        listen(&canvas, kind, move |ev: TouchEvent| {
            if phase == TouchPhase::Move {
                ev.prevent_default();
            }
            if let Some(event) = touch_input(phase, &touch_points(&ev, &canvas_tc)) {
                dispatch(&engine, event);
            }
        })?;
    }

    Ok(Viewport { engine })
}

fn dispatch(engine: &RefCell<Engine<CanvasSurface>>, event: InputEvent) {
    if let Err(err) = engine.borrow_mut().handle_input(event) {
        log::error!("grid repaint failed: {err:?}");
    }
}

/// Register a non-passive listener that lives for the rest of the page.
fn listen<E>(target: &EventTarget, kind: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn init_logging(level: log::Level) {
    LOGGER.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&JsValue::from_str(&logger_conflict(&err)));
        }
    });
}

/// Message for a page that already installed its own `log` backend.
fn logger_conflict(err: &log::SetLoggerError) -> String {
    format!("viewport: console logger not installed ({err}); logging goes to the existing logger")
}

fn config_error(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
