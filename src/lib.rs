//! Viewport navigation engine for a grid-based drawing surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It keeps a
//! camera (scale + offset) over an infinite logical plane, paints a dashed
//! reference grid for that camera, and turns wheel, mouse and touch input into
//! pan and zoom. The host page only hands over its `<canvas>` once through
//! [`dom::attach`]; everything after that happens inside the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Gesture controller ([`engine::EngineCore`]) and surface-bound [`engine::Engine`] |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Normalized input events and gesture session state |
//! | [`grid`] | Grid layout, the [`grid::Surface`] paint trait and grid painting |
//! | [`render`] | [`grid::Surface`] over a browser Canvas 2D context |
//! | [`dom`] | DOM event normalization and the wasm `attach` entry point |
//! | [`config`] | Tunable parameters, loadable from JSON |
//! | [`consts`] | Default numeric constants (zoom limits, grid spacing, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod grid;
pub mod input;
pub mod render;

#[cfg(test)]
mod test_support;
