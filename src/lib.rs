//! linechart-rs: headless time-series line chart engine.
//!
//! The crate turns named time-series into a backend-agnostic `RenderFrame`:
//! time and value scales, calendar-aware axes, gap-aware monotone line
//! paths, fixed reference bands for bounded oscillators, and an
//! Idle/Hovering crosshair with nearest-point tooltips, plus clamped
//! horizontal zoom/pan and resize handling.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartEvent};
pub use error::{ChartError, ChartResult};
