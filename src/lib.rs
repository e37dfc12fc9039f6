//! drivechart-rs: football drive-chart engine.
//!
//! This crate turns two per-team possession logs into a rendered field
//! diagram plus text-mode twins, with a strict split between the layout core
//! and the drawing backends.

pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod team;
pub mod telemetry;

pub use api::{DriveChartConfig, DriveChartEngine};
pub use error::{DriveChartError, DriveChartResult};
