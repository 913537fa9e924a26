//! # Pedal Module
//!
//! Position quantization and edge-triggered action dispatch.
//!
//! This module handles:
//! - Quantizing raw position samples into discrete steps
//! - Tracking the last observed step and emitting one action per transition
//! - Distinguished handling of the neutral band around step 0

pub mod dispatch;
pub mod quantize;

pub use dispatch::{PedalAction, StepTracker};
pub use quantize::step_for_sample;
