//! # Step Quantization Module
//!
//! Maps a raw pedal sample to a discrete step index on a fixed linear scale.

/// Step scale numerator, calibrated for the stock Diffjoy axis range
pub const STEP_SCALE_NUM: i32 = 9;

/// Step scale denominator, calibrated for the stock Diffjoy axis range
pub const STEP_SCALE_DEN: i32 = 1024;

/// Quantize a raw position sample into a step index
///
/// Applies the `9/1024` scale with the fractional part discarded (truncation
/// toward zero), so the full 16-bit sample range maps to roughly -288..=287.
/// No clamping is performed; whatever the scale produces is the step.
///
/// # Examples
///
/// ```
/// use pedal_pager::pedal::quantize::step_for_sample;
///
/// assert_eq!(step_for_sample(0), 0);
/// assert_eq!(step_for_sample(114), 1);
/// assert_eq!(step_for_sample(-114), -1);
/// ```
#[inline]
#[must_use]
pub fn step_for_sample(sample: i16) -> i32 {
    // i32 math: the widened product cannot overflow, and Rust's integer
    // division truncates toward zero
    i32::from(sample) * STEP_SCALE_NUM / STEP_SCALE_DEN
}
