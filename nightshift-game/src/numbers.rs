//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a fractional millisecond quantity into a timeline offset,
/// returning the floor value for non-finite or negative inputs.
#[must_use]
pub fn f32_to_interval_ms(value: f32, floor: f32) -> u64 {
    if !value.is_finite() {
        return cast::<f32, u64>(floor).unwrap_or(0);
    }
    let clamped = value.max(floor);
    cast::<f32, u64>(clamped).unwrap_or(0)
}

/// Convert a count into f64 while allowing precision loss in one location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}
