//! Random input generation for the bar chart.

use rand::Rng;

use crate::error::{Error, Result};

/// Default number of bars.
pub const DEFAULT_SIZE: usize = 50;

/// Default inclusive value range.
pub const DEFAULT_MIN: u32 = 10;
pub const DEFAULT_MAX: u32 = 400;

/// Generate `size` uniform integers in `min..=max`.
pub fn generate_array<R: Rng + ?Sized>(
    size: usize,
    min: u32,
    max: u32,
    rng: &mut R,
) -> Result<Vec<u32>> {
    if size == 0 {
        return Err(Error::InvalidSize);
    }
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// Bar height as a percentage of the tallest possible value.
pub fn bar_height_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    value as f64 / max as f64 * 100.0
}
