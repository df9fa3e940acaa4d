//! Finishing policies applied after the resampling passes.
//!
//! Interpolated values can overshoot `[0, 1]` near window edges. The
//! finishing policy decides how those values are reconciled: clamping
//! during each pass, clamping once at the end, or a linear rescale using
//! the extrema observed across both passes.

use lagrid_core::Grid;
use num_traits::Float;
use rayon::prelude::*;

use crate::resample::ValueRange;

/// How out-of-range interpolated values are reconciled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishPolicy {
    /// Clamp every value into `[0, 1]` as it is produced.
    ClampEachStep,
    /// Clamp the final grid into `[0, 1]` after both passes.
    ClampAtEnd,
    /// Linearly rescale the final grid using the observed extrema.
    NormalizeAtEnd,
}

impl FinishPolicy {
    /// Parse from a policy name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clamp-each-step" => Some(Self::ClampEachStep),
            "clamp-at-end" => Some(Self::ClampAtEnd),
            "normalize" => Some(Self::NormalizeAtEnd),
            _ => None,
        }
    }
}

/// Clamp a single sample into `[0, 1]`.
#[inline]
pub fn clamp_sample<T: Float>(x: T) -> T {
    x.max(T::zero()).min(T::one())
}

/// Clamp every sample of the grid into `[0, 1]` in place.
pub fn clamp_grid<T>(grid: &mut Grid<T>)
where
    T: Float + Send + Sync,
{
    grid.as_slice_mut()
        .par_iter_mut()
        .for_each(|v| *v = clamp_sample(*v));
}

/// Linearly rescale every sample using the observed extrema.
///
/// Applies `(v - min) / (max - min)` in place, mapping the observed range
/// onto `[0, 1]`. A degenerate range (`max == min`, an all-equal grid)
/// leaves the samples unchanged rather than dividing by zero.
pub fn normalize_grid<T>(grid: &mut Grid<T>, range: ValueRange<T>)
where
    T: Float + Send + Sync,
{
    if range.is_degenerate() {
        return;
    }

    let span = range.max - range.min;
    grid.as_slice_mut()
        .par_iter_mut()
        .for_each(|v| *v = (*v - range.min) / span);
}
