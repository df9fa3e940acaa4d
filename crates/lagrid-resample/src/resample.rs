//! One-dimensional resampling passes along grid rows.
//!
//! A pass maps every source row onto a destination row of a different
//! width, selecting a sample window per output position and evaluating
//! the Lagrange polynomial through it. Rows are independent, so they are
//! processed in parallel; the window-reuse cache is local to each row.

use lagrid_core::Grid;
use num_traits::Float;
use rayon::prelude::*;

use crate::error::ResampleError;
use crate::interpolation::lagrange;
use crate::normalize::clamp_sample;
use crate::range::{effective_window, WindowPolicy};

/// Running minimum and maximum produced by a resampling pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange<T> {
    /// Smallest value produced so far.
    pub min: T,
    /// Largest value produced so far.
    pub max: T,
}

impl<T: Float> ValueRange<T> {
    /// An empty range that any observed value will replace.
    pub fn empty() -> Self {
        Self {
            min: T::infinity(),
            max: T::neg_infinity(),
        }
    }

    /// Fold a produced value into the statistics.
    #[inline]
    pub fn observe(&mut self, value: T) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Merge the statistics of two passes or two parallel workers.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True when no spread was observed.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }
}

/// Resample every row of `src` to the width of `dst`.
///
/// Both grids must have the same number of rows; the destination width
/// sets the output sampling rate. For each destination index `j` the
/// source position is `xi = j * src_width / dst_width`, the window policy
/// selects a sample range around `floor(xi)`, and the Lagrange polynomial
/// through that window is evaluated at the fractional offset. The window
/// is only rebuilt when the selected range moves, which amortizes the
/// copy over runs of output positions sharing a window.
///
/// The requested `block_size` is renormalized against the source width so
/// the block partition divides the axis as evenly as possible; the same
/// adjusted size feeds the sliding policy.
///
/// # Arguments
///
/// * `src` - The source grid; never mutated.
/// * `dst` - The destination grid, written in full.
/// * `block_size` - The requested window size, greater than zero.
/// * `policy` - The window selection policy.
/// * `clamped` - Clamp every produced value into `[0, 1]` immediately.
///
/// # Returns
///
/// The minimum and maximum of all produced values (after clamping when
/// `clamped` is set).
///
/// # Errors
///
/// Returns an error when either grid has a zero axis, when the row counts
/// differ, or when `block_size` is zero. The destination is untouched on
/// every error path.
pub fn resample_rows<T>(
    src: &Grid<T>,
    dst: &mut Grid<T>,
    block_size: usize,
    policy: WindowPolicy,
    clamped: bool,
) -> Result<ValueRange<T>, ResampleError>
where
    T: Float + Send + Sync,
{
    if src.is_empty() {
        return Err(ResampleError::DegenerateSource(src.width(), src.height()));
    }
    if dst.is_empty() {
        return Err(ResampleError::DegenerateDestination(
            dst.width(),
            dst.height(),
        ));
    }
    if src.height() != dst.height() {
        return Err(ResampleError::RowCountMismatch(src.height(), dst.height()));
    }
    if block_size == 0 {
        return Err(ResampleError::ZeroBlockSize);
    }

    let src_width = src.width();
    let dst_width = dst.width();
    let k = effective_window(src_width, block_size);
    let scale = T::from(src_width).unwrap() / T::from(dst_width).unwrap();

    let range = src
        .as_slice()
        .par_chunks_exact(src_width)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_width))
        .map(|(src_row, dst_row)| resample_row(src_row, dst_row, k, policy, clamped, scale))
        .reduce(ValueRange::empty, ValueRange::merge);

    Ok(range)
}

/// Resample a single row; the window cache lives on this stack frame.
fn resample_row<T: Float>(
    src_row: &[T],
    dst_row: &mut [T],
    k: usize,
    policy: WindowPolicy,
    clamped: bool,
    scale: T,
) -> ValueRange<T> {
    let n = src_row.len();
    let mut last_start = usize::MAX;
    let mut window: Vec<T> = Vec::with_capacity(k + 2);
    let mut stats = ValueRange::empty();

    for (j, out) in dst_row.iter_mut().enumerate() {
        let xi = T::from(j).unwrap() * scale;
        let x = xi.to_usize().unwrap_or(0).min(n - 1);
        let span = policy.select(x, n, k);

        if span.start != last_start {
            window.clear();
            window.extend_from_slice(&src_row[span.clone()]);
            last_start = span.start;
        }

        let offset = xi - T::from(span.start).unwrap();
        let mut value = lagrange(&window, offset);
        if clamped {
            value = clamp_sample(value);
        }
        stats.observe(value);
        *out = value;
    }

    stats
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use lagrid_core::{Grid, GridSize};

    use super::{resample_rows, ValueRange};
    use crate::error::ResampleError;
    use crate::range::WindowPolicy;

    fn grid(width: usize, height: usize, data: Vec<f64>) -> Grid<f64> {
        Grid::new(GridSize { width, height }, data).unwrap()
    }

    #[test]
    fn identity_width_reproduces_samples() -> Result<(), ResampleError> {
        let src = grid(4, 2, vec![0.1, 0.9, 0.4, 0.6, 0.8, 0.2, 0.7, 0.3]);
        let mut dst = Grid::from_size_val(src.size(), 0.0)?;

        resample_rows(&src, &mut dst, 4, WindowPolicy::Sliding, false)?;

        for (a, b) in dst.as_slice().iter().zip(src.as_slice().iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }

        Ok(())
    }

    #[test]
    fn doubles_row_with_sliding_window() -> Result<(), ResampleError> {
        let src = grid(2, 1, vec![0.0, 1.0]);
        let mut dst = grid(4, 1, vec![0.0; 4]);

        let stats = resample_rows(&src, &mut dst, 2, WindowPolicy::Sliding, false)?;

        // linear window [0, 1] sampled at 0, 0.5, 1, 1.5
        let expected = [0.0, 0.5, 1.0, 1.5];
        for (a, b) in dst.as_slice().iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
        assert_relative_eq!(stats.min, 0.0, epsilon = 1e-12);
        assert_relative_eq!(stats.max, 1.5, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn clamped_pass_tracks_post_clamp_values() -> Result<(), ResampleError> {
        let src = grid(2, 1, vec![0.0, 1.0]);
        let mut dst = grid(4, 1, vec![0.0; 4]);

        let stats = resample_rows(&src, &mut dst, 2, WindowPolicy::Sliding, true)?;

        assert_relative_eq!(stats.max, 1.0, epsilon = 1e-12);
        assert!(dst.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));

        Ok(())
    }

    #[test]
    fn constant_rows_stay_constant() -> Result<(), ResampleError> {
        let src = Grid::from_size_val(
            GridSize {
                width: 3,
                height: 2,
            },
            0.6f64,
        )?;
        let mut dst = Grid::from_size_val(
            GridSize {
                width: 9,
                height: 2,
            },
            0.0,
        )?;

        for policy in [WindowPolicy::Block, WindowPolicy::Overlap, WindowPolicy::Sliding] {
            resample_rows(&src, &mut dst, 2, policy, false)?;
            for v in dst.as_slice() {
                assert_relative_eq!(v, &0.6, epsilon = 1e-9);
            }
        }

        Ok(())
    }

    #[test]
    fn source_is_not_mutated() -> Result<(), ResampleError> {
        let src = grid(3, 1, vec![0.2, 0.8, 0.5]);
        let before = src.clone();
        let mut dst = grid(6, 1, vec![0.0; 6]);

        resample_rows(&src, &mut dst, 2, WindowPolicy::Block, true)?;
        assert_eq!(src, before);

        Ok(())
    }

    #[test]
    fn rejects_degenerate_grids() {
        let empty = Grid::<f64>::new(
            GridSize {
                width: 0,
                height: 0,
            },
            vec![],
        )
        .unwrap();
        let src = grid(2, 1, vec![0.0, 1.0]);
        let mut dst = grid(4, 1, vec![0.0; 4]);

        let mut empty_dst = empty.clone();
        assert!(matches!(
            resample_rows(&empty, &mut dst, 2, WindowPolicy::Block, false),
            Err(ResampleError::DegenerateSource(0, 0))
        ));
        assert!(matches!(
            resample_rows(&src, &mut empty_dst, 2, WindowPolicy::Block, false),
            Err(ResampleError::DegenerateDestination(0, 0))
        ));
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let src = grid(2, 2, vec![0.0; 4]);
        let mut dst = grid(4, 3, vec![0.0; 12]);

        assert!(matches!(
            resample_rows(&src, &mut dst, 2, WindowPolicy::Block, false),
            Err(ResampleError::RowCountMismatch(2, 3))
        ));
    }

    #[test]
    fn rejects_zero_block_size() {
        let src = grid(2, 1, vec![0.0, 1.0]);
        let mut dst = grid(4, 1, vec![0.0; 4]);

        assert!(matches!(
            resample_rows(&src, &mut dst, 0, WindowPolicy::Sliding, false),
            Err(ResampleError::ZeroBlockSize)
        ));
    }

    #[test]
    fn value_range_merge() {
        let mut a = ValueRange::empty();
        a.observe(0.5f64);
        a.observe(-1.0);
        let mut b = ValueRange::empty();
        b.observe(2.0);

        let merged = a.merge(b);
        assert_eq!(merged.min, -1.0);
        assert_eq!(merged.max, 2.0);
        assert!(!merged.is_degenerate());
        assert!(ValueRange::<f64>::empty().is_degenerate());
    }
}
