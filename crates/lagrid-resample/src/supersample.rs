//! Two-pass Lagrange super-sampling of a scalar grid.
//!
//! The 2D upsample is separable: a row pass stretches every source row to
//! the destination width, then a column pass stretches every column of
//! the intermediate grid to the destination height. The column pass is
//! expressed as a transposed row pass, which keeps a single parallel
//! row routine for both directions.

use lagrid_core::{Grid, GridSize};
use num_traits::Float;

use crate::error::ResampleError;
use crate::normalize::{clamp_grid, normalize_grid, FinishPolicy};
use crate::range::WindowPolicy;
use crate::resample::resample_rows;

/// A complete resampling method: window policy plus finishing policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuperSampleMethod {
    /// How sample windows are chosen along an axis.
    pub window: WindowPolicy,
    /// How out-of-range values are reconciled.
    pub finish: FinishPolicy,
}

impl SuperSampleMethod {
    /// Decode a legacy packed method code.
    ///
    /// The packing is `window * 16 + finish`: the high nibble selects the
    /// window policy (0 block, 1 overlap, 2 sliding) and the low nibble
    /// the finishing policy (0 clamp each step, 1 clamp at end,
    /// 2 normalize at end).
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::UnknownMethod`] with the offending code
    /// when either nibble does not name a known policy.
    pub fn from_code(code: u32) -> Result<Self, ResampleError> {
        let window = match code / 16 {
            0 => WindowPolicy::Block,
            1 => WindowPolicy::Overlap,
            2 => WindowPolicy::Sliding,
            _ => return Err(ResampleError::UnknownMethod(code)),
        };
        let finish = match code % 16 {
            0 => FinishPolicy::ClampEachStep,
            1 => FinishPolicy::ClampAtEnd,
            2 => FinishPolicy::NormalizeAtEnd,
            _ => return Err(ResampleError::UnknownMethod(code)),
        };
        Ok(Self { window, finish })
    }
}

impl Default for SuperSampleMethod {
    fn default() -> Self {
        Self {
            window: WindowPolicy::Sliding,
            finish: FinishPolicy::ClampAtEnd,
        }
    }
}

/// Upsample `src` into `dst` with two separable Lagrange passes.
///
/// The row pass resamples into an intermediate grid of shape
/// `(src_height, dst_width)`; the column pass resamples the transposed
/// intermediate into the destination shape. The window size is
/// renormalized per pass against the active axis extent. Afterwards the
/// finishing policy reconciles out-of-range values: clamping per step
/// happened inside the passes, clamping at the end sweeps the final grid
/// once, and normalization rescales with the extrema observed across
/// both passes.
///
/// The output is deterministic for a given source, destination shape,
/// window size and method.
///
/// # Arguments
///
/// * `src` - The source grid; never mutated.
/// * `dst` - The destination grid, allocated by the caller at the target
///   shape and overwritten in full.
/// * `block_size` - The requested window size, greater than zero.
/// * `method` - The window and finishing policies.
///
/// # Errors
///
/// Returns an error when either grid has a zero axis or the window size
/// is zero; the destination is untouched on every error path.
///
/// # Examples
///
/// ```
/// use lagrid_core::{Grid, GridSize};
/// use lagrid_resample::{super_sample, SuperSampleMethod};
///
/// let src = Grid::new(
///     GridSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0.0f64, 1.0, 1.0, 0.0],
/// )
/// .unwrap();
///
/// let mut dst = Grid::from_size_val(
///     GridSize {
///         width: 4,
///         height: 4,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// super_sample(&src, &mut dst, 2, SuperSampleMethod::default()).unwrap();
///
/// assert!(dst.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
/// ```
pub fn super_sample<T>(
    src: &Grid<T>,
    dst: &mut Grid<T>,
    block_size: usize,
    method: SuperSampleMethod,
) -> Result<(), ResampleError>
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
    if block_size == 0 {
        return Err(ResampleError::ZeroBlockSize);
    }

    let clamped = method.finish == FinishPolicy::ClampEachStep;

    // Row pass: (src_h x src_w) -> (src_h x dst_w).
    let mut mid = Grid::from_size_val(
        GridSize {
            width: dst.width(),
            height: src.height(),
        },
        T::zero(),
    )?;
    let row_stats = resample_rows(src, &mut mid, block_size, method.window, clamped)?;

    // Column pass on the transposed intermediate: (dst_w x src_h) -> (dst_w x dst_h).
    let mid_t = mid.transposed();
    let mut out_t = Grid::from_size_val(
        GridSize {
            width: dst.height(),
            height: dst.width(),
        },
        T::zero(),
    )?;
    let col_stats = resample_rows(&mid_t, &mut out_t, block_size, method.window, clamped)?;

    dst.as_slice_mut()
        .copy_from_slice(out_t.transposed().as_slice());

    match method.finish {
        FinishPolicy::ClampEachStep => {}
        FinishPolicy::ClampAtEnd => clamp_grid(dst),
        FinishPolicy::NormalizeAtEnd => normalize_grid(dst, row_stats.merge(col_stats)),
    }

    Ok(())
}
