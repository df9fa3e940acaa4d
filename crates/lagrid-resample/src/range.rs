//! Sample-window selection policies for one resampling axis.
//!
//! Every selector returns a half-open index range `[start, end)` into an
//! axis of `n` samples, sized at or near the requested window size `k`.
//! The block selector partitions the axis into contiguous windows; the
//! sliding selector re-centers a fixed-width window on every query.

use std::ops::Range;

/// How sample windows are chosen along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPolicy {
    /// Fixed balanced partition of the axis into contiguous blocks.
    Block,
    /// Partition blocks grown by one shared sample on each side.
    Overlap,
    /// Fixed-width window re-centered on every output position.
    Sliding,
}

impl WindowPolicy {
    /// Parse from a policy name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "block" => Some(Self::Block),
            "overlap" => Some(Self::Overlap),
            "sliding" => Some(Self::Sliding),
            _ => None,
        }
    }

    /// Select the sample range for position `x` on an axis of `n` samples.
    ///
    /// `k` is the requested window size and must be greater than zero;
    /// `x` must lie in `[0, n)`.
    pub fn select(self, x: usize, n: usize, k: usize) -> Range<usize> {
        match self {
            WindowPolicy::Block => block_range(x, n, k),
            WindowPolicy::Overlap => {
                let mut span = block_range(x, n, k);
                if span.start > 0 {
                    span.start -= 1;
                }
                if span.end < n {
                    span.end += 1;
                }
                span
            }
            WindowPolicy::Sliding => sliding_range(x, n, k),
        }
    }
}

/// Return the partition block containing position `x`.
///
/// The axis `[0, n)` is split into blocks of nominal width `k`; the
/// remainder `n % k` is redistributed so that the trailing blocks absorb
/// one extra sample each and no block is empty. The returned range always
/// satisfies `start <= x < end <= n`.
///
/// # Arguments
///
/// * `x` - The query position, `x < n`.
/// * `n` - The axis length in samples.
/// * `k` - The nominal block width, greater than zero. Values above `n`
///   are treated as `n`.
pub fn block_range(x: usize, n: usize, k: usize) -> Range<usize> {
    debug_assert!(x < n);
    debug_assert!(k > 0);
    let k = k.min(n);

    // Remainder redistribution keeps the partition as uniform as possible;
    // the widened blocks sit at the tail of the axis.
    let mut start = (x - (x / k).min(n % k)) / k * k;
    start += (start / k).min((n - start) % k);

    let mut width = k;
    if (n - start) % k != 0 {
        width += 1;
    }

    start..start + width
}

/// Return the `k`-wide window centered on position `x`.
///
/// Near the axis boundaries the window slides inward instead of
/// shrinking, so it is exactly `k` wide whenever `n >= k`; for `n < k`
/// the whole axis is returned.
///
/// # Arguments
///
/// * `x` - The query position, `x < n`.
/// * `n` - The axis length in samples.
/// * `k` - The window width, greater than zero.
pub fn sliding_range(x: usize, n: usize, k: usize) -> Range<usize> {
    debug_assert!(x < n);
    debug_assert!(k > 0);

    let start = x.saturating_sub(k / 2);
    let end = (start + k).min(n);
    let start = end.saturating_sub(k);

    start..end
}

/// Renormalize a window size against an axis extent.
///
/// Shrinks `k` so that the block partition divides the axis as evenly as
/// possible; the result is `extent / (extent / k)`, with `k >= extent`
/// collapsing to the whole axis.
pub fn effective_window(extent: usize, k: usize) -> usize {
    debug_assert!(extent > 0);
    debug_assert!(k > 0);

    if k >= extent {
        extent
    } else {
        extent / (extent / k)
    }
}
