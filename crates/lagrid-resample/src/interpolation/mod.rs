//! Polynomial interpolation kernels for the resampling passes.
//!
//! The resampler evaluates, for every output position, the polynomial
//! through the samples of the currently selected window. Windows are
//! small (the block size), so the direct Lagrange formula is used.

mod lagrange;

pub use lagrange::lagrange;
