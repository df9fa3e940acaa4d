use lagrid_core::GridError;

/// An error type for the resampling engine.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResampleError {
    /// Error when the source grid has a zero axis.
    #[error("Source grid is degenerate ({0}x{1})")]
    DegenerateSource(usize, usize),

    /// Error when the destination grid has a zero axis.
    #[error("Destination grid is degenerate ({0}x{1})")]
    DegenerateDestination(usize, usize),

    /// Error when the two grids of a pass disagree on the shared axis.
    #[error("Source rows ({0}) do not match destination rows ({1})")]
    RowCountMismatch(usize, usize),

    /// Error when the requested window size is zero.
    #[error("Block size must be greater than zero")]
    ZeroBlockSize,

    /// Error when a packed method code does not name a known policy pair.
    #[error("Unknown method code {0:#x}")]
    UnknownMethod(u32),

    /// Error from the grid container.
    #[error(transparent)]
    Grid(#[from] GridError),
}
