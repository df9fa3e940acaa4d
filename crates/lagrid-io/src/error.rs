/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error to open or manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when the grid header is missing or malformed.
    #[error("Invalid grid header in {0}")]
    InvalidHeader(std::path::PathBuf),

    /// Error when a sample value is missing or malformed.
    #[error("Invalid sample value at row {0}, col {1}")]
    InvalidSample(usize, usize),

    /// Error to create the grid.
    #[error("Failed to create grid. {0}")]
    GridCreationError(#[from] lagrid_core::GridError),

    /// Error when a sample cannot be represented for export.
    #[error("Failed to cast sample value")]
    CastError,

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),
}
