/// An error type for the grid module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GridError {
    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),
}
