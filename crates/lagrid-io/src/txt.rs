//! Reader and writer for the whitespace-separated text grid format.
//!
//! The format is a header line `<width> <height>` followed by `height`
//! rows of `width` samples. Any whitespace separates tokens on read;
//! the writer emits one space-separated row per line with 6-decimal
//! fixed precision.

use std::fmt::Display;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use lagrid_core::{Grid, GridSize};
use num_traits::Float;

use crate::error::IoError;

/// Read a grid from a text file.
///
/// The grid label is set to the file path. Sample values are expected
/// (but not checked) to lie in `[0, 1]`.
///
/// # Arguments
///
/// * `file_path` - The path to the text grid file.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the header does not
/// hold two non-negative dimensions, or a sample is missing or
/// unparseable.
pub fn read_grid_txt<T>(file_path: impl AsRef<Path>) -> Result<Grid<T>, IoError>
where
    T: Float + FromStr,
{
    let file_path = file_path.as_ref();
    let contents = fs::read_to_string(file_path)?;
    let mut tokens = contents.split_whitespace();

    let width = parse_dim(tokens.next(), file_path)?;
    let height = parse_dim(tokens.next(), file_path)?;

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let value = tokens
                .next()
                .and_then(|t| t.parse::<T>().ok())
                .ok_or(IoError::InvalidSample(row, col))?;
            data.push(value);
        }
    }

    let label = file_path.to_string_lossy().into_owned();
    Ok(Grid::new(GridSize { width, height }, data)?.with_label(label))
}

fn parse_dim(token: Option<&str>, file_path: &Path) -> Result<usize, IoError> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| IoError::InvalidHeader(file_path.to_path_buf()))
}

/// Write a grid to a text file.
///
/// Emits the `<width> <height>` header and then one line per row,
/// space-separated with 6-decimal fixed precision.
///
/// # Arguments
///
/// * `file_path` - The path to the output file.
/// * `grid` - The grid to serialize.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_grid_txt<T>(file_path: impl AsRef<Path>, grid: &Grid<T>) -> Result<(), IoError>
where
    T: Float + Display,
{
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    for row in grid.as_slice().chunks_exact(grid.width()) {
        for (col, value) in row.iter().enumerate() {
            if col > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{:.6}", value)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;

    Ok(())
}
