//! 8-bit grayscale PNG export for grids.

use std::fs::File;
use std::path::Path;

use lagrid_core::Grid;
use num_traits::Float;
use png::{BitDepth, ColorType, Encoder};

use crate::error::IoError;

/// Write a grid as an 8-bit grayscale PNG.
///
/// Samples are expected in `[0, 1]` and map to `round(v * 255)`, clamped
/// into the byte range. Row 0 of the grid becomes the bottom scanline of
/// the image.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
/// * `grid` - The grid to export.
///
/// # Errors
///
/// Returns an error when the file cannot be created or the image cannot
/// be encoded.
pub fn write_grid_png<T>(file_path: impl AsRef<Path>, grid: &Grid<T>) -> Result<(), IoError>
where
    T: Float,
{
    let (width, height) = (grid.width(), grid.height());

    let mut buf = Vec::with_capacity(width * height);
    for row in grid.as_slice().chunks_exact(width).rev() {
        for &value in row {
            let v = value.to_f64().ok_or(IoError::CastError)?;
            buf.push((v * 255.0).round().clamp(0.0, 255.0) as u8);
        }
    }

    let file = File::create(file_path)?;
    let mut encoder = Encoder::new(file, width as u32, height as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(&buf)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use lagrid_core::{Grid, GridSize};
    use png::Decoder;

    use super::write_grid_png;
    use crate::error::IoError;

    #[test]
    fn write_png_flips_vertically() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("grid.png");

        let grid = Grid::new(
            GridSize {
                width: 2,
                height: 2,
            },
            vec![0.0f64, 1.0, 1.0, 0.0],
        )?;
        write_grid_png(&file_path, &grid)?;

        let file = std::fs::File::open(&file_path)?;
        let mut reader = Decoder::new(file)
            .read_info()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

        assert_eq!(info.width, 2);
        assert_eq!(info.height, 2);
        // grid row 1 is the top scanline
        assert_eq!(&buf[..4], &[255, 0, 0, 255]);

        Ok(())
    }

    #[test]
    fn write_png_rounds_and_clamps() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("levels.png");

        let grid = Grid::new(
            GridSize {
                width: 4,
                height: 1,
            },
            vec![-0.5f64, 0.5, 0.998, 1.5],
        )?;
        write_grid_png(&file_path, &grid)?;

        let file = std::fs::File::open(&file_path)?;
        let mut reader = Decoder::new(file)
            .read_info()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        let mut buf = vec![0; reader.output_buffer_size()];
        reader
            .next_frame(&mut buf)
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

        assert_eq!(&buf[..4], &[0, 128, 254, 255]);

        Ok(())
    }
}
