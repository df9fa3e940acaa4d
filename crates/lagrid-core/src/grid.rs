use crate::error::GridError;

/// Grid size in samples
///
/// A struct to represent the size of a grid in samples per axis.
///
/// # Examples
///
/// ```
/// use lagrid_core::GridSize;
///
/// let grid_size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(grid_size.width, 10);
/// assert_eq!(grid_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Width of the grid in samples
    pub width: usize,
    /// Height of the grid in samples
    pub height: usize,
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a dense 2D grid of scalar samples.
///
/// The samples are stored in a single contiguous row-major buffer of
/// `height * width` entries; `(row, col)` access is plain index
/// arithmetic. A grid owns its buffer exclusively, so the source and
/// destination of a resampling pass are always distinct storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    size: GridSize,
    data: Vec<T>,
    label: Option<String>,
}

impl<T> Grid<T> {
    /// Create a new grid from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in samples.
    /// * `data` - The sample data of the grid, row-major.
    ///
    /// # Returns
    ///
    /// A new grid with the given sample data.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the grid size, an error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lagrid_core::{Grid, GridSize};
    ///
    /// let grid = Grid::new(
    ///     GridSize {
    ///         width: 2,
    ///         height: 3,
    ///     },
    ///     vec![0.0f64; 2 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.size().width, 2);
    /// assert_eq!(grid.size().height, 3);
    /// ```
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != size.width * size.height {
            return Err(GridError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self {
            size,
            data,
            label: None,
        })
    }

    /// Create a new grid with the given size and a uniform sample value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in samples.
    /// * `val` - The value assigned to every sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use lagrid_core::{Grid, GridSize};
    ///
    /// let grid = Grid::from_size_val(
    ///     GridSize {
    ///         width: 4,
    ///         height: 4,
    ///     },
    ///     0.0f64,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.as_slice().len(), 16);
    /// ```
    pub fn from_size_val(size: GridSize, val: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height];
        Grid::new(size, data)
    }

    /// Attach a display label to the grid.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the display label of the grid, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the size of the grid in samples.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the width of the grid in samples.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the grid in samples.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// True when the grid has no samples along one of its axes.
    pub fn is_empty(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    /// Get the sample data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the sample data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the sample at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col)
    }

    /// Build the transposed grid.
    ///
    /// Row `i` of the result is column `i` of `self`. The label is carried
    /// over unchanged.
    pub fn transposed(&self) -> Grid<T>
    where
        T: Copy,
    {
        let (width, height) = (self.size.width, self.size.height);
        let mut data = Vec::with_capacity(width * height);
        for col in 0..width {
            for row in 0..height {
                data.push(self.data[row * width + col]);
            }
        }

        Grid {
            size: GridSize {
                width: height,
                height: width,
            },
            data,
            label: self.label.clone(),
        }
    }
}
