//! Grid shape parameters and the half-open bounds derived from them

/// Shape and placement of a grid, without storage
///
/// Copying the parameters of one grid builds another grid of the same shape
/// and origin, possibly with a different element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridParameters {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Absolute x of buffer index 0
    pub origin_x: i64,
    /// Absolute y of buffer index 0
    pub origin_y: i64,
}

impl GridParameters {
    /// Create parameters from extents and origin
    pub const fn new(width: usize, height: usize, origin_x: i64, origin_y: i64) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
        }
    }

    /// Number of cells described
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the described grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds of the described grid
    pub const fn bounds(&self) -> GridBounds {
        GridBounds::from_parameters(self)
    }
}

/// Half-open coordinate rectangle `[left, right) x [bottom, top)`
///
/// Left and bottom are inclusive, right and top are one past the last valid
/// column and row. Edges derived from parameters saturate at `i64::MAX`, so
/// a grid whose far edge would pass it loses its last coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    top: i64,
    right: i64,
    bottom: i64,
    left: i64,
}

impl GridBounds {
    /// Create bounds from explicit edges
    pub const fn new(top: i64, right: i64, bottom: i64, left: i64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Derive bounds from grid parameters
    pub const fn from_parameters(parameters: &GridParameters) -> Self {
        Self::new(
            parameters.origin_y.saturating_add(parameters.height as i64),
            parameters.origin_x.saturating_add(parameters.width as i64),
            parameters.origin_y,
            parameters.origin_x,
        )
    }

    /// Exclusive upper y edge
    pub const fn top(&self) -> i64 {
        self.top
    }

    /// Exclusive upper x edge
    pub const fn right(&self) -> i64 {
        self.right
    }

    /// Inclusive lower y edge
    pub const fn bottom(&self) -> i64 {
        self.bottom
    }

    /// Inclusive lower x edge
    pub const fn left(&self) -> i64 {
        self.left
    }

    /// Check if a point lies inside the bounds
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left && x < self.right && y >= self.bottom && y < self.top
    }
}
