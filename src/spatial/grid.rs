//! Owning 2D grid with an offset-origin coordinate system
//!
//! Cells are stored row-major in a single buffer of `width * height`
//! elements: row 0 first, each row left to right. An absolute coordinate
//! `(x, y)` maps to buffer index `(y - origin_y) * width + (x - origin_x)`,
//! so the origin may be negative or positive and valid coordinates are
//! `x in [origin_x, origin_x + width)`, `y in [origin_y, origin_y + height)`.
//!
//! Two access paths exist. [`Grid2D::cell`] and `grid[(x, y)]` are the
//! unchecked fast path: a coordinate outside the grid rectangle but inside
//! the buffer aliases a neighbouring cell, and one outside the buffer panics.
//! [`Grid2D::at`] validates the coordinate first and returns
//! [`GridError::OutOfRange`] instead.
//!
//! Coordinates are `i64`. Bounds saturate at `i64::MAX`, so a grid whose far
//! edge would pass it cannot address the cells beyond.

// The unchecked fast path indexes the buffer directly
#![allow(clippy::indexing_slicing)]

use ndarray::{Array2, ArrayView2};
use std::iter::StepBy;
use std::ops::{Index, IndexMut};
use std::slice::{ChunksExact, ChunksExactMut, Iter, IterMut};

use crate::configuration::DEFAULT_ORIGIN;
use crate::error::{GridError, Result};
use crate::spatial::bounds::{GridBounds, GridParameters};
use crate::spatial::coordinate::{GridIndex, Vector2};
use crate::spatial::cursor::{
    ColumnCursor, Cursor, RowCursor, buffer_index, impl_cursor_index, impl_cursor_index_mut,
    strided, strided_mut,
};

/// Dense, fixed-size 2D grid addressed through an offset origin
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid2D<T> {
    cells: Vec<T>,
    origin_x: i64,
    origin_y: i64,
    width: usize,
    height: usize,
    bounds: GridBounds,
}

impl<T: Default> Grid2D<T> {
    /// Create a grid of default cells with its origin at `(0, 0)`
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_origin(width, height, DEFAULT_ORIGIN, DEFAULT_ORIGIN)
    }

    /// Create a grid of default cells whose buffer index 0 sits at `(origin_x, origin_y)`
    pub fn with_origin(width: usize, height: usize, origin_x: i64, origin_y: i64) -> Self {
        Self::from_parameters(GridParameters::new(width, height, origin_x, origin_y))
    }

    /// Create a grid of default cells with the shape and origin of `parameters`
    ///
    /// Pass another grid's [`Grid2D::grid_parameters`] to build a grid of a
    /// different element type over the same coordinates.
    pub fn from_parameters(parameters: GridParameters) -> Self {
        let cells = std::iter::repeat_with(T::default)
            .take(parameters.len())
            .collect();
        Self::from_parts(cells, parameters)
    }

    /// Create a grid from nested rows with its origin at `(0, 0)`
    ///
    /// See [`Grid2D::from_rows_with_origin`].
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
    {
        Self::from_rows_with_origin(rows, DEFAULT_ORIGIN, DEFAULT_ORIGIN)
    }

    /// Create a grid from nested rows
    ///
    /// Each outer entry is one row. The first listed row becomes row 0, the
    /// row at `y = origin_y`; callers that picture y increasing upward list
    /// the bottom row first. The width is the length of the first row; later
    /// rows that are longer are truncated and shorter ones padded with
    /// default cells.
    pub fn from_rows_with_origin<R, C>(rows: R, origin_x: i64, origin_y: i64) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut ragged_rows = 0_usize;

        for row in rows {
            let start = cells.len();
            cells.extend(row);
            let row_len = cells.len() - start;
            let row_width = *width.get_or_insert(row_len);
            if row_len != row_width {
                ragged_rows += 1;
                cells.resize_with(start + row_width, T::default);
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if ragged_rows > 0 {
            tracing::warn!(
                width,
                height,
                ragged_rows,
                "grid rows differ in length; resized to the first row"
            );
        }

        Self::from_parts(cells, GridParameters::new(width, height, origin_x, origin_y))
    }
}

impl<T> Grid2D<T> {
    /// Create a grid from a row-major list with its origin at `(0, 0)`
    ///
    /// See [`Grid2D::from_flat_with_origin`].
    pub fn from_flat(values: impl Into<Vec<T>>, height: usize) -> Self {
        Self::from_flat_with_origin(values, height, DEFAULT_ORIGIN, DEFAULT_ORIGIN)
    }

    /// Create a grid from a row-major list of cells
    ///
    /// The width is `values.len() / height`. A length that does not divide
    /// evenly truncates the width and drops the trailing remainder; a height
    /// of zero yields an empty grid.
    pub fn from_flat_with_origin(
        values: impl Into<Vec<T>>,
        height: usize,
        origin_x: i64,
        origin_y: i64,
    ) -> Self {
        let mut cells: Vec<T> = values.into();
        let width = cells.len().checked_div(height).unwrap_or(0);
        let expected = width * height;

        if cells.len() != expected {
            tracing::warn!(
                len = cells.len(),
                height,
                width,
                "flat grid values do not divide evenly into rows; truncating"
            );
            cells.truncate(expected);
        }

        Self::from_parts(cells, GridParameters::new(width, height, origin_x, origin_y))
    }

    /// Create a grid from an `ndarray` matrix with its origin at `(0, 0)`
    pub fn from_array(array: Array2<T>) -> Self {
        Self::from_array_with_origin(array, DEFAULT_ORIGIN, DEFAULT_ORIGIN)
    }

    /// Create a grid from an `ndarray` matrix of shape `(height, width)`
    ///
    /// Array row `i` becomes grid row `origin_y + i`.
    pub fn from_array_with_origin(array: Array2<T>, origin_x: i64, origin_y: i64) -> Self {
        let (height, width) = array.dim();
        let cells = array.into_iter().collect();
        Self::from_parts(cells, GridParameters::new(width, height, origin_x, origin_y))
    }

    fn from_parts(cells: Vec<T>, parameters: GridParameters) -> Self {
        tracing::trace!(
            width = parameters.width,
            height = parameters.height,
            origin_x = parameters.origin_x,
            origin_y = parameters.origin_y,
            "grid constructed"
        );

        Self {
            cells,
            origin_x: parameters.origin_x,
            origin_y: parameters.origin_y,
            width: parameters.width,
            height: parameters.height,
            bounds: parameters.bounds(),
        }
    }

    /// Convert into an `ndarray` matrix of shape `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::Shape` if `ndarray` rejects the shape
    pub fn into_array(self) -> Result<Array2<T>> {
        Ok(Array2::from_shape_vec((self.height, self.width), self.cells)?)
    }

    /// Borrow the grid as an `ndarray` view of shape `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::Shape` if `ndarray` rejects the shape
    pub fn as_array(&self) -> Result<ArrayView2<'_, T>> {
        Ok(ArrayView2::from_shape((self.height, self.width), &self.cells)?)
    }

    /// Signed buffer position of an absolute coordinate
    const fn position_of(&self, x: i64, y: i64) -> isize {
        ((y - self.origin_y) * self.width as i64 + (x - self.origin_x)) as isize
    }

    /// Unchecked access to the cell at `(x, y)`
    ///
    /// No bounds check is made against the grid rectangle; a coordinate
    /// outside it but inside the buffer reads a neighbouring cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate maps outside the buffer
    pub fn cell(&self, x: i64, y: i64) -> &T {
        &self.cells[buffer_index(self.position_of(x, y))]
    }

    /// Unchecked mutable access to the cell at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate maps outside the buffer
    pub fn cell_mut(&mut self, x: i64, y: i64) -> &mut T {
        let index = buffer_index(self.position_of(x, y));
        &mut self.cells[index]
    }

    /// Checked access to the cell at an absolute coordinate
    ///
    /// Accepts `(x, y)` tuples, `[x, y]` arrays, [`Vector2`] and `Rect` (its
    /// bottom-left corner).
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` if the coordinate lies outside
    /// `[left, right) x [bottom, top)` or does not fit in `i64`
    pub fn at<I: GridIndex>(&self, index: I) -> Result<&T> {
        let point = self.checked_point(&index)?;
        Ok(self.cell(point.x, point.y))
    }

    /// Checked mutable access to the cell at an absolute coordinate
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` if the coordinate lies outside
    /// `[left, right) x [bottom, top)` or does not fit in `i64`
    pub fn at_mut<I: GridIndex>(&mut self, index: I) -> Result<&mut T> {
        let point = self.checked_point(&index)?;
        Ok(self.cell_mut(point.x, point.y))
    }

    fn checked_point<I: GridIndex>(&self, index: &I) -> Result<Vector2<i64>> {
        let point = index
            .grid_coordinate()
            .ok_or_else(GridError::unrepresentable)?;
        if self.is_point_in_grid(point.x, point.y) {
            Ok(point)
        } else {
            Err(GridError::out_of_range(point))
        }
    }

    /// Check if an absolute coordinate lies inside the grid
    pub const fn is_point_in_grid(&self, x: i64, y: i64) -> bool {
        self.bounds.contains(x, y)
    }

    /// Cell under a cursor, or `None` if the cursor lies outside the buffer
    pub fn get<C: Cursor>(&self, cursor: C) -> Option<&T> {
        cursor.index().and_then(|index| self.cells.get(index))
    }

    /// Mutable cell under a cursor, or `None` if the cursor lies outside the buffer
    pub fn get_mut<C: Cursor>(&mut self, cursor: C) -> Option<&mut T> {
        cursor.index().and_then(|index| self.cells.get_mut(index))
    }

    /// Iterate all cells in storage order, independent of the origin
    pub fn iter(&self) -> Iter<'_, T> {
        self.cells.iter()
    }

    /// Mutably iterate all cells in storage order
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Iterate rows as slices, row 0 first
    ///
    /// A grid of width zero holds no cells and yields no rows, whatever its
    /// height.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Mutably iterate rows as slices, row 0 first
    ///
    /// A grid of width zero yields no rows.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.cells.chunks_exact_mut(self.width.max(1))
    }

    /// Cursor on the first cell of an absolute row
    pub const fn row_begin(&self, row: i64) -> RowCursor {
        RowCursor::new(self.position_of(self.origin_x, row))
    }

    /// Cursor one past the last cell of an absolute row
    pub const fn row_end(&self, row: i64) -> RowCursor {
        RowCursor::new(self.position_of(self.origin_x, row) + self.width as isize)
    }

    /// Row cursor on the cell at `(column, row)`
    pub const fn row(&self, column: i64, row: i64) -> RowCursor {
        RowCursor::new(self.position_of(column, row))
    }

    /// Row cursor on the cell at `point`
    pub const fn row_at(&self, point: Vector2<i64>) -> RowCursor {
        self.row(point.x, point.y)
    }

    /// Cursor on the bottom cell of an absolute column
    pub const fn column_begin(&self, column: i64) -> ColumnCursor {
        ColumnCursor::new(self.position_of(column, self.origin_y), self.width as isize)
    }

    /// Cursor one row past the top cell of an absolute column
    pub const fn column_end(&self, column: i64) -> ColumnCursor {
        ColumnCursor::new(
            self.position_of(column, self.origin_y) + (self.height * self.width) as isize,
            self.width as isize,
        )
    }

    /// Column cursor on the cell at `(column, row)`
    pub const fn column(&self, column: i64, row: i64) -> ColumnCursor {
        ColumnCursor::new(self.position_of(column, row), self.width as isize)
    }

    /// Column cursor on the cell at `point`
    pub const fn column_at(&self, point: Vector2<i64>) -> ColumnCursor {
        self.column(point.x, point.y)
    }

    /// Cells of an absolute row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer
    pub fn row_iter(&self, row: i64) -> Iter<'_, T> {
        self.row_span(self.row_begin(row), self.row_end(row)).iter()
    }

    /// Mutable cells of an absolute row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer
    pub fn row_iter_mut(&mut self, row: i64) -> IterMut<'_, T> {
        let (begin, end) = (self.row_begin(row), self.row_end(row));
        self.row_span_mut(begin, end).iter_mut()
    }

    /// Cells of an absolute column, bottom to top
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the buffer
    pub fn column_iter(&self, column: i64) -> StepBy<Iter<'_, T>> {
        self.column_span(self.column_begin(column), self.column_end(column))
    }

    /// Mutable cells of an absolute column, bottom to top
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the buffer
    pub fn column_iter_mut(&mut self, column: i64) -> StepBy<IterMut<'_, T>> {
        let (begin, end) = (self.column_begin(column), self.column_end(column));
        self.column_span_mut(begin, end)
    }

    /// Cells from `begin` up to but excluding `end`
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside the buffer or `end` precedes `begin`
    pub fn row_span(&self, begin: RowCursor, end: RowCursor) -> &[T] {
        &self.cells[buffer_index(begin.position())..buffer_index(end.position())]
    }

    /// Mutable cells from `begin` up to but excluding `end`
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside the buffer or `end` precedes `begin`
    pub fn row_span_mut(&mut self, begin: RowCursor, end: RowCursor) -> &mut [T] {
        &mut self.cells[buffer_index(begin.position())..buffer_index(end.position())]
    }

    /// Column cells from `begin` up to but excluding `end`
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside the buffer
    pub fn column_span(&self, begin: ColumnCursor, end: ColumnCursor) -> StepBy<Iter<'_, T>> {
        let count = begin.distance_to(end).max(0) as usize;
        strided(
            &self.cells,
            buffer_index(begin.position()),
            count,
            begin.stride() as usize,
        )
    }

    /// Mutable column cells from `begin` up to but excluding `end`
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside the buffer
    pub fn column_span_mut(
        &mut self,
        begin: ColumnCursor,
        end: ColumnCursor,
    ) -> StepBy<IterMut<'_, T>> {
        let count = begin.distance_to(end).max(0) as usize;
        strided_mut(
            &mut self.cells,
            buffer_index(begin.position()),
            count,
            begin.stride() as usize,
        )
    }

    /// First cell of an absolute row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer
    pub fn row_front(&self, row: i64) -> &T {
        self.cell(self.origin_x, row)
    }

    /// Last cell of an absolute row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer
    pub fn row_back(&self, row: i64) -> &T {
        self.cell(self.origin_x + self.width as i64 - 1, row)
    }

    /// Bottom cell of an absolute column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the buffer
    pub fn column_front(&self, column: i64) -> &T {
        self.cell(column, self.origin_y)
    }

    /// Top cell of an absolute column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the buffer
    pub fn column_back(&self, column: i64) -> &T {
        self.cell(column, self.origin_y + self.height as i64 - 1)
    }

    /// Mutable first cell of an absolute row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer
    pub fn row_front_mut(&mut self, row: i64) -> &mut T {
        self.cell_mut(self.origin_x, row)
    }

    /// Mutable last cell of an absolute row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer
    pub fn row_back_mut(&mut self, row: i64) -> &mut T {
        self.cell_mut(self.origin_x + self.width as i64 - 1, row)
    }

    /// Mutable bottom cell of an absolute column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the buffer
    pub fn column_front_mut(&mut self, column: i64) -> &mut T {
        self.cell_mut(column, self.origin_y)
    }

    /// Mutable top cell of an absolute column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the buffer
    pub fn column_back_mut(&mut self, column: i64) -> &mut T {
        self.cell_mut(column, self.origin_y + self.height as i64 - 1)
    }

    /// Row-major buffer
    pub fn data(&self) -> &[T] {
        &self.cells
    }

    /// Mutable row-major buffer
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Extents as `(width, height)`
    pub const fn size(&self) -> Vector2<usize> {
        Vector2::new(self.width, self.height)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Absolute coordinate of buffer index 0
    pub const fn origin(&self) -> Vector2<i64> {
        Vector2::new(self.origin_x, self.origin_y)
    }

    /// Shape and origin, for building another grid over the same coordinates
    pub const fn grid_parameters(&self) -> GridParameters {
        GridParameters::new(self.width, self.height, self.origin_x, self.origin_y)
    }

    /// Bounds computed at construction
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T> Index<(i64, i64)> for Grid2D<T> {
    type Output = T;

    fn index(&self, (x, y): (i64, i64)) -> &T {
        self.cell(x, y)
    }
}

impl<T> IndexMut<(i64, i64)> for Grid2D<T> {
    fn index_mut(&mut self, (x, y): (i64, i64)) -> &mut T {
        self.cell_mut(x, y)
    }
}

impl_cursor_index!(Grid2D);
impl_cursor_index_mut!(Grid2D);

impl<T> IntoIterator for Grid2D<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Grid2D<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid2D<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}

impl<T> From<Array2<T>> for Grid2D<T> {
    fn from(array: Array2<T>) -> Self {
        Self::from_array(array)
    }
}
