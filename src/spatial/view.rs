//! Borrowed rectangular windows into a grid
//!
//! A view addresses a sub-rectangle of its parent's buffer using the
//! parent's width as stride. After construction it works purely in 0-based
//! window-local coordinates: `(0, 0)` is the window's bottom-left cell and
//! the absolute origin of the parent is no longer consulted.
//!
//! Window geometry is not validated. A window reaching past the parent's
//! buffer panics when one of its out-of-buffer cells is dereferenced, and a
//! window wider than the parent wraps into the next parent row.

// Window cells index the parent buffer directly
#![allow(clippy::indexing_slicing)]

use ndarray::{ArrayView2, ShapeBuilder};
use std::iter::{FusedIterator, StepBy};
use std::ops::{Index, IndexMut};
use std::slice::{ChunksMut, Iter, IterMut};

use crate::error::Result;
use crate::math::rect::Rect;
use crate::spatial::coordinate::Vector2;
use crate::spatial::cursor::{
    ColumnCursor, Cursor, RowCursor, ViewCursor, buffer_index, impl_cursor_index,
    impl_cursor_index_mut, strided, strided_mut,
};
use crate::spatial::grid::Grid2D;

/// Placement of a window inside a parent buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: isize,
    stride: isize,
    width: isize,
    height: isize,
}

impl Window {
    fn full<T>(grid: &Grid2D<T>) -> Self {
        Self {
            start: 0,
            stride: grid.width() as isize,
            width: grid.width() as isize,
            height: grid.height() as isize,
        }
    }

    fn from_corners<T>(
        grid: &Grid2D<T>,
        bottom_left: Vector2<i64>,
        top_right: Vector2<i64>,
    ) -> Self {
        let origin = grid.origin();
        let stride = grid.width() as i64;
        let window = Self {
            start: ((bottom_left.y - origin.y) * stride + bottom_left.x - origin.x) as isize,
            stride: stride as isize,
            width: (top_right.x - bottom_left.x + 1) as isize,
            height: (top_right.y - bottom_left.y + 1) as isize,
        };

        tracing::trace!(
            start = window.start,
            stride = window.stride,
            width = window.width,
            height = window.height,
            "grid view constructed"
        );

        window
    }

    const fn position_of(&self, x: i64, y: i64) -> isize {
        self.start + x as isize + y as isize * self.stride
    }

    /// Buffer index of the `local`-th window cell in row-major order
    const fn index_of(&self, local: usize) -> usize {
        let width = self.width as usize;
        buffer_index(
            self.start
                + ((local / width) as isize) * self.stride
                + (local % width) as isize,
        )
    }

    const fn len(&self) -> usize {
        Self::extent(self.width) * Self::extent(self.height)
    }

    const fn extent(value: isize) -> usize {
        if value > 0 { value as usize } else { 0 }
    }

    const fn begin(&self) -> ViewCursor {
        ViewCursor::new(self.start, 0, self.width, self.stride)
    }

    const fn end(&self) -> ViewCursor {
        ViewCursor::new(
            self.start + self.stride * self.height,
            0,
            self.width,
            self.stride,
        )
    }

    const fn row(&self, column: i64, row: i64) -> RowCursor {
        RowCursor::new(self.position_of(column, row))
    }

    const fn column(&self, column: i64, row: i64) -> ColumnCursor {
        ColumnCursor::new(self.position_of(column, row), self.stride)
    }

    const fn width(&self) -> i64 {
        self.width as i64
    }

    const fn height(&self) -> i64 {
        self.height as i64
    }
}

/// Read-only window into a grid
///
/// Borrows the parent's buffer for `'a`, so the parent can be neither
/// dropped nor mutated while the view exists.
#[derive(Debug)]
pub struct GridView<'a, T> {
    cells: &'a [T],
    window: Window,
}

impl<T> Clone for GridView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridView<'_, T> {}

/// Mutable window into a grid
///
/// Holds the parent's buffer exclusively for `'a`.
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    cells: &'a mut [T],
    window: Window,
}

// Cursor construction and window geometry, shared by both view kinds
macro_rules! window_methods {
    () => {
        /// Window width in cells
        pub const fn width(&self) -> usize {
            Window::extent(self.window.width)
        }

        /// Window height in cells
        pub const fn height(&self) -> usize {
            Window::extent(self.window.height)
        }

        /// Window extents as `(width, height)`
        pub const fn size(&self) -> Vector2<usize> {
            Vector2::new(self.width(), self.height())
        }

        /// Parent width, the distance between vertically adjacent cells
        pub const fn stride(&self) -> usize {
            Window::extent(self.window.stride)
        }

        /// Number of cells in the window
        pub const fn len(&self) -> usize {
            self.window.len()
        }

        /// Whether the window has no cells
        pub const fn is_empty(&self) -> bool {
            self.window.len() == 0
        }

        /// Cursor on the window's first cell in row-major order
        pub const fn begin(&self) -> ViewCursor {
            self.window.begin()
        }

        /// Cursor one past the window's last cell in row-major order
        pub const fn end(&self) -> ViewCursor {
            self.window.end()
        }

        /// Cursor on the first cell of a window row
        pub const fn row_begin(&self, row: i64) -> RowCursor {
            self.window.row(0, row)
        }

        /// Cursor one past the last cell of a window row
        pub const fn row_end(&self, row: i64) -> RowCursor {
            self.window.row(self.window.width(), row)
        }

        /// Row cursor on the window cell at `(column, row)`
        pub const fn row(&self, column: i64, row: i64) -> RowCursor {
            self.window.row(column, row)
        }

        /// Row cursor on the window cell at `point`
        pub const fn row_at(&self, point: Vector2<i64>) -> RowCursor {
            self.window.row(point.x, point.y)
        }

        /// Cursor on the bottom cell of a window column
        pub const fn column_begin(&self, column: i64) -> ColumnCursor {
            self.window.column(column, 0)
        }

        /// Cursor one row past the top cell of a window column
        pub const fn column_end(&self, column: i64) -> ColumnCursor {
            self.window.column(column, self.window.height())
        }

        /// Column cursor on the window cell at `(column, row)`
        pub const fn column(&self, column: i64, row: i64) -> ColumnCursor {
            self.window.column(column, row)
        }

        /// Column cursor on the window cell at `point`
        pub const fn column_at(&self, point: Vector2<i64>) -> ColumnCursor {
            self.window.column(point.x, point.y)
        }
    };
}

impl<'a, T> GridView<'a, T> {
    /// View the whole grid
    pub fn new(grid: &'a Grid2D<T>) -> Self {
        Self {
            cells: grid.data(),
            window: Window::full(grid),
        }
    }

    /// View the window between two inclusive corners in absolute grid coordinates
    pub fn from_corners(
        grid: &'a Grid2D<T>,
        bottom_left: Vector2<i64>,
        top_right: Vector2<i64>,
    ) -> Self {
        Self {
            cells: grid.data(),
            window: Window::from_corners(grid, bottom_left, top_right),
        }
    }

    /// View the window spanned by a rectangle's bottom-left and top-right vertices
    pub fn from_rect(grid: &'a Grid2D<T>, rect: &Rect<i64>) -> Self {
        Self::from_corners(grid, rect.bottom_left(), rect.top_right())
    }

    window_methods!();

    /// Unchecked access to the window cell at local `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate maps outside the parent buffer
    pub fn cell(&self, x: i64, y: i64) -> &'a T {
        let cells = self.cells;
        &cells[buffer_index(self.window.position_of(x, y))]
    }

    /// Cell under a cursor, or `None` if the cursor lies outside the parent buffer
    pub fn get<C: Cursor>(&self, cursor: C) -> Option<&'a T> {
        let cells = self.cells;
        cursor.index().and_then(|index| cells.get(index))
    }

    /// Iterate window cells in row-major local order
    pub fn iter(&self) -> ViewIter<'a, T> {
        ViewIter {
            cells: self.cells,
            window: self.window,
            front: 0,
            back: self.window.len(),
        }
    }

    /// Iterate window rows as slices, local row 0 first
    ///
    /// # Panics
    ///
    /// Panics if a window row lies outside the parent buffer
    pub fn rows(
        &self,
    ) -> impl ExactSizeIterator<Item = &'a [T]> + DoubleEndedIterator + use<'a, T> {
        let cells = self.cells;
        let window = self.window;
        let width = self.width();
        (0..self.height()).map(move |row| {
            let start = buffer_index(window.position_of(0, row as i64));
            &cells[start..start + width]
        })
    }

    /// Cells of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_iter(&self, row: i64) -> Iter<'a, T> {
        self.row_span(self.row_begin(row), self.row_end(row)).iter()
    }

    /// Cells of a window column, bottom to top
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_iter(&self, column: i64) -> StepBy<Iter<'a, T>> {
        self.column_span(self.column_begin(column), self.column_end(column))
    }

    /// Cells from `begin` up to but excluding `end`
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside the parent buffer or `end` precedes `begin`
    pub fn row_span(&self, begin: RowCursor, end: RowCursor) -> &'a [T] {
        let cells = self.cells;
        &cells[buffer_index(begin.position())..buffer_index(end.position())]
    }

    /// Column cells from `begin` up to but excluding `end`
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside the parent buffer
    pub fn column_span(&self, begin: ColumnCursor, end: ColumnCursor) -> StepBy<Iter<'a, T>> {
        let count = begin.distance_to(end).max(0) as usize;
        strided(
            self.cells,
            buffer_index(begin.position()),
            count,
            begin.stride() as usize,
        )
    }

    /// First cell of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_front(&self, row: i64) -> &'a T {
        self.cell(0, row)
    }

    /// Last cell of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_back(&self, row: i64) -> &'a T {
        self.cell(self.window.width() - 1, row)
    }

    /// Bottom cell of a window column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_front(&self, column: i64) -> &'a T {
        self.cell(column, 0)
    }

    /// Top cell of a window column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_back(&self, column: i64) -> &'a T {
        self.cell(column, self.window.height() - 1)
    }

    /// Borrow the window as an `ndarray` view of shape `(height, width)`
    ///
    /// The array shares the parent's memory with strides `(stride, 1)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Shape` if the window does not fit inside the
    /// parent buffer
    pub fn as_array(&self) -> Result<ArrayView2<'a, T>> {
        let cells = self.cells;
        let tail = usize::try_from(self.window.start)
            .ok()
            .and_then(|start| cells.get(start..))
            .unwrap_or_default();
        let shape = (self.height(), self.width()).strides((self.stride(), 1));
        Ok(ArrayView2::from_shape(shape, tail)?)
    }
}

impl<'a, T> GridViewMut<'a, T> {
    /// Mutably view the whole grid
    pub fn new(grid: &'a mut Grid2D<T>) -> Self {
        let window = Window::full(grid);
        Self {
            cells: grid.data_mut(),
            window,
        }
    }

    /// Mutably view the window between two inclusive corners in absolute grid coordinates
    pub fn from_corners(
        grid: &'a mut Grid2D<T>,
        bottom_left: Vector2<i64>,
        top_right: Vector2<i64>,
    ) -> Self {
        let window = Window::from_corners(grid, bottom_left, top_right);
        Self {
            cells: grid.data_mut(),
            window,
        }
    }

    /// Mutably view the window spanned by a rectangle's bottom-left and top-right vertices
    pub fn from_rect(grid: &'a mut Grid2D<T>, rect: &Rect<i64>) -> Self {
        Self::from_corners(grid, rect.bottom_left(), rect.top_right())
    }

    window_methods!();

    /// Read-only view of the same window
    pub fn as_view(&self) -> GridView<'_, T> {
        GridView {
            cells: &*self.cells,
            window: self.window,
        }
    }

    /// Unchecked access to the window cell at local `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate maps outside the parent buffer
    pub fn cell(&self, x: i64, y: i64) -> &T {
        &self.cells[buffer_index(self.window.position_of(x, y))]
    }

    /// Unchecked mutable access to the window cell at local `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate maps outside the parent buffer
    pub fn cell_mut(&mut self, x: i64, y: i64) -> &mut T {
        let index = buffer_index(self.window.position_of(x, y));
        &mut self.cells[index]
    }

    /// Cell under a cursor, or `None` if the cursor lies outside the parent buffer
    pub fn get<C: Cursor>(&self, cursor: C) -> Option<&T> {
        cursor.index().and_then(|index| self.cells.get(index))
    }

    /// Mutable cell under a cursor, or `None` if the cursor lies outside the parent buffer
    pub fn get_mut<C: Cursor>(&mut self, cursor: C) -> Option<&mut T> {
        cursor.index().and_then(|index| self.cells.get_mut(index))
    }

    /// Iterate window cells in row-major local order
    pub fn iter(&self) -> ViewIter<'_, T> {
        self.as_view().iter()
    }

    /// Parent cells from the window's first cell through its last
    ///
    /// # Panics
    ///
    /// Panics if the window reaches outside the parent buffer
    fn span_mut(&mut self) -> &mut [T] {
        if self.is_empty() {
            return Default::default();
        }
        let start = buffer_index(self.window.start);
        let end = start + (self.height() - 1) * self.stride() + self.width();
        &mut self.cells[start..end]
    }

    /// Mutably iterate window cells in row-major local order
    ///
    /// # Panics
    ///
    /// Panics if the window reaches outside the parent buffer or is wider
    /// than its parent
    pub fn iter_mut(&mut self) -> ViewIterMut<'_, T> {
        let width = self.width();
        let remaining = self.len();
        let stride = self.stride().max(1);
        ViewIterMut {
            rows: self.span_mut().chunks_mut(stride),
            front: IterMut::default(),
            back: IterMut::default(),
            width,
            remaining,
        }
    }

    /// Mutably iterate window rows as slices, local row 0 first
    ///
    /// # Panics
    ///
    /// Panics if the window reaches outside the parent buffer or is wider
    /// than its parent
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let width = self.width();
        let stride = self.stride().max(1);
        self.span_mut()
            .chunks_mut(stride)
            .map(move |row| window_row(row, width))
    }

    /// Cells of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_iter(&self, row: i64) -> Iter<'_, T> {
        self.as_view().row_iter(row)
    }

    /// Mutable cells of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_iter_mut(&mut self, row: i64) -> IterMut<'_, T> {
        let begin = buffer_index(self.row_begin(row).position());
        let end = buffer_index(self.row_end(row).position());
        self.cells[begin..end].iter_mut()
    }

    /// Cells of a window column, bottom to top
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_iter(&self, column: i64) -> StepBy<Iter<'_, T>> {
        self.as_view().column_iter(column)
    }

    /// Mutable cells of a window column, bottom to top
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_iter_mut(&mut self, column: i64) -> StepBy<IterMut<'_, T>> {
        let start = buffer_index(self.column_begin(column).position());
        let (count, stride) = (self.height(), self.stride());
        strided_mut(self.cells, start, count, stride)
    }

    /// Mutable first cell of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_front_mut(&mut self, row: i64) -> &mut T {
        self.cell_mut(0, row)
    }

    /// Mutable last cell of a window row
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the parent buffer
    pub fn row_back_mut(&mut self, row: i64) -> &mut T {
        let last = self.window.width() - 1;
        self.cell_mut(last, row)
    }

    /// Mutable bottom cell of a window column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_front_mut(&mut self, column: i64) -> &mut T {
        self.cell_mut(column, 0)
    }

    /// Mutable top cell of a window column
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the parent buffer
    pub fn column_back_mut(&mut self, column: i64) -> &mut T {
        let last = self.window.height() - 1;
        self.cell_mut(column, last)
    }

    /// Assign `value` to every window cell
    ///
    /// # Panics
    ///
    /// Panics if the window reaches outside the parent buffer or is wider
    /// than its parent
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for row in self.rows_mut() {
            row.fill(value.clone());
        }
    }
}

impl<T> Index<(i64, i64)> for GridView<'_, T> {
    type Output = T;

    fn index(&self, (x, y): (i64, i64)) -> &T {
        self.cell(x, y)
    }
}

impl<T> Index<(i64, i64)> for GridViewMut<'_, T> {
    type Output = T;

    fn index(&self, (x, y): (i64, i64)) -> &T {
        self.cell(x, y)
    }
}

impl<T> IndexMut<(i64, i64)> for GridViewMut<'_, T> {
    fn index_mut(&mut self, (x, y): (i64, i64)) -> &mut T {
        self.cell_mut(x, y)
    }
}

impl_cursor_index!(GridView<'_>);
impl_cursor_index!(GridViewMut<'_>);
impl_cursor_index_mut!(GridViewMut<'_>);

impl<'a, T> From<&'a Grid2D<T>> for GridView<'a, T> {
    fn from(grid: &'a Grid2D<T>) -> Self {
        Self::new(grid)
    }
}

impl<'a, T> From<&'a mut Grid2D<T>> for GridViewMut<'a, T> {
    fn from(grid: &'a mut Grid2D<T>) -> Self {
        Self::new(grid)
    }
}

impl<'a, T> IntoIterator for GridView<'a, T> {
    type Item = &'a T;
    type IntoIter = ViewIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &GridView<'a, T> {
    type Item = &'a T;
    type IntoIter = ViewIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GridViewMut<'_, T> {
    type Item = &'a mut T;
    type IntoIter = ViewIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Row-major iterator over the cells of a window
///
/// # Panics
///
/// Yielding a window cell that lies outside the parent buffer panics, as
/// [`GridView::cell`] does.
#[derive(Debug, Clone)]
pub struct ViewIter<'a, T> {
    cells: &'a [T],
    window: Window,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for ViewIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let index = self.window.index_of(self.front);
        self.front += 1;
        let cells = self.cells;
        Some(&cells[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for ViewIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let cells = self.cells;
        Some(&cells[self.window.index_of(self.back)])
    }
}

impl<T> ExactSizeIterator for ViewIter<'_, T> {}

impl<T> FusedIterator for ViewIter<'_, T> {}

/// Window-wide prefix of a parent row chunk
///
/// # Panics
///
/// Panics if the chunk is narrower than the window
fn window_row<T>(row: &mut [T], width: usize) -> &mut [T] {
    &mut row[..width]
}

/// Mutable row-major iterator over the cells of a window
///
/// Rows are split off the parent span from both ends, so the iterator is
/// double-ended and knows its exact length.
#[derive(Debug)]
pub struct ViewIterMut<'a, T> {
    rows: ChunksMut<'a, T>,
    front: IterMut<'a, T>,
    back: IterMut<'a, T>,
    width: usize,
    remaining: usize,
}

impl<'a, T> Iterator for ViewIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(cell) = self.front.next() {
                self.remaining -= 1;
                return Some(cell);
            }
            match self.rows.next() {
                Some(row) => self.front = window_row(row, self.width).iter_mut(),
                None => {
                    let cell = self.back.next()?;
                    self.remaining -= 1;
                    return Some(cell);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for ViewIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cell) = self.back.next_back() {
                self.remaining -= 1;
                return Some(cell);
            }
            match self.rows.next_back() {
                Some(row) => self.back = window_row(row, self.width).iter_mut(),
                None => {
                    let cell = self.front.next_back()?;
                    self.remaining -= 1;
                    return Some(cell);
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for ViewIterMut<'_, T> {}

impl<T> FusedIterator for ViewIterMut<'_, T> {}
