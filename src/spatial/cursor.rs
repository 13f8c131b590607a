//! Copyable buffer positions for row, column and window traversal
//!
//! A cursor is a position in a row-major buffer plus the stride it moves by.
//! Cursors hold no borrow: the grid or view that produced one dereferences it
//! through `Index`/`IndexMut` or `get`/`get_mut`, so writes made through one
//! cursor are visible through every other cursor on the same buffer. A cursor
//! may sit one step past either end of a span, matching the half-open
//! `begin..end` convention. Equality compares buffer positions only.

// Cursor dereference and strided spans index the buffer directly
#![allow(clippy::indexing_slicing)]

use std::hash::{Hash, Hasher};
use std::iter::StepBy;
use std::ops::{Add, Sub};
use std::slice::{Iter, IterMut};

/// Position shared by every cursor kind
pub trait Cursor: Copy {
    /// Signed buffer position; negative values lie before the buffer start
    fn position(self) -> isize;

    /// Buffer index, or `None` when the cursor lies before the buffer start
    fn index(self) -> Option<usize> {
        usize::try_from(self.position()).ok()
    }
}

/// Cursor walking one row with stride 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowCursor {
    position: isize,
}

impl RowCursor {
    pub(crate) const fn new(position: isize) -> Self {
        Self { position }
    }

    /// Cursor one cell to the right
    #[must_use]
    pub const fn next_cell(self) -> Self {
        Self::new(self.position + 1)
    }

    /// Cursor one cell to the left
    #[must_use]
    pub const fn prev_cell(self) -> Self {
        Self::new(self.position - 1)
    }

    /// Step this cursor one cell to the right
    pub const fn advance(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Step this cursor one cell to the left
    pub const fn retreat(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    /// Number of steps from this cursor to `other`
    pub const fn distance_to(self, other: Self) -> isize {
        other.position - self.position
    }
}

impl Cursor for RowCursor {
    fn position(self) -> isize {
        self.position
    }
}

impl Add<isize> for RowCursor {
    type Output = Self;

    fn add(self, offset: isize) -> Self {
        Self::new(self.position + offset)
    }
}

impl Sub<isize> for RowCursor {
    type Output = Self;

    fn sub(self, offset: isize) -> Self {
        Self::new(self.position - offset)
    }
}

/// Cursor walking one column, advancing a full buffer row per step
#[derive(Debug, Clone, Copy)]
pub struct ColumnCursor {
    position: isize,
    stride: isize,
}

impl ColumnCursor {
    pub(crate) const fn new(position: isize, stride: isize) -> Self {
        Self { position, stride }
    }

    /// Buffer elements between vertically adjacent cells
    pub const fn stride(self) -> isize {
        self.stride
    }

    /// Cursor one row up
    #[must_use]
    pub const fn next_cell(self) -> Self {
        Self::new(self.position + self.stride, self.stride)
    }

    /// Cursor one row down
    #[must_use]
    pub const fn prev_cell(self) -> Self {
        Self::new(self.position - self.stride, self.stride)
    }

    /// Step this cursor one row up
    pub const fn advance(&mut self) -> &mut Self {
        self.position += self.stride;
        self
    }

    /// Step this cursor one row down
    pub const fn retreat(&mut self) -> &mut Self {
        self.position -= self.stride;
        self
    }

    /// Row cursor on the same cell
    pub const fn row(self) -> RowCursor {
        RowCursor::new(self.position)
    }

    /// Number of column steps from this cursor to `other`
    pub const fn distance_to(self, other: Self) -> isize {
        if self.stride == 0 {
            0
        } else {
            (other.position - self.position) / self.stride
        }
    }
}

impl Cursor for ColumnCursor {
    fn position(self) -> isize {
        self.position
    }
}

impl PartialEq for ColumnCursor {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for ColumnCursor {}

impl Hash for ColumnCursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl Add<isize> for ColumnCursor {
    type Output = Self;

    fn add(self, offset: isize) -> Self {
        Self::new(self.position + offset * self.stride, self.stride)
    }
}

impl Sub<isize> for ColumnCursor {
    type Output = Self;

    fn sub(self, offset: isize) -> Self {
        Self::new(self.position - offset * self.stride, self.stride)
    }
}

/// Cursor walking a window in row-major order
///
/// Within a window row it moves by one cell. Stepping past the last column
/// skips the `stride - width` cells outside the window and lands on the first
/// column of the next window row; stepping back is symmetric.
#[derive(Debug, Clone, Copy)]
pub struct ViewCursor {
    position: isize,
    column: isize,
    width: isize,
    stride: isize,
}

impl ViewCursor {
    pub(crate) const fn new(position: isize, column: isize, width: isize, stride: isize) -> Self {
        Self {
            position,
            column,
            width,
            stride,
        }
    }

    /// Window-local column of this cursor
    pub const fn column(self) -> isize {
        self.column
    }

    /// Cursor on the next cell in window order
    #[must_use]
    pub const fn next_cell(self) -> Self {
        let mut cursor = self;
        cursor.advance();
        cursor
    }

    /// Cursor on the previous cell in window order
    #[must_use]
    pub const fn prev_cell(self) -> Self {
        let mut cursor = self;
        cursor.retreat();
        cursor
    }

    /// Step this cursor to the next cell in window order
    pub const fn advance(&mut self) -> &mut Self {
        if self.column == self.width - 1 {
            self.position += self.stride - self.width + 1;
            self.column = 0;
        } else {
            self.position += 1;
            self.column += 1;
        }
        self
    }

    /// Step this cursor to the previous cell in window order
    pub const fn retreat(&mut self) -> &mut Self {
        if self.column == 0 {
            self.position -= self.stride - self.width + 1;
            self.column = self.width - 1;
        } else {
            self.position -= 1;
            self.column -= 1;
        }
        self
    }

    /// Jump `offset` cells in window order without stepping
    ///
    /// Moves `offset / width` whole window rows of parent stride and
    /// `offset % width` cells within the row, carrying across the row edge.
    #[must_use]
    pub const fn offset(self, offset: isize) -> Self {
        if self.width <= 0 {
            return self;
        }
        let local = self.column + offset;
        let rows = local.div_euclid(self.width);
        let column = local.rem_euclid(self.width);
        Self::new(
            self.position - self.column + rows * self.stride + column,
            column,
            self.width,
            self.stride,
        )
    }
}

impl Cursor for ViewCursor {
    fn position(self) -> isize {
        self.position
    }
}

impl PartialEq for ViewCursor {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for ViewCursor {}

impl Hash for ViewCursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl Add<isize> for ViewCursor {
    type Output = Self;

    fn add(self, offset: isize) -> Self {
        self.offset(offset)
    }
}

impl Sub<isize> for ViewCursor {
    type Output = Self;

    fn sub(self, offset: isize) -> Self {
        self.offset(-offset)
    }
}

/// Buffer index of a cursor position
///
/// Negative positions wrap to an index no buffer can hold, so dereferencing a
/// cursor before the buffer start panics like any other out-of-buffer index.
pub(crate) const fn buffer_index(position: isize) -> usize {
    position as usize
}

/// `count` cells from `start`, `stride` apart
pub(crate) fn strided<T>(
    cells: &[T],
    start: usize,
    count: usize,
    stride: usize,
) -> StepBy<Iter<'_, T>> {
    let stride = stride.max(1);
    let end = if count == 0 {
        start
    } else {
        start + (count - 1) * stride + 1
    };
    cells[start..end].iter().step_by(stride)
}

/// Mutable counterpart of [`strided`]
pub(crate) fn strided_mut<T>(
    cells: &mut [T],
    start: usize,
    count: usize,
    stride: usize,
) -> StepBy<IterMut<'_, T>> {
    let stride = stride.max(1);
    let end = if count == 0 {
        start
    } else {
        start + (count - 1) * stride + 1
    };
    cells[start..end].iter_mut().step_by(stride)
}

/// Implements `Index` for every cursor kind on a container with a `cells` buffer
macro_rules! impl_cursor_index {
    (@one $container:ident [$($lt:lifetime)?] $cursor:ty) => {
        impl<T> std::ops::Index<$cursor> for $container<$($lt,)? T> {
            type Output = T;

            fn index(&self, cursor: $cursor) -> &T {
                &self.cells[$crate::spatial::cursor::buffer_index(
                    $crate::spatial::cursor::Cursor::position(cursor),
                )]
            }
        }
    };
    ($container:ident $(<$lt:lifetime>)?) => {
        $crate::spatial::cursor::impl_cursor_index!(
            @one $container [$($lt)?] $crate::spatial::cursor::RowCursor
        );
        $crate::spatial::cursor::impl_cursor_index!(
            @one $container [$($lt)?] $crate::spatial::cursor::ColumnCursor
        );
        $crate::spatial::cursor::impl_cursor_index!(
            @one $container [$($lt)?] $crate::spatial::cursor::ViewCursor
        );
    };
}

/// Implements `IndexMut` for every cursor kind on a container with a mutable `cells` buffer
macro_rules! impl_cursor_index_mut {
    (@one $container:ident [$($lt:lifetime)?] $cursor:ty) => {
        impl<T> std::ops::IndexMut<$cursor> for $container<$($lt,)? T> {
            fn index_mut(&mut self, cursor: $cursor) -> &mut T {
                &mut self.cells[$crate::spatial::cursor::buffer_index(
                    $crate::spatial::cursor::Cursor::position(cursor),
                )]
            }
        }
    };
    ($container:ident $(<$lt:lifetime>)?) => {
        $crate::spatial::cursor::impl_cursor_index_mut!(
            @one $container [$($lt)?] $crate::spatial::cursor::RowCursor
        );
        $crate::spatial::cursor::impl_cursor_index_mut!(
            @one $container [$($lt)?] $crate::spatial::cursor::ColumnCursor
        );
        $crate::spatial::cursor::impl_cursor_index_mut!(
            @one $container [$($lt)?] $crate::spatial::cursor::ViewCursor
        );
    };
}

pub(crate) use impl_cursor_index;
pub(crate) use impl_cursor_index_mut;
