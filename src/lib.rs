//! Dense 2D grids addressed through an offset origin
//!
//! A [`Grid2D`] owns a row-major buffer and maps absolute `(x, y)` coordinates
//! onto it through its origin. Rows, columns and rectangular windows of the
//! buffer are traversed with copyable cursors or borrowing iterators, and
//! [`GridView`]/[`GridViewMut`] borrow a sub-region using the parent's stride.

#![forbid(unsafe_code)]

/// Crate-wide constants
pub mod configuration;
/// Error handling for checked grid access
pub mod error;
/// Rectangles, scalar ranges and iterator helpers
pub mod math;
/// Grids, coordinates, cursors and views
pub mod spatial;

pub use error::{GridError, Result};
pub use math::{Range, Rect};
pub use spatial::{
    ColumnCursor, GridBounds, GridIndex, GridParameters, RowCursor, Vector2, ViewCursor,
    grid::Grid2D,
    view::{GridView, GridViewMut},
};
