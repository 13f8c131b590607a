//! Spatial data structures
//!
//! This module contains the grid and everything used to address it:
//! - Coordinate value types and index conversion
//! - Grid shape parameters and derived bounds
//! - Row, column and window cursors
//! - The owning grid and its borrowed views

/// Grid shape parameters and derived bounds
pub mod bounds;
/// Coordinate value type and conversions accepted by checked access
pub mod coordinate;
/// Copyable buffer positions for row, column and window traversal
pub mod cursor;
/// Owning 2D grid with offset-origin coordinates
pub mod grid;
/// Borrowed rectangular windows into a grid
pub mod view;

pub use bounds::{GridBounds, GridParameters};
pub use coordinate::{GridIndex, Vector2};
pub use cursor::{ColumnCursor, RowCursor, ViewCursor};
