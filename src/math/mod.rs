//! Small numeric helpers used alongside grids

/// Conditional transform over iterators
pub mod functions;
/// Inclusive scalar range test
pub mod range;
/// Axis-aligned rectangle
pub mod rect;

pub use range::Range;
pub use rect::Rect;
