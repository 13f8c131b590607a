//! Coordinate value type and the conversions accepted at the grid boundary

use num_traits::ToPrimitive;
use std::ops::{Add, Sub};

/// Two-component value with named axes
///
/// Used for absolute grid coordinates (`Vector2<i64>`), grid extents
/// (`Vector2<usize>`) and rectangle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2<T> {
    /// Horizontal component
    pub x: T,
    /// Vertical component
    pub y: T,
}

impl<T> Vector2<T> {
    /// Create a vector from its components
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(vector: Vector2<T>) -> Self {
        (vector.x, vector.y)
    }
}

/// Anything that names an absolute grid coordinate
///
/// Implemented for `(x, y)` tuples, `[x, y]` arrays and [`Vector2`] of any
/// primitive numeric type. Fractional components truncate toward zero.
pub trait GridIndex {
    /// Absolute coordinate, or `None` when a component does not fit in `i64`
    fn grid_coordinate(&self) -> Option<Vector2<i64>>;
}

impl<A: ToPrimitive, B: ToPrimitive> GridIndex for (A, B) {
    fn grid_coordinate(&self) -> Option<Vector2<i64>> {
        Some(Vector2::new(self.0.to_i64()?, self.1.to_i64()?))
    }
}

impl<T: ToPrimitive> GridIndex for [T; 2] {
    fn grid_coordinate(&self) -> Option<Vector2<i64>> {
        let [x, y] = self;
        Some(Vector2::new(x.to_i64()?, y.to_i64()?))
    }
}

impl<T: ToPrimitive> GridIndex for Vector2<T> {
    fn grid_coordinate(&self) -> Option<Vector2<i64>> {
        Some(Vector2::new(self.x.to_i64()?, self.y.to_i64()?))
    }
}

impl<I: GridIndex + ?Sized> GridIndex for &I {
    fn grid_coordinate(&self) -> Option<Vector2<i64>> {
        (**self).grid_coordinate()
    }
}
