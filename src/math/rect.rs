//! Axis-aligned rectangle anchored at its bottom-left corner
//!
//! Edges are inclusive: a rectangle at `(0, 0)` of size `(2, 2)` covers
//! both `(0, 0)` and `(2, 2)`.

use num_traits::{Num, ToPrimitive};
use std::ops::Add;

use crate::spatial::coordinate::{GridIndex, Vector2};

/// Rectangle described by its bottom-left position and its size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    position: Vector2<T>,
    size: Vector2<T>,
}

impl<T: Copy> Rect<T> {
    /// Create a rectangle from its position and size
    pub const fn new(position: Vector2<T>, size: Vector2<T>) -> Self {
        Self { position, size }
    }

    /// Create a rectangle from scalar position and size components
    pub const fn from_parts(position_x: T, position_y: T, size_x: T, size_y: T) -> Self {
        Self::new(
            Vector2::new(position_x, position_y),
            Vector2::new(size_x, size_y),
        )
    }

    /// Bottom-left position
    pub const fn position(&self) -> Vector2<T> {
        self.position
    }

    /// Mutable bottom-left position
    pub const fn position_mut(&mut self) -> &mut Vector2<T> {
        &mut self.position
    }

    /// Extents along each axis
    pub const fn size(&self) -> Vector2<T> {
        self.size
    }

    /// Mutable extents
    pub const fn size_mut(&mut self) -> &mut Vector2<T> {
        &mut self.size
    }
}

impl<T: Copy + Default> Rect<T> {
    /// Create a rectangle of the given size positioned at the default origin
    pub fn from_size(size_x: T, size_y: T) -> Self {
        Self::new(Vector2::default(), Vector2::new(size_x, size_y))
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// Bottom-left corner
    pub const fn bottom_left(&self) -> Vector2<T> {
        self.position
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Vector2<T> {
        Vector2::new(self.position.x + self.size.x, self.position.y)
    }

    /// Top-left corner
    pub fn top_left(&self) -> Vector2<T> {
        Vector2::new(self.position.x, self.position.y + self.size.y)
    }

    /// Top-right corner
    pub fn top_right(&self) -> Vector2<T> {
        self.position + self.size
    }

    /// Corners ordered top-left, top-right, bottom-right, bottom-left
    pub fn vertices(&self) -> [Vector2<T>; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }
}

impl<T: Copy + Add<Output = T> + PartialOrd> Rect<T> {
    /// Check whether two rectangles share any point, touching edges included
    pub fn is_overlapping(&self, other: &Self) -> bool {
        if self.top_left().x > other.bottom_right().x || other.top_left().x > self.bottom_right().x
        {
            return false;
        }

        !(self.top_left().y < other.bottom_right().y || other.top_left().y < self.bottom_right().y)
    }

    /// Check whether a point lies inside the rectangle or on its edges
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        if point.x < self.top_left().x || point.x > self.top_right().x {
            return false;
        }

        point.y <= self.top_left().y && point.y >= self.bottom_left().y
    }
}

impl<T: Copy + Num + ToPrimitive> Rect<T> {
    /// Centre point
    ///
    /// Half of the size is taken in `T`, so integer rectangles of odd size
    /// round the half toward zero.
    pub fn midpoint(&self) -> Vector2<f32> {
        let two = T::one() + T::one();
        Vector2::new(
            to_f32(self.position.x + self.size.x / two),
            to_f32(self.position.y + self.size.y / two),
        )
    }

    /// Area enclosed by the rectangle
    pub fn area(&self) -> f32 {
        to_f32(self.size.x * self.size.y)
    }
}

fn to_f32<T: ToPrimitive>(value: T) -> f32 {
    value.to_f32().unwrap_or(f32::NAN)
}

impl<T: ToPrimitive> GridIndex for Rect<T> {
    fn grid_coordinate(&self) -> Option<Vector2<i64>> {
        self.position.grid_coordinate()
    }
}
