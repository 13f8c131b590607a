/// Closed scalar interval
///
/// The bounds may be given in either order; both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    minimum: T,
    maximum: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// Create a range from its two bounds
    pub const fn new(minimum: T, maximum: T) -> Self {
        Self { minimum, maximum }
    }

    /// Lower bound as given at construction
    pub const fn minimum(&self) -> T {
        self.minimum
    }

    /// Upper bound as given at construction
    pub const fn maximum(&self) -> T {
        self.maximum
    }

    /// Test whether `value` lies between the bounds, inclusive
    pub fn in_range(&self, value: T) -> bool {
        let (low, high) = if self.minimum <= self.maximum {
            (self.minimum, self.maximum)
        } else {
            (self.maximum, self.minimum)
        };
        value >= low && value <= high
    }
}
