//! Tests for coordinate vectors and the index forms accepted by grids

#[cfg(test)]
mod tests {
    use offset_grid::{GridIndex, Vector2};

    // Tests component-wise arithmetic
    #[test]
    fn test_vector_arithmetic() {
        let sum = Vector2::new(3, -4) + Vector2::new(1, 10);
        let difference = Vector2::new(3, -4) - Vector2::new(1, 10);

        assert_eq!(sum, Vector2::new(4, 6));
        assert_eq!(difference, Vector2::new(2, -14));
    }

    // Tests conversions between tuples, arrays and vectors
    #[test]
    fn test_vector_conversions() {
        let from_tuple = Vector2::from((2, 5));
        let from_array = Vector2::from([2, 5]);
        let tuple: (i32, i32) = from_array.into();

        assert_eq!(from_tuple, from_array);
        assert_eq!(tuple, (2, 5));
    }

    // Tests every index form resolves to the same coordinate
    // Verified by swapping components in the array implementation
    #[test]
    fn test_index_forms_agree() {
        let expected = Some(Vector2::new(-7_i64, 12));

        assert_eq!((-7, 12).grid_coordinate(), expected);
        assert_eq!([-7, 12].grid_coordinate(), expected);
        assert_eq!(Vector2::new(-7_i16, 12).grid_coordinate(), expected);
        assert_eq!(resolve(&(-7_i64, 12_u8)), expected);
    }

    fn resolve<I: GridIndex>(index: I) -> Option<Vector2<i64>> {
        index.grid_coordinate()
    }

    // Tests unrepresentable components yield no coordinate
    // Verified by saturating instead of rejecting large values
    #[test]
    fn test_unrepresentable_components() {
        assert_eq!((u64::MAX, 0_u64).grid_coordinate(), None);
        assert_eq!([0.0, f64::NAN].grid_coordinate(), None);
    }

    // Tests fractional components truncate toward zero
    #[test]
    fn test_fractional_components_truncate() {
        assert_eq!(
            (2.9_f32, -1.5_f32).grid_coordinate(),
            Some(Vector2::new(2, -1))
        );
    }
}
