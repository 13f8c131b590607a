//! Tests for grid parameters and the half-open bounds derived from them

#[cfg(test)]
mod tests {
    use offset_grid::{GridBounds, GridParameters};

    // Tests bounds edges derive from origin and extents
    // Verified by making right and top inclusive
    #[test]
    fn test_bounds_from_parameters() {
        let parameters = GridParameters::new(100, 200, -50, -50);
        let bounds = parameters.bounds();

        assert_eq!(bounds.top(), 150);
        assert_eq!(bounds.right(), 50);
        assert_eq!(bounds.bottom(), -50);
        assert_eq!(bounds.left(), -50);
        assert_eq!(bounds, GridBounds::from_parameters(&parameters));
    }

    // Tests containment is inclusive on left/bottom and exclusive on right/top
    // Verified by comparing against right and top with <=
    #[test]
    fn test_contains_half_open_edges() {
        let bounds = GridBounds::new(150, 50, -50, -50);

        assert!(bounds.contains(-50, -50));
        assert!(bounds.contains(49, 149));
        assert!(bounds.contains(0, 0));
        assert!(!bounds.contains(50, 0));
        assert!(!bounds.contains(0, 150));
        assert!(!bounds.contains(-51, 0));
        assert!(!bounds.contains(0, -51));
    }

    // Tests empty extents contain no point
    #[test]
    fn test_empty_bounds_contain_nothing() {
        let parameters = GridParameters::new(0, 5, 3, 3);

        assert!(parameters.is_empty());
        assert_eq!(parameters.len(), 0);
        assert!(!parameters.bounds().contains(3, 3));
    }

    // Tests parameter length matches the cell count of the described grid
    #[test]
    fn test_parameters_len() {
        let parameters = GridParameters::new(7, 3, 0, 0);

        assert_eq!(parameters.len(), 21);
        assert!(!parameters.is_empty());
        assert_eq!(GridParameters::default().len(), 0);
    }

    // Tests edges saturate instead of overflowing near the coordinate limit
    // Verified by adding the extents without saturation
    #[test]
    fn test_bounds_saturate_at_coordinate_limit() {
        let parameters = GridParameters::new(10, 4, i64::MAX - 5, i64::MAX - 1);
        let bounds = parameters.bounds();

        assert_eq!(bounds.right(), i64::MAX);
        assert_eq!(bounds.top(), i64::MAX);
        assert!(bounds.contains(i64::MAX - 1, i64::MAX - 1));
        assert!(!bounds.contains(i64::MAX, i64::MAX - 1));

        let lowest = GridParameters::new(0, 0, i64::MIN, i64::MIN).bounds();
        assert!(!lowest.contains(i64::MIN, i64::MIN));
    }
}
