//! Tests for crate constants and their use as construction defaults

#[cfg(test)]
mod tests {
    use offset_grid::Grid2D;
    use offset_grid::configuration::{DEFAULT_ORIGIN, OUT_OF_RANGE_LABEL};

    // Grids built without an origin use the default origin on both axes
    // Verified by constructing with a literal origin of (1, 1)
    #[test]
    fn test_default_origin_applies_to_plain_constructors() {
        let grid = Grid2D::<u8>::new(3, 4);
        assert_eq!(grid.origin().x, DEFAULT_ORIGIN);
        assert_eq!(grid.origin().y, DEFAULT_ORIGIN);

        let flat = Grid2D::from_flat(vec![1, 2, 3, 4], 2);
        assert_eq!(flat.origin().x, DEFAULT_ORIGIN);

        let nested = Grid2D::from_rows([[1, 2], [3, 4]]);
        assert_eq!(nested.origin().y, DEFAULT_ORIGIN);
    }

    // Out-of-range errors carry the fixed label
    // Verified by formatting the error without its label
    #[test]
    fn test_out_of_range_label_is_reported() {
        let grid = Grid2D::<u8>::new(2, 2);
        let message = grid
            .at((5, 5))
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert!(message.starts_with(OUT_OF_RANGE_LABEL), "{message}");
    }
}
