//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use offset_grid::{GridError, Vector2};
    use std::error::Error;

    // Tests OutOfRange formatting includes label and coordinate
    // Verified by omitting the coordinate from the message
    #[test]
    fn test_out_of_range_error_message() {
        let error = GridError::out_of_range(Vector2::new(-3, 12));

        let message = error.to_string();
        assert!(message.contains("2D grid"));
        assert!(message.contains("(-3, 12)"));
        assert!(error.source().is_none());
    }

    // Tests unrepresentable coordinates report without a position
    // Verified by formatting a placeholder coordinate
    #[test]
    fn test_unrepresentable_error_message() {
        let error = GridError::unrepresentable();

        assert!(matches!(
            error,
            GridError::OutOfRange {
                coordinate: None,
                ..
            }
        ));
        assert!(error.to_string().contains("not representable"));
    }

    // Tests shape errors chain to the ndarray source
    // Verified by returning None from source()
    #[test]
    fn test_shape_error_source_chain() {
        let result = ndarray::Array2::from_shape_vec((2, 2), vec![1, 2, 3]);
        assert!(result.is_err());

        if let Err(shape_error) = result {
            let error = GridError::from(shape_error);

            assert!(matches!(error, GridError::Shape { .. }));
            assert!(error.source().is_some());
            assert!(error.to_string().starts_with("Array shape error"));
        }
    }
}
