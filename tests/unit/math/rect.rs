//! Tests for rectangle corners, overlap and measurements

#[cfg(test)]
mod tests {
    use offset_grid::{Rect, Vector2};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < f32::EPSILON
    }

    // Tests corners of a rectangle straddling the origin
    // Verified by swapping the top and bottom corners
    #[test]
    fn test_corners() {
        let rect = Rect::from_parts(-5, -5, 10, 10);

        assert_eq!(rect.top_left(), Vector2::new(-5, 5));
        assert_eq!(rect.top_right(), Vector2::new(5, 5));
        assert_eq!(rect.bottom_left(), Vector2::new(-5, -5));
        assert_eq!(rect.bottom_right(), Vector2::new(5, -5));
        assert_eq!(
            rect.vertices(),
            [
                rect.top_left(),
                rect.top_right(),
                rect.bottom_right(),
                rect.bottom_left()
            ]
        );
    }

    // Tests overlap near the far corner
    // Verified by using strict comparisons for the edges
    #[test]
    fn test_overlap_by_distance() {
        let rect = Rect::from_parts(0, 0, 10, 10);

        assert!(rect.is_overlapping(&Rect::from_parts(9, 9, 10, 10)));
        assert!(!rect.is_overlapping(&Rect::from_parts(11, 11, 10, 10)));
        assert!(!rect.is_overlapping(&Rect::from_parts(0, 11, 10, 10)));
    }

    // Tests rectangles touching on edges or corners overlap
    #[test]
    fn test_overlap_on_edges() {
        let rect = Rect::from_parts(0, 0, 10, 10);

        for offset in [
            Vector2::new(10, 0),
            Vector2::new(-10, 0),
            Vector2::new(0, 10),
            Vector2::new(0, -10),
            Vector2::new(10, 10),
            Vector2::new(-10, -10),
            Vector2::new(10, -10),
            Vector2::new(-10, 10),
        ] {
            let other = Rect::new(offset, Vector2::new(10, 10));
            assert!(rect.is_overlapping(&other), "{offset:?}");
            assert!(other.is_overlapping(&rect), "{offset:?}");
        }
    }

    // Tests inclusive point containment
    #[test]
    fn test_contains_point() {
        let rect = Rect::from_parts(0, 0, 2, 2);

        assert!(rect.contains_point(Vector2::new(0, 0)));
        assert!(rect.contains_point(Vector2::new(2, 2)));
        assert!(rect.contains_point(Vector2::new(1, 2)));
        assert!(!rect.contains_point(Vector2::new(3, 1)));
        assert!(!rect.contains_point(Vector2::new(1, -1)));
    }

    // Tests midpoint for positive and negative positions
    #[test]
    fn test_midpoint() {
        let positive = Rect::from_parts(10, 14, 10, 10).midpoint();
        let negative = Rect::from_parts(-10, -14, 10, 10).midpoint();

        assert!(close(positive.x, 15.0) && close(positive.y, 19.0));
        assert!(close(negative.x, -5.0) && close(negative.y, -9.0));
    }

    // Tests area from size alone
    #[test]
    fn test_area() {
        assert!(close(Rect::from_parts(3, 4, 10, 10).area(), 100.0));
        assert!(close(Rect::from_size(10, 5).area(), 50.0));
        assert!(close(Rect::from_size(2.5_f32, 4.0).area(), 10.0));
    }

    // Tests position and size can be moved in place
    #[test]
    fn test_mutable_parts() {
        let mut rect = Rect::from_size(4, 4);
        *rect.position_mut() = Vector2::new(1, 2);
        rect.size_mut().x = 6;

        assert_eq!(rect.position(), Vector2::new(1, 2));
        assert_eq!(rect.size(), Vector2::new(6, 4));
        assert_eq!(rect.top_right(), Vector2::new(7, 6));
    }
}
