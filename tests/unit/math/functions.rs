//! Tests for filtered transformation into an output collection

#[cfg(test)]
mod tests {
    use offset_grid::math::functions::transform_if;

    // Tests only matching items are transformed, in order
    // Verified by transforming before filtering
    #[test]
    fn test_transform_if_doubles_odd_values() {
        let mut output = Vec::new();
        let written = transform_if(0..10, &mut output, |value| value * 2, |value| value % 2 == 1);

        assert_eq!(output, [2, 6, 10, 14, 18]);
        assert_eq!(written, 5);
    }

    // Tests existing output is extended rather than replaced
    #[test]
    fn test_transform_if_appends() {
        let mut output = vec![String::from("keep")];
        let words = ["a", "bb", "ccc"];
        let written = transform_if(
            words,
            &mut output,
            str::to_uppercase,
            |word| word.len() > 1,
        );

        assert_eq!(written, 2);
        assert_eq!(output, ["keep", "BB", "CCC"]);
    }

    // Tests no output when nothing matches
    #[test]
    fn test_transform_if_no_matches() {
        let mut output: Vec<i32> = Vec::new();
        let written = transform_if([1, 3, 5], &mut output, |value| value + 1, |_| false);

        assert_eq!(written, 0);
        assert!(output.is_empty());
    }
}
