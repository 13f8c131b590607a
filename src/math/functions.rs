/// Transform only the items that satisfy a predicate
///
/// Every item of `input` for which `predicate` holds is passed to
/// `operation` and the result appended to `output`, preserving order.
/// Returns the number of items written.
pub fn transform_if<I, O, U, F, P>(
    input: I,
    output: &mut O,
    mut operation: F,
    mut predicate: P,
) -> usize
where
    I: IntoIterator,
    O: Extend<U>,
    F: FnMut(I::Item) -> U,
    P: FnMut(&I::Item) -> bool,
{
    let mut written = 0;
    output.extend(input.into_iter().filter(|item| predicate(item)).map(|item| {
        written += 1;
        operation(item)
    }));
    written
}
