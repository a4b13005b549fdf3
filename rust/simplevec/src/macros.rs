/// Creates a [`SimpleVector`](crate::SimpleVector) from a list of elements,
/// in the manner of `vec!`.
///
/// - `simple_vector![a, b, c]` holds the given elements, with capacity equal to
///   their count.
/// - `simple_vector![value; n]` holds `n` clones of `value`.
///
/// ```
/// use simplevec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
///
/// let z = simple_vector![0u8; 4];
/// assert_eq!(z.len(), 4);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, &$value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($item),+])
    };
}
