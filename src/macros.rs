/// Builds a [`crate::Value`] from a literal-like expression.
///
/// `null` maps to `Value::Absent` (the same convention the JSON side uses);
/// bracketed lists nest arbitrarily; any other expression goes through
/// `Value::from`.
///
/// # Examples
///
/// ```rust
/// use fcfg::{fcfg, Value};
///
/// assert_eq!(fcfg!(null), Value::Absent);
/// assert_eq!(fcfg!([1, [2, 3]]),
///            Value::List(vec![
///                Value::Integer(1),
///                Value::List(vec![Value::Integer(2), Value::Integer(3)]),
///            ]));
/// ```
#[macro_export]
macro_rules! fcfg {
    // Handle null (absent value)
    (null) => {
        $crate::Value::Absent
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::fcfg!($elem)),*])
    };

    // Fallback: anything with a From impl (integers, floats, strings, bools)
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
