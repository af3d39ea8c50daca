//! The `pipe!` and `chain!` macros.
//!
//! [`pipe!`] applies stages to a value from left to right; [`chain!`] builds
//! the composite stage without applying it.

/// Pipes a value through a series of stages from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h.apply(g.apply(f.apply(x)))`.
///
/// # Relationship with chain!
///
/// `pipe!(x, f, g, h)` is equivalent to `chain!(f, g, h).apply(x)`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f.apply(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g.apply(f.apply(x))`
///
/// # Examples
///
/// ```
/// use pipes::prelude::*;
///
/// #[derive(Clone, Debug)]
/// struct Ingredient {
///     name: &'static str,
///     quantity: usize,
/// }
///
/// let standard = vec![
///     Ingredient { name: "patty", quantity: 1 },
///     Ingredient { name: "pickles", quantity: 5 },
///     Ingredient { name: "lettuce", quantity: 2 },
/// ];
///
/// let order = pipe!(
///     standard,
///     filter(|ingredient: &Ingredient| ingredient.name == "pickles"),
///     map(|mut ingredient: Ingredient| {
///         ingredient.quantity *= 2;
///         ingredient
///     }),
///     sort_by_key(|ingredient: &Ingredient| ingredient.quantity),
///     map(|ingredient: Ingredient| format!("{}({})", ingredient.name, ingredient.quantity)),
///     reduce(|left: String, right: String| format!("{left}\n{right}")),
/// );
///
/// assert_eq!(order, "pickles(10)");
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single stage: apply it
    ($value:expr, $operation:expr $(,)?) => {
        $crate::pipe::Operation::apply(&$operation, $value)
    };

    // Multiple stages: apply left to right recursively
    ($value:expr, $operation:expr, $($remaining_operations:expr),+ $(,)?) => {
        $crate::pipe!(
            $crate::pipe::Operation::apply(&$operation, $value),
            $($remaining_operations),+
        )
    };
}

/// Composes stages left to right into one reusable stage.
///
/// `chain!(f, g, h)` is `f.and_then(g).and_then(h)`: applying it runs `f`
/// first and `h` last.
///
/// # Examples
///
/// ```
/// use pipes::prelude::*;
///
/// let shout = chain!(
///     filter(|word: &&str| !word.is_empty()),
///     map(|word: &str| word.to_uppercase()),
///     reduce(|left: String, right: String| format!("{left} {right}")),
/// );
///
/// assert_eq!(shout.apply(vec!["hello", "", "world"]), "HELLO WORLD");
/// assert_eq!(shout.apply(vec!["again"]), "AGAIN");
/// ```
#[macro_export]
macro_rules! chain {
    // Single stage: returned as is
    ($operation:expr $(,)?) => {
        $operation
    };

    // Two or more stages: the first runs first
    ($first_operation:expr, $($remaining_operations:expr),+ $(,)?) => {
        $crate::pipe::Compose::and_then(
            $first_operation,
            $crate::chain!($($remaining_operations),+),
        )
    };
}
