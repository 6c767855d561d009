//! Standard lenses that are commonly used.
//!
//! Pre-defined lenses for the identity and for tuple components.

use super::{FunctionLens, Lens};

/// Creates an identity lens: the whole source is the focused field.
///
/// The identity lens is the unit of [`Lens::and_then`]: composing it on
/// either side of another lens changes nothing observable.
///
/// - `get` returns the source itself
/// - `set` replaces the source wholesale
///
/// # Type Parameters
///
/// - `T`: The type to create an identity lens for
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, lens_identity};
///
/// let identity = lens_identity::<i32>();
///
/// assert_eq!(*identity.get(&42), 42);
/// assert_eq!(identity.set(42, 7), 7);
/// ```
#[must_use]
pub fn lens_identity<T>() -> impl Lens<T, T> + Clone {
    FunctionLens::new(|source: &T| source, |_: T, value: T| value)
}

/// Creates a lens focusing on the first component of a 2-tuple.
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, lens_first};
///
/// let first = lens_first::<i32, String>();
///
/// let pair = (42, "hello".to_string());
/// assert_eq!(*first.get(&pair), 42);
///
/// let replaced = first.set(pair, 7);
/// assert_eq!(replaced, (7, "hello".to_string()));
/// ```
#[must_use]
pub fn lens_first<A, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(
        |pair: &(A, B)| &pair.0,
        |pair: (A, B), value: A| (value, pair.1),
    )
}

/// Creates a lens focusing on the second component of a 2-tuple.
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, lens_second};
///
/// let second = lens_second::<i32, String>();
///
/// let pair = (42, "hello".to_string());
/// assert_eq!(*second.get(&pair), "hello");
///
/// let replaced = second.set(pair, "goodbye".to_string());
/// assert_eq!(replaced, (42, "goodbye".to_string()));
/// ```
#[must_use]
pub fn lens_second<A, B>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(
        |pair: &(A, B)| &pair.1,
        |pair: (A, B), value: B| (pair.0, value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_identity_get() {
        let identity = lens_identity::<String>();
        let source = "unchanged".to_string();
        assert_eq!(*identity.get(&source), "unchanged");
    }

    #[test]
    fn test_lens_identity_set_replaces_wholesale() {
        let identity = lens_identity::<i32>();
        assert_eq!(identity.set(1, 2), 2);
    }

    #[test]
    fn test_lens_first_and_second() {
        let first = lens_first::<i32, i32>();
        let second = lens_second::<i32, i32>();

        let pair = (1, 2);
        assert_eq!(*first.get(&pair), 1);
        assert_eq!(*second.get(&pair), 2);
        assert_eq!(first.set(pair, 10), (10, 2));
    }

    #[test]
    fn test_tuple_lenses_compose() {
        let nested = ((1, 2), 3);
        let outer = lens_first::<(i32, i32), i32>();
        let inner = lens_second::<i32, i32>();
        let composed = outer.and_then(inner);

        assert_eq!(*composed.get(&nested), 2);
        assert_eq!(composed.set(nested, 20), ((1, 20), 3));
    }
}
