//! Assertion helpers for verifying the lens laws in tests.
//!
//! The operational API never checks law compliance: a malformed
//! getter/setter pair simply produces wrong results. These helpers make
//! the contract checkable from a test suite. Each panics with a
//! descriptive message when its law is violated and does nothing to
//! repair the lens.
//!
//! They are plain generic functions, so they work both in ordinary
//! `#[test]` functions and inside `proptest!` property blocks.
//!
//! # Example
//!
//! ```
//! use focal::lens;
//! use focal::optics::laws::assert_lens_laws;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Booking { num_seats: u32 }
//!
//! let seats_lens = lens!(Booking, num_seats);
//! assert_lens_laws(&seats_lens, Booking { num_seats: 2 }, 3, 4);
//! ```

use super::Lens;
use std::fmt::Debug;

/// Asserts the GetPut law: setting back the value read from the source
/// reproduces the source.
///
/// # Panics
///
/// Panics if `lens.set(source, lens.get(&source).clone())` differs from
/// `source`.
pub fn assert_get_put<S, A, L>(lens: &L, source: S)
where
    L: Lens<S, A>,
    S: Clone + PartialEq + Debug,
    A: Clone,
{
    let original = source.clone();
    let current = lens.get(&source).clone();
    let result = lens.set(source, current);
    assert_eq!(
        result, original,
        "GetPut law violated: setting the value read from the source must reproduce the source"
    );
}

/// Asserts the PutGet law: getting after a set yields exactly the value
/// that was set.
///
/// # Panics
///
/// Panics if `lens.get(&lens.set(source, value))` differs from `value`.
pub fn assert_put_get<S, A, L>(lens: &L, source: S, value: A)
where
    L: Lens<S, A>,
    A: Clone + PartialEq + Debug,
{
    let updated = lens.set(source, value.clone());
    assert_eq!(
        lens.get(&updated),
        &value,
        "PutGet law violated: getting after a set must yield the set value"
    );
}

/// Asserts the PutPut law: of two consecutive sets, only the second one
/// is observable.
///
/// # Panics
///
/// Panics if `lens.set(lens.set(source, first), second)` differs from
/// `lens.set(source, second)`.
pub fn assert_put_put<S, A, L>(lens: &L, source: S, first: A, second: A)
where
    L: Lens<S, A>,
    S: Clone + PartialEq + Debug,
    A: Clone,
{
    let twice = lens.set(lens.set(source.clone(), first), second.clone());
    let once = lens.set(source, second);
    assert_eq!(
        twice, once,
        "PutPut law violated: a second set must fully override the first"
    );
}

/// Asserts all three lens laws against one source and two distinct
/// replacement values.
///
/// # Panics
///
/// Panics if any of the GetPut, PutGet, or PutPut laws is violated.
pub fn assert_lens_laws<S, A, L>(lens: &L, source: S, first: A, second: A)
where
    L: Lens<S, A>,
    S: Clone + PartialEq + Debug,
    A: Clone + PartialEq + Debug,
{
    assert_get_put(lens, source.clone());
    assert_put_get(lens, source.clone(), first.clone());
    assert_put_put(lens, source, first, second);
}
