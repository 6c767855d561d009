//! The lens core: focusing on a single field within a larger structure.
//!
//! A lens pairs a getter with a setter for one field. The getter borrows
//! the field out of the source; the setter consumes the source and returns
//! a new copy with the field replaced. Both must be pure.
//!
//! # Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! A getter/setter pair that breaks a law produces a lens that silently
//! returns wrong results; nothing is detected at construction or call
//! time. See [`crate::optics::laws`] for test-side verification helpers.
//!
//! # Examples
//!
//! ```
//! use focal::optics::Lens;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { owner: String, balance: i64 }
//!
//! let balance_lens = lens!(Account, balance);
//!
//! let account = Account { owner: "johndoe".to_string(), balance: 100 };
//! assert_eq!(*balance_lens.get(&account), 100);
//!
//! let credited = balance_lens.modify(account, |balance| balance + 50);
//! assert_eq!(credited.balance, 150);
//! assert_eq!(credited.owner, "johndoe");
//! ```

use std::marker::PhantomData;

/// A lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// The source is consumed; every field other than the focused one is
    /// carried over unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// Equivalent to reading the current value, applying the function,
    /// and setting the result, so every lens gains a transform operation
    /// for free.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Booking { num_seats: u32 }
    ///
    /// let seats_lens = lens!(Booking, num_seats);
    /// let booking = Booking { num_seats: 2 };
    /// let extra = seats_lens.modify(booking, |seats| seats + 1);
    /// assert_eq!(extra.num_seats, 3);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Useful when the transformation only needs to look at the current
    /// value; avoids the `A: Clone` bound of [`Lens::modify`].
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Movie { title: String }
    ///
    /// let title_lens = lens!(Movie, title);
    /// let movie = Movie { title: "heat".to_string() };
    /// let shouted = title_lens.modify_ref(movie, |title| title.to_uppercase());
    /// assert_eq!(shouted.title, "HEAT");
    /// ```
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with a lens into the focused field, yielding a
    /// lens that addresses the deeper target directly.
    ///
    /// Given `self: Lens<S, A>` and `other: Lens<A, B>`, the result
    /// behaves as a `Lens<S, B>`:
    ///
    /// - `get(s)` is `other.get(self.get(s))`
    /// - `set(s, b)` is `self.set(s, other.set(self.get(&s).clone(), b))`
    ///
    /// Composition is associative: either grouping of a three-lens chain
    /// produces the same `get` and `set` results.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Movie { title: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Show { movie: Movie }
    ///
    /// let movie_lens = lens!(Show, movie);
    /// let title_lens = lens!(Movie, title);
    /// let show_title = movie_lens.and_then(title_lens);
    ///
    /// let show = Show { movie: Movie { title: "alien".to_string() } };
    /// assert_eq!(*show_title.get(&show), "alien");
    /// ```
    fn and_then<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter and setter function pair.
///
/// This is the primary constructor for lenses; the [`lens!`] macro
/// generates a `FunctionLens` internally. The pair must satisfy the lens
/// laws for the intended domain — that obligation lies with the caller
/// and is never checked at runtime.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { username: String, email: String }
///
/// let username_lens = FunctionLens::new(
///     |user: &User| &user.username,
///     |user: User, username: String| User { username, ..user },
/// );
///
/// let user = User {
///     username: "johndoe".to_string(),
///     email: "jdoe@example.com".to_string(),
/// };
/// assert_eq!(*username_lens.get(&user), "johndoe");
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// Construction cannot fail; a pair that violates the lens laws
    /// produces a lens that yields wrong results, caught only by testing.
    ///
    /// # Arguments
    ///
    /// * `getter` - Borrows the focused field out of the source
    /// * `setter` - Consumes the source and returns a copy with the field
    ///   replaced
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// The composition of two lenses, produced by [`Lens::and_then`].
///
/// Chains an outer lens focusing on an intermediate structure with an
/// inner lens focusing on a field of that structure, so the pair acts as
/// a single lens on the deeper field.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of `L1`, source of `L2`)
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Engine { horsepower: u32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Car { engine: Engine }
///
/// let engine_lens = lens!(Car, engine);
/// let horsepower_lens = lens!(Engine, horsepower);
/// let car_horsepower = engine_lens.and_then(horsepower_lens);
///
/// let car = Car { engine: Engine { horsepower: 280 } };
/// assert_eq!(*car_horsepower.get(&car), 280);
/// ```
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    ///
    /// Prefer [`Lens::and_then`], which infers the intermediate type.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        let intermediate = self.outer.get(source);
        self.inner.get(intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.outer.get(&source).clone();
        let new_intermediate = self.inner.set(intermediate, value);
        self.outer.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// Expands to a [`FunctionLens`](crate::optics::FunctionLens) whose getter
/// borrows the named field and whose setter moves the source and replaces
/// that field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { username: String, email: String }
///
/// let username_lens = lens!(User, username);
///
/// let user = User {
///     username: "johndoe".to_string(),
///     email: "jdoe@example.com".to_string(),
/// };
///
/// // Get
/// assert_eq!(*username_lens.get(&user), "johndoe");
///
/// // Set (returns a new User; siblings unchanged)
/// let renamed = username_lens.set(user, "janedoe".to_string());
/// assert_eq!(renamed.username, "janedoe");
/// assert_eq!(renamed.email, "jdoe@example.com");
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Movie {
        title: String,
        runtime_minutes: u32,
    }

    fn movie() -> Movie {
        Movie {
            title: "shawshank redemption".to_string(),
            runtime_minutes: 142,
        }
    }

    #[test]
    fn test_function_lens_get() {
        let title_lens = FunctionLens::new(
            |movie: &Movie| &movie.title,
            |movie: Movie, title: String| Movie { title, ..movie },
        );

        assert_eq!(*title_lens.get(&movie()), "shawshank redemption");
    }

    #[test]
    fn test_function_lens_set_preserves_siblings() {
        let title_lens = FunctionLens::new(
            |movie: &Movie| &movie.title,
            |movie: Movie, title: String| Movie { title, ..movie },
        );

        let updated = title_lens.set(movie(), "street race".to_string());
        assert_eq!(updated.title, "street race");
        assert_eq!(updated.runtime_minutes, 142);
    }

    #[test]
    fn test_lens_modify() {
        let runtime_lens = lens!(Movie, runtime_minutes);
        let extended = runtime_lens.modify(movie(), |minutes| minutes + 10);
        assert_eq!(extended.runtime_minutes, 152);
    }

    #[test]
    fn test_lens_modify_ref() {
        let title_lens = lens!(Movie, title);
        let shouted = title_lens.modify_ref(movie(), |title| title.to_uppercase());
        assert_eq!(shouted.title, "SHAWSHANK REDEMPTION");
    }

    #[test]
    fn test_lens_and_then() {
        #[derive(Clone, PartialEq, Debug)]
        struct Show {
            movie: Movie,
            date_time: String,
        }

        let movie_lens = lens!(Show, movie);
        let title_lens = lens!(Movie, title);
        let show_title = movie_lens.and_then(title_lens);

        let show = Show {
            movie: movie(),
            date_time: "2021-10-14T05:30".to_string(),
        };

        assert_eq!(*show_title.get(&show), "shawshank redemption");

        let updated = show_title.set(show, "street race".to_string());
        assert_eq!(updated.movie.title, "street race");
        assert_eq!(updated.date_time, "2021-10-14T05:30");
    }

    #[test]
    fn test_lens_macro() {
        let title_lens = lens!(Movie, title);
        assert_eq!(*title_lens.get(&movie()), "shawshank redemption");
    }

    #[test]
    fn test_lens_is_reusable_across_sources() {
        let runtime_lens = lens!(Movie, runtime_minutes);

        let short = Movie {
            title: "short".to_string(),
            runtime_minutes: 12,
        };
        let long = movie();

        assert_eq!(*runtime_lens.get(&short), 12);
        assert_eq!(*runtime_lens.get(&long), 142);
    }
}
