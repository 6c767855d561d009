//! Composable lenses for immutable data manipulation.
//!
//! A lens is a composable accessor: it focuses on one field of a larger
//! immutable structure and supports reading the field (`get`), replacing
//! it (`set`), and transforming it in place (`modify`) — always by
//! returning a new copy of the whole structure, never by mutation.
//!
//! Two lenses chain with [`Lens::and_then`]: a `Lens<S, A>` followed by a
//! `Lens<A, B>` yields a `Lens<S, B>` that reads and updates the deeply
//! nested field in one step. Composition is associative, and
//! [`lens_identity`] is its identity element.
//!
//! # Example
//!
//! ```
//! use focal::optics::Lens;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Movie { title: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Show { movie: Movie, date_time: String }
//!
//! let movie_lens = lens!(Show, movie);
//! let title_lens = lens!(Movie, title);
//! let show_title = movie_lens.and_then(title_lens);
//!
//! let show = Show {
//!     movie: Movie { title: "shawshank redemption".to_string() },
//!     date_time: "2021-10-14T05:30".to_string(),
//! };
//!
//! // Read through the composed lens
//! assert_eq!(*show_title.get(&show), "shawshank redemption");
//!
//! // Update through the composed lens (returns a new Show)
//! let updated = show_title.set(show, "street race".to_string());
//! assert_eq!(updated.movie.title, "street race");
//! assert_eq!(updated.date_time, "2021-10-14T05:30"); // siblings unchanged
//! ```
//!
//! # Lens Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! Law compliance is a construction-time contract on the getter/setter
//! pair, not something the crate checks at runtime. The [`laws`] module
//! provides assertion helpers for verifying the contract in tests.

mod lens;
mod standard_optics;

pub mod laws;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

// Re-export standard lenses
pub use standard_optics::lens_first;
pub use standard_optics::lens_identity;
pub use standard_optics::lens_second;
