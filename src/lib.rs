//! # focal
//!
//! Composable lenses for reading and immutably updating deeply nested
//! data structures.
//!
//! ## Overview
//!
//! A lens pairs a getter with a setter for a single field of a larger,
//! immutable structure, packaged as a first-class value. Lenses compose:
//! chaining a lens to an intermediate structure with a lens into that
//! structure yields a lens addressing the deeper field directly, so a
//! multi-level nested update becomes a single `set` or `modify` call
//! instead of hand-written copy-with-replacement at every level.
//!
//! All operations are pure: `set` and `modify` return a new value and
//! never touch the original, so lenses and the values they operate on can
//! be shared freely across threads.
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Engine { horsepower: u32 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Car { model: String, engine: Engine }
//!
//! let engine_lens = focal::lens!(Car, engine);
//! let horsepower_lens = focal::lens!(Engine, horsepower);
//! let car_horsepower = engine_lens.and_then(horsepower_lens);
//!
//! let car = Car {
//!     model: "roadster".to_string(),
//!     engine: Engine { horsepower: 280 },
//! };
//!
//! assert_eq!(*car_horsepower.get(&car), 280);
//!
//! let tuned = car_horsepower.modify(car, |hp| hp + 40);
//! assert_eq!(tuned.engine.horsepower, 320);
//! assert_eq!(tuned.model, "roadster"); // untouched
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
}

pub mod optics;
