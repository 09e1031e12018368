//! `tristate` - tri-state optional values
//!
//! A [`TriState<T>`] distinguishes three conditions for a field - *absent*
//! (never provided), *explicitly null*, and *present with a value* - and
//! carries that distinction across the two boundaries where it matters:
//! JSON (`missing key` vs `"field": null` vs `"field": value`) and a
//! relational column (`not fetched` vs `NULL` vs `value`).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`value`] - The `TriState<T>` container, state queries, accessors,
//!   mutators, and constructors
//! - [`json`] - serde `Serialize`/`Deserialize` plus byte-level JSON helpers
//! - [`sql`] - rusqlite `ToSql`/`FromSql` single-column binding
//! - [`error`] - Error types for the two fallible boundary operations
//! - [`logging`] - Test logging initialization
//!
//! # Example
//!
//! ```
//! use tristate::TriState;
//!
//! let age = TriState::Value(42);
//! assert_eq!(age.to_json().unwrap(), b"42");
//!
//! let cleared = TriState::<i64>::from_json(b"null").unwrap();
//! assert!(cleared.is_null());
//! assert_eq!(cleared.value_or(0), 0);
//!
//! let untouched = TriState::<i64>::default();
//! assert!(untouched.is_absent());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

pub mod error;
pub mod json;
pub mod logging;
pub mod sql;
pub mod value;

pub use error::{Result, TriStateError};
pub use value::{State, TriState};
