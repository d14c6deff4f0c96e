//! Growable array with explicit initialisation.
//!
//! [`List<T>`] is a contiguous, indexable sequence with amortised O(1)
//! append, O(1) indexed access and O(1) pop from the end. It tracks its own
//! logical capacity (exposed together with the length as a [`Header`]) and
//! grows geometrically: `2 * capacity + HEADER_SLOTS`.
//!
//! A list starts life either initialised ([`List::new`], eight slots) or
//! uninitialised ([`List::uninit`] / [`Default`]). Read-only queries work on
//! both; appending requires initialisation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::{grown_capacity, Header, List, HEADER_SLOTS, LIST_INITIAL_CAPACITY};
