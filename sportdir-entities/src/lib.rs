#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # sportdir-entities
//!
//! Reusable, agnostic domain entities for the sportdir facility directory.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod account;
pub mod email;
pub mod facility;
pub mod geo;
pub mod id;
pub mod price;
pub mod schedule;
pub mod sub_field;
pub mod taxonomy;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
