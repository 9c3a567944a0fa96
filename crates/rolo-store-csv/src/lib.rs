//! Flat-file backend for the rolo contact store.
//!
//! One UTF-8 text file holds the whole collection: the fixed header line
//! `id,name,email,phone`, then one comma-delimited row per contact. Every
//! read loads the entire file and every mutation rewrites it in full; see
//! [`CsvStore`] for the locking discipline around that cycle.

mod parse;
mod serialize;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::CsvStore;

/// The fixed header line. Field order is part of the on-disk format.
pub(crate) const HEADER: &str = "id,name,email,phone";

#[cfg(test)]
mod tests;
