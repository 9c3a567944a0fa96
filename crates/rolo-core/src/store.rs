//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-csv`).
//! The HTTP layer (`rolo-api`) depends on this abstraction, not on any
//! concrete backend, so tests can swap in throwaway stores.

use std::future::Future;

use crate::contact::{Contact, ContactId, NewContact};

/// Abstraction over a rolo contact store backend.
///
/// Every mutation is a full read-modify-write of the persisted collection;
/// implementations must serialize these cycles internally so two concurrent
/// mutations can neither lose an update nor allocate the same id.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every contact in persisted order. An empty store yields an empty
  /// list, not an error.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact. The store assigns the next id (one more than the
  /// current maximum, starting from 1) and returns the stored record.
  fn create(
    &self,
    new: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Overwrite the name/email/phone of an existing contact in place, keeping
  /// its id. Returns `None` (and persists nothing) if the id is absent.
  fn update(
    &self,
    id: ContactId,
    new: NewContact,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Return every contact whose name or email contains `query` as a
  /// case-insensitive substring. The empty query matches every contact.
  fn search<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;
}
