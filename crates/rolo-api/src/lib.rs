//! JSON REST API for rolo.
//!
//! Exposes an axum [`Router`] backed by any [`rolo_core::store::ContactStore`].
//! Transport concerns (binding, shutdown, request tracing) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolo_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod envelope;
pub mod error;
pub mod search;

use std::sync::Arc;

use axum::{
  Router,
  routing::get,
};
use rolo_core::store::ContactStore;

pub use envelope::Envelope;
pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. `/contacts/search` is registered alongside
/// `/contacts/{id}`; the static segment wins the route match.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route("/contacts/search", get(search::handler::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>).put(contacts::update_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
