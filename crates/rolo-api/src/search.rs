//! Handler for `GET /contacts/search`.
//!
//! The `query` parameter defaults to the empty string, which matches every
//! contact. No match is a valid empty result (200), never a 404.

use std::sync::Arc;

use axum::extract::{Query, State};
use rolo_core::{contact::Contact, store::ContactStore};
use serde::Deserialize;

use crate::{envelope::Envelope, error::ApiError};

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  /// Case-insensitive substring matched against name and email.
  #[serde(default)]
  pub query: String,
}

/// `GET /contacts/search[?query=...]`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Envelope<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let matches = store
    .search(&params.query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let message = if matches.is_empty() { "no match found" } else { "ok" };
  Ok(Envelope::ok(message, matches))
}
