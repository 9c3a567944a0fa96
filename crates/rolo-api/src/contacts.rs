//! Handlers for `/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/contacts` | Whole collection; empty is 200, not 404 |
//! | `POST` | `/contacts` | Body: `{"name", "email"?, "phone"}` |
//! | `GET`  | `/contacts/:id` | 404 if not found |
//! | `PUT`  | `/contacts/:id` | Overwrites fields in place; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use rolo_core::{
  contact::{Contact, ContactId, NewContact},
  store::ContactStore,
};

use crate::{envelope::Envelope, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Envelope<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Envelope::ok("ok", contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — body: `{"name":"Ann","phone":"5551234567"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewContact>,
) -> Result<Envelope<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let contact = store
    .create(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Envelope::ok("contact created", contact))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
) -> Result<Envelope<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("contact does not exist".to_string()))?;
  Ok(Envelope::ok("ok", contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — same body as create; the id never changes.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<ContactId>,
  Json(body): Json<NewContact>,
) -> Result<Envelope<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let contact = store
    .update(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("contact does not exist".to_string()))?;
  Ok(Envelope::ok("contact updated", contact))
}
