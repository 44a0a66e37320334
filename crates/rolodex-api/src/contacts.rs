//! Handlers for `/contact` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contact/all` | Optional `?full_name=` substring filter |
//! | `POST`   | `/contact` | Body: [`NewContact`]; returns 201 + confirmation text |
//! | `GET`    | `/contact/{id}` | 404 if not found |
//! | `PATCH`  | `/contact/{id}` | Body: [`ContactPatch`]; returns the updated contact |
//! | `DELETE` | `/contact/{id}` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use rolodex_core::{
  contact::{Contact, ContactPatch, NewContact},
  store::Directory,
};
use serde::Deserialize;

use crate::error::ApiError;

fn not_found(id: i64) -> ApiError { ApiError::NotFound(format!("contact {id} not found")) }

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub full_name: Option<String>,
}

/// `GET /contact/all[?full_name=<substring>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: Directory,
{
  let contacts = store
    .list_contacts(params.full_name)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contact` — body: `{"full_name","email","address","phone"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewContact>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: Directory,
{
  let Json(input) = body?;
  input.validate()?;

  let contact = store.create_contact(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = contact.id, "contact created");
  Ok((
    StatusCode::CREATED,
    format!("{} added successfully", contact.display_name()),
  ))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contact/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: Directory,
{
  let Path(id) = id?;
  let contact = store
    .get_contact(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /contact/{id}` — body: any subset of the contact's business fields.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
  body: Result<Json<ContactPatch>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: Directory,
{
  let Path(id) = id?;
  let Json(patch) = body?;
  patch.validate()?;

  let contact = store
    .update_contact(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contact/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: Directory,
{
  let Path(id) = id?;
  if !store.delete_contact(id).await.map_err(ApiError::store)? {
    return Err(not_found(id));
  }
  tracing::debug!(id, "contact deleted");
  Ok(StatusCode::NO_CONTENT)
}
