//! Handlers for `/group` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/group/all` | Optional `?group_name=` substring filter |
//! | `POST`   | `/group` | Body: `{"group_name":"..."}`; returns 201 + confirmation text |
//! | `GET`    | `/group/{id}` | 404 if not found |
//! | `PATCH`  | `/group/{id}` | Body: [`GroupPatch`] |
//! | `DELETE` | `/group/{id}` | 204, or 404 if not found |

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
  group::{Group, GroupPatch, NewGroup},
  store::Directory,
};
use serde::Deserialize;

use crate::error::ApiError;

fn not_found(id: i64) -> ApiError { ApiError::NotFound(format!("group {id} not found")) }

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub group_name: Option<String>,
}

/// `GET /group/all[?group_name=<substring>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Group>>, ApiError>
where
  S: Directory,
{
  let groups = store
    .list_groups(params.group_name)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(groups))
}

/// `POST /group`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewGroup>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: Directory,
{
  let Json(input) = body?;
  input.validate()?;

  let group = store.create_group(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = group.id, "group created");
  Ok((
    StatusCode::CREATED,
    format!("{} added successfully", group.group_name),
  ))
}

/// `GET /group/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Group>, ApiError>
where
  S: Directory,
{
  let Path(id) = id?;
  let group = store
    .get_group(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(group))
}

/// `PATCH /group/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
  body: Result<Json<GroupPatch>, JsonRejection>,
) -> Result<Json<Group>, ApiError>
where
  S: Directory,
{
  let Path(id) = id?;
  let Json(patch) = body?;
  patch.validate()?;

  let group = store
    .update_group(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(group))
}

/// `DELETE /group/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: Directory,
{
  let Path(id) = id?;
  if !store.delete_group(id).await.map_err(ApiError::store)? {
    return Err(not_found(id));
  }
  tracing::debug!(id, "group deleted");
  Ok(StatusCode::NO_CONTENT)
}
