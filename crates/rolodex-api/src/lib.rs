//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any [`rolodex_core::store::Directory`].
//! The store handle is passed in explicitly and shared as router state.
//! Tracing layers, TLS, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, rolodex_api::api_router(Arc::new(store)))
//! ```

pub mod contacts;
pub mod error;
pub mod groups;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, post},
};
use rolodex_core::store::Directory;
use serde_json::{Value, json};

pub use error::ApiError;

/// Every route served by [`api_router`], as `METHOD path`.
pub const ROUTES: &[&str] = &[
  "GET /",
  "GET /contact/all",
  "POST /contact",
  "GET /contact/{id}",
  "PATCH /contact/{id}",
  "DELETE /contact/{id}",
  "GET /group/all",
  "POST /group",
  "GET /group/{id}",
  "PATCH /group/{id}",
  "DELETE /group/{id}",
];

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: Directory + 'static,
{
  Router::new()
    .route("/", get(sitemap))
    // Contacts
    .route("/contact", post(contacts::create::<S>))
    .route("/contact/all", get(contacts::list::<S>))
    .route(
      "/contact/{id}",
      get(contacts::get_one::<S>)
        .patch(contacts::update::<S>)
        .delete(contacts::delete::<S>),
    )
    // Groups
    .route("/group", post(groups::create::<S>))
    .route("/group/all", get(groups::list::<S>))
    .route(
      "/group/{id}",
      get(groups::get_one::<S>)
        .patch(groups::update::<S>)
        .delete(groups::delete::<S>),
    )
    .with_state(store)
}

/// `GET /` — lists the available endpoints.
async fn sitemap() -> Json<Value> { Json(json!({ "endpoints": ROUTES })) }

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use rolodex_core::store::Directory as _;
  use rolodex_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn make_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn oneshot(
    store:  Arc<SqliteStore>,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    api_router(store).oneshot(req).await.unwrap()
  }

  async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  async fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_text(resp).await).unwrap()
  }

  fn ana() -> Value {
    json!({
      "full_name": "Ana Li",
      "email": "ana@x.com",
      "address": "1 Main St",
      "phone": "555-0100",
    })
  }

  fn bo() -> Value {
    json!({
      "full_name": "Bo Diaz",
      "email": "bo@x.com",
      "address": "2 Oak Ave",
      "phone": "555-0101",
    })
  }

  // ── Sitemap ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn sitemap_lists_routes() {
    let resp = oneshot(make_store().await, "GET", "/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "POST /contact"));
  }

  // ── Contacts ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_contact_then_list_includes_it() {
    let store = make_store().await;

    let resp = oneshot(store.clone(), "POST", "/contact", Some(ana())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_text(resp).await, "Ana Li added successfully");

    let resp = oneshot(store, "GET", "/contact/all", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["full_name"], "Ana Li");
    assert_eq!(list[0]["email"], "ana@x.com");
    assert_eq!(list[0]["address"], "1 Main St");
    assert_eq!(list[0]["phone"], "555-0100");
    assert!(list[0]["id"].is_i64());
  }

  #[tokio::test]
  async fn unnamed_contact_is_confirmed_by_email() {
    let store = make_store().await;
    let body = json!({ "email": "ana@x.com", "address": "1 Main St", "phone": "555-0100" });
    let resp = oneshot(store, "POST", "/contact", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_text(resp).await, "ana@x.com added successfully");
  }

  #[tokio::test]
  async fn duplicate_contact_returns_500_with_cause() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;

    let mut dup = bo();
    dup["email"] = json!("ana@x.com");
    let resp = oneshot(store.clone(), "POST", "/contact", Some(dup)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("UNIQUE"), "message: {message}");

    let resp = oneshot(store, "GET", "/contact/all", None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn contact_missing_field_returns_400() {
    let store = make_store().await;
    let body = json!({ "full_name": "Ana Li", "email": "ana@x.com", "address": "1 Main St" });
    let resp = oneshot(store, "POST", "/contact", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());
  }

  #[tokio::test]
  async fn contact_invalid_email_returns_400() {
    let store = make_store().await;
    let mut body = ana();
    body["email"] = json!("ana");
    let resp = oneshot(store, "POST", "/contact", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let message = body_json(resp).await["message"].as_str().unwrap().to_owned();
    assert!(message.contains("email"), "message: {message}");
  }

  #[tokio::test]
  async fn list_contacts_filters_by_full_name() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;
    oneshot(store.clone(), "POST", "/contact", Some(bo())).await;

    let resp = oneshot(store.clone(), "GET", "/contact/all?full_name=Diaz", None).await;
    let list = body_json(resp).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["full_name"], "Bo Diaz");

    let resp = oneshot(store, "GET", "/contact/all", None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn get_contact_by_id() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;

    let resp = oneshot(store.clone(), "GET", "/contact/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let contact = body_json(resp).await;
    assert_eq!(contact["id"], 1);
    assert_eq!(contact["email"], "ana@x.com");

    let resp = oneshot(store, "GET", "/contact/2", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "contact 2 not found");
  }

  #[tokio::test]
  async fn non_numeric_id_returns_400() {
    let resp = oneshot(make_store().await, "GET", "/contact/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn patch_contact_merges_fields() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;

    let patch = json!({ "phone": "555-0199" });
    let resp = oneshot(store.clone(), "PATCH", "/contact/1", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let contact = body_json(resp).await;
    assert_eq!(contact["phone"], "555-0199");
    assert_eq!(contact["full_name"], "Ana Li");
    assert_eq!(contact["address"], "1 Main St");

    let resp = oneshot(store, "GET", "/contact/1", None).await;
    assert_eq!(body_json(resp).await, contact);
  }

  #[tokio::test]
  async fn patch_contact_rejects_unknown_field() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;

    let patch = json!({ "nickname": "A" });
    let resp = oneshot(store, "PATCH", "/contact/1", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn patch_contact_null_email_returns_400() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;

    let resp = oneshot(store.clone(), "PATCH", "/contact/1", Some(json!({ "email": null }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = oneshot(store, "GET", "/contact/1", None).await;
    assert_eq!(body_json(resp).await["email"], "ana@x.com");
  }

  #[tokio::test]
  async fn blank_full_name_is_confirmed_by_email() {
    let store = make_store().await;
    let mut body = ana();
    body["full_name"] = json!("   ");
    let resp = oneshot(store.clone(), "POST", "/contact", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_text(resp).await, "ana@x.com added successfully");

    let resp = oneshot(store, "GET", "/contact/1", None).await;
    assert_eq!(body_json(resp).await["full_name"], Value::Null);
  }

  #[tokio::test]
  async fn patch_missing_contact_returns_404() {
    let patch = json!({ "phone": "555-0199" });
    let resp = oneshot(make_store().await, "PATCH", "/contact/9", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn patch_contact_into_duplicate_returns_500() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;
    oneshot(store.clone(), "POST", "/contact", Some(bo())).await;

    let patch = json!({ "phone": "555-0100" });
    let resp = oneshot(store.clone(), "PATCH", "/contact/2", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = oneshot(store, "GET", "/contact/2", None).await;
    assert_eq!(body_json(resp).await["phone"], "555-0101");
  }

  #[tokio::test]
  async fn delete_contact_then_get_returns_404() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;

    let resp = oneshot(store.clone(), "DELETE", "/contact/1", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = oneshot(store.clone(), "GET", "/contact/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = oneshot(store, "DELETE", "/contact/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn delete_subscribed_contact_returns_500() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;
    oneshot(store.clone(), "POST", "/group", Some(json!({ "group_name": "family" }))).await;
    store.subscribe(1, 1).await.unwrap();

    let resp = oneshot(store.clone(), "DELETE", "/contact/1", None).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = oneshot(store, "GET", "/contact/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  // ── Groups ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn group_lifecycle() {
    let store = make_store().await;

    let resp = oneshot(store.clone(), "POST", "/group", Some(json!({ "group_name": "family" }))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_text(resp).await, "family added successfully");
    oneshot(store.clone(), "POST", "/group", Some(json!({ "group_name": "work" }))).await;

    let resp = oneshot(store.clone(), "GET", "/group/all?group_name=fam", None).await;
    assert_eq!(body_json(resp).await, json!([{ "id": 1, "group_name": "family" }]));

    let resp = oneshot(store.clone(), "PATCH", "/group/1", Some(json!({ "group_name": "kin" }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "id": 1, "group_name": "kin" }));

    let resp = oneshot(store.clone(), "DELETE", "/group/2", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = oneshot(store.clone(), "GET", "/group/2", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = oneshot(store, "GET", "/group/all", None).await;
    assert_eq!(body_json(resp).await, json!([{ "id": 1, "group_name": "kin" }]));
  }

  #[tokio::test]
  async fn duplicate_group_returns_500() {
    let store = make_store().await;
    let body = json!({ "group_name": "family" });
    oneshot(store.clone(), "POST", "/group", Some(body.clone())).await;
    let resp = oneshot(store, "POST", "/group", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[tokio::test]
  async fn blank_group_name_returns_400() {
    let store = make_store().await;
    let resp = oneshot(store, "POST", "/group", Some(json!({ "group_name": "" }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn patch_group_null_name_returns_400() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/group", Some(json!({ "group_name": "family" }))).await;

    let resp = oneshot(store.clone(), "PATCH", "/group/1", Some(json!({ "group_name": null }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = oneshot(store, "GET", "/group/1", None).await;
    assert_eq!(body_json(resp).await["group_name"], "family");
  }

  #[tokio::test]
  async fn patch_missing_group_returns_404() {
    let patch = json!({ "group_name": "kin" });
    let resp = oneshot(make_store().await, "PATCH", "/group/4", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "group 4 not found");
  }

  #[tokio::test]
  async fn delete_subscribed_group_returns_500() {
    let store = make_store().await;
    oneshot(store.clone(), "POST", "/contact", Some(ana())).await;
    oneshot(store.clone(), "POST", "/group", Some(json!({ "group_name": "family" }))).await;
    store.subscribe(1, 1).await.unwrap();

    let resp = oneshot(store.clone(), "DELETE", "/group/1", None).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = oneshot(store, "GET", "/group/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn delete_missing_group_returns_404() {
    let resp = oneshot(make_store().await, "DELETE", "/group/5", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
