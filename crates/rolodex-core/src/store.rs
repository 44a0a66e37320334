//! The `Directory` trait: the storage abstraction for contacts, groups,
//! users and subscriptions.
//!
//! The trait is implemented by storage backends (e.g. `rolodex-store-sqlite`).
//! Higher layers (`rolodex-api`, `rolodex-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, ContactPatch, NewContact},
  group::{Group, GroupPatch, NewGroup},
  subscription::Subscription,
  user::{NewUser, User},
};

/// Abstraction over a Rolodex storage backend.
///
/// Every write is applied atomically: either the whole change is committed
/// or, on a constraint violation or any other failure, nothing is. List
/// operations return rows in ascending id order.
///
/// Name filters are case-sensitive substring matches. Rows without a name
/// never match a filter.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait Directory: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// Persist a new contact. Fails if its email or phone is already taken.
  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// List contacts, narrowed to those whose `full_name` contains `filter`.
  fn list_contacts(
    &self,
    filter: Option<String>,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Merge `patch` into the stored contact and return the result.
  /// Returns `None`, writing nothing, if the id does not resolve.
  fn update_contact(
    &self,
    id: i64,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Delete a contact. Returns `false` if there was no such row.
  fn delete_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Groups ────────────────────────────────────────────────────────────

  /// Persist a new group. Fails if the name is already taken.
  fn create_group(
    &self,
    input: NewGroup,
  ) -> impl Future<Output = Result<Group, Self::Error>> + Send + '_;

  /// List groups, narrowed to those whose `group_name` contains `filter`.
  fn list_groups(
    &self,
    filter: Option<String>,
  ) -> impl Future<Output = Result<Vec<Group>, Self::Error>> + Send + '_;

  fn get_group(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Group>, Self::Error>> + Send + '_;

  fn update_group(
    &self,
    id: i64,
    patch: GroupPatch,
  ) -> impl Future<Output = Result<Option<Group>, Self::Error>> + Send + '_;

  fn delete_group(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a user whose password has already been hashed.
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn find_user_by_email(
    &self,
    email: String,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  // ── Subscriptions ─────────────────────────────────────────────────────

  /// Add a contact to a group. Both ids must reference existing rows and
  /// the pair must not already be subscribed.
  fn subscribe(
    &self,
    contact_id: i64,
    group_id: i64,
  ) -> impl Future<Output = Result<Subscription, Self::Error>> + Send + '_;

  /// Remove a contact from a group. Returns `false` if it was not a member.
  fn unsubscribe(
    &self,
    contact_id: i64,
    group_id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn subscriptions_for_contact(
    &self,
    contact_id: i64,
  ) -> impl Future<Output = Result<Vec<Subscription>, Self::Error>> + Send + '_;

  fn subscriptions_for_group(
    &self,
    group_id: i64,
  ) -> impl Future<Output = Result<Vec<Subscription>, Self::Error>> + Send + '_;
}
