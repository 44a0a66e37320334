//! [`SqliteStore`] — the SQLite implementation of [`Directory`].

use std::path::Path;

use rolodex_core::{
  contact::{Contact, ContactPatch, NewContact},
  group::{Group, GroupPatch, NewGroup},
  store::Directory,
  subscription::Subscription,
  user::{NewUser, User},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  rows::{self, CONTACT_COLUMNS, GROUP_COLUMNS, SUBSCRIPTION_COLUMNS, USER_COLUMNS},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Rolodex directory backed by a single SQLite file.
///
/// Every write runs in its own transaction. Returning early from a
/// [`tokio_rusqlite::Connection::call`] closure drops the transaction, which
/// rolls it back.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-row lookup by primary key.
  async fn fetch_by_id<T, F>(&self, sql: String, id: i64, decode: F) -> Result<Option<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], |row| decode(row))
            .optional()?,
        )
      })
      .await?;
    Ok(found)
  }

  /// List rows whose `column` contains `filter`, or every row without one.
  async fn list_filtered<T, F>(
    &self,
    table: &'static str,
    columns: &'static str,
    column: &'static str,
    filter: Option<String>,
    decode: F,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        // `instr` is case-sensitive (unlike LIKE) and yields NULL for NULL
        // names, which drops unnamed rows whenever a filter is present.
        let sql = format!(
          "SELECT {columns} FROM {table}
           WHERE ?1 IS NULL OR instr({column}, ?1) > 0
           ORDER BY id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![filter], |row| decode(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Delete one row by primary key. Returns `false` if nothing matched.
  async fn delete_by_id(&self, table: &'static str, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let n = tx.execute(
          &format!("DELETE FROM {table} WHERE id = ?1"),
          rusqlite::params![id],
        )?;
        if n == 0 {
          return Ok(false);
        }
        tx.commit()?;
        Ok(true)
      })
      .await?;
    Ok(deleted)
  }

  /// Subscriptions matching `column = id`, in id order.
  async fn subscriptions_where(
    &self,
    column: &'static str,
    id: i64,
  ) -> Result<Vec<Subscription>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions
           WHERE {column} = ?1
           ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![id], rows::subscription)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── Directory impl ──────────────────────────────────────────────────────────

impl Directory for SqliteStore {
  type Error = crate::Error;

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn create_contact(&self, input: NewContact) -> Result<Contact> {
    input.validate()?;

    let contact = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO contacts (full_name, email, address, phone)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![input.full_name, input.email, input.address, input.phone],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Contact {
          id,
          full_name: input.full_name,
          email: input.email,
          address: input.address,
          phone: input.phone,
        })
      })
      .await?;

    Ok(contact)
  }

  async fn list_contacts(&self, filter: Option<String>) -> Result<Vec<Contact>> {
    self
      .list_filtered("contacts", CONTACT_COLUMNS, "full_name", filter, rows::contact)
      .await
  }

  async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
    let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1");
    self.fetch_by_id(sql, id, rows::contact).await
  }

  async fn update_contact(&self, id: i64, patch: ContactPatch) -> Result<Option<Contact>> {
    patch.validate()?;

    let updated = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let current = tx
          .query_row(
            &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id],
            rows::contact,
          )
          .optional()?;

        let Some(mut contact) = current else {
          return Ok(None);
        };
        if patch.is_empty() {
          return Ok(Some(contact));
        }

        patch.apply_to(&mut contact);
        tx.execute(
          "UPDATE contacts
           SET full_name = ?2, email = ?3, address = ?4, phone = ?5
           WHERE id = ?1",
          rusqlite::params![
            contact.id,
            contact.full_name,
            contact.email,
            contact.address,
            contact.phone,
          ],
        )?;
        tx.commit()?;
        Ok(Some(contact))
      })
      .await?;

    Ok(updated)
  }

  async fn delete_contact(&self, id: i64) -> Result<bool> {
    self.delete_by_id("contacts", id).await
  }

  // ── Groups ────────────────────────────────────────────────────────────────

  async fn create_group(&self, input: NewGroup) -> Result<Group> {
    input.validate()?;

    let group = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO contact_groups (group_name) VALUES (?1)",
          rusqlite::params![input.group_name],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Group { id, group_name: input.group_name })
      })
      .await?;

    Ok(group)
  }

  async fn list_groups(&self, filter: Option<String>) -> Result<Vec<Group>> {
    self
      .list_filtered("contact_groups", GROUP_COLUMNS, "group_name", filter, rows::group)
      .await
  }

  async fn get_group(&self, id: i64) -> Result<Option<Group>> {
    let sql = format!("SELECT {GROUP_COLUMNS} FROM contact_groups WHERE id = ?1");
    self.fetch_by_id(sql, id, rows::group).await
  }

  async fn update_group(&self, id: i64, patch: GroupPatch) -> Result<Option<Group>> {
    patch.validate()?;

    let updated = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let current = tx
          .query_row(
            &format!("SELECT {GROUP_COLUMNS} FROM contact_groups WHERE id = ?1"),
            rusqlite::params![id],
            rows::group,
          )
          .optional()?;

        let Some(mut group) = current else {
          return Ok(None);
        };
        if patch.is_empty() {
          return Ok(Some(group));
        }

        patch.apply_to(&mut group);
        tx.execute(
          "UPDATE contact_groups SET group_name = ?2 WHERE id = ?1",
          rusqlite::params![group.id, group.group_name],
        )?;
        tx.commit()?;
        Ok(Some(group))
      })
      .await?;

    Ok(updated)
  }

  async fn delete_group(&self, id: i64) -> Result<bool> {
    self.delete_by_id("contact_groups", id).await
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn add_user(&self, input: NewUser) -> Result<User> {
    input.validate()?;

    let user = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO users (email, password, is_active) VALUES (?1, ?2, ?3)",
          rusqlite::params![input.email, input.password_hash, input.is_active],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(User {
          id,
          email: input.email,
          password_hash: input.password_hash,
          is_active: input.is_active,
        })
      })
      .await?;

    Ok(user)
  }

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    self.fetch_by_id(sql, id, rows::user).await
  }

  async fn find_user_by_email(&self, email: String) -> Result<Option<User>> {
    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
              rusqlite::params![email],
              rows::user,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(found)
  }

  // ── Subscriptions ─────────────────────────────────────────────────────────

  async fn subscribe(&self, contact_id: i64, group_id: i64) -> Result<Subscription> {
    let subscription = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO subscriptions (contact_id, group_id) VALUES (?1, ?2)",
          rusqlite::params![contact_id, group_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Subscription { id, contact_id, group_id })
      })
      .await?;

    Ok(subscription)
  }

  async fn unsubscribe(&self, contact_id: i64, group_id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let n = tx.execute(
          "DELETE FROM subscriptions WHERE contact_id = ?1 AND group_id = ?2",
          rusqlite::params![contact_id, group_id],
        )?;
        if n == 0 {
          return Ok(false);
        }
        tx.commit()?;
        Ok(true)
      })
      .await?;
    Ok(removed)
  }

  async fn subscriptions_for_contact(&self, contact_id: i64) -> Result<Vec<Subscription>> {
    self.subscriptions_where("contact_id", contact_id).await
  }

  async fn subscriptions_for_group(&self, group_id: i64) -> Result<Vec<Subscription>> {
    self.subscriptions_where("group_id", group_id).await
  }
}
