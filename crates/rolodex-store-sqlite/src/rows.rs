//! Column lists and row decoders shared by the store queries.

use rolodex_core::{
  contact::Contact, group::Group, subscription::Subscription, user::User,
};
use rusqlite::Row;

pub const CONTACT_COLUMNS: &str = "id, full_name, email, address, phone";
pub const GROUP_COLUMNS: &str = "id, group_name";
pub const USER_COLUMNS: &str = "id, email, password, is_active";
pub const SUBSCRIPTION_COLUMNS: &str = "id, contact_id, group_id";

pub fn contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
  Ok(Contact {
    id:        row.get(0)?,
    full_name: row.get(1)?,
    email:     row.get(2)?,
    address:   row.get(3)?,
    phone:     row.get(4)?,
  })
}

pub fn group(row: &Row<'_>) -> rusqlite::Result<Group> {
  Ok(Group { id: row.get(0)?, group_name: row.get(1)? })
}

pub fn user(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:            row.get(0)?,
    email:         row.get(1)?,
    password_hash: row.get(2)?,
    is_active:     row.get(3)?,
  })
}

pub fn subscription(row: &Row<'_>) -> rusqlite::Result<Subscription> {
  Ok(Subscription {
    id:         row.get(0)?,
    contact_id: row.get(1)?,
    group_id:   row.get(2)?,
  })
}
