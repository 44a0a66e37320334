//! Subscription: membership of a contact in a group.

use serde::{Deserialize, Serialize};

/// A row of the contact/group join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
  pub id:         i64,
  pub contact_id: i64,
  pub group_id:   i64,
}
