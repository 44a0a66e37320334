//! User accounts.
//!
//! Users are provisioned out-of-band (see the server's `add-user` command)
//! and are read-only as far as the HTTP API is concerned.

use serde::Serialize;

use crate::{
  Error, Result,
  validate,
};

/// A persisted user row. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
  pub id:            i64,
  pub email:         String,
  #[serde(skip_serializing)]
  pub password_hash: String,
  pub is_active:     bool,
}

/// A user awaiting insertion. `password_hash` must already be a PHC string.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email:         String,
  pub password_hash: String,
  pub is_active:     bool,
}

impl NewUser {
  pub fn validate(&self) -> Result<()> {
    validate::email("email", &self.email)?;
    if self.password_hash.is_empty() {
      return Err(Error::invalid("password", "must not be empty"));
    }
    Ok(())
  }
}
