//! Contact records, their creation input and their partial-update patch.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  validate::{self, ADDRESS_MAX, FULL_NAME_MAX, PHONE_MAX},
};

/// A persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:        i64,
  pub full_name: Option<String>,
  pub email:     String,
  pub address:   String,
  pub phone:     String,
}

impl Contact {
  /// The name used in confirmations: `full_name`, or the email when unnamed.
  pub fn display_name(&self) -> &str {
    self
      .full_name
      .as_deref()
      .filter(|n| !n.trim().is_empty())
      .unwrap_or(&self.email)
  }
}

// ─── Creation ────────────────────────────────────────────────────────────────

/// A contact that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewContact {
  #[serde(default, deserialize_with = "validate::name")]
  pub full_name: Option<String>,
  pub email:     String,
  pub address:   String,
  pub phone:     String,
}

impl NewContact {
  pub fn new(
    full_name: Option<String>,
    email: impl Into<String>,
    address: impl Into<String>,
    phone: impl Into<String>,
  ) -> Self {
    Self {
      full_name,
      email: email.into(),
      address: address.into(),
      phone: phone.into(),
    }
  }

  pub fn validate(&self) -> Result<()> {
    if let Some(name) = &self.full_name {
      validate::bounded("full_name", name, FULL_NAME_MAX)?;
    }
    validate::email("email", &self.email)?;
    validate::required("address", &self.address, ADDRESS_MAX)?;
    validate::required("phone", &self.phone, PHONE_MAX)?;
    Ok(())
  }
}

// ─── Partial update ──────────────────────────────────────────────────────────

/// The fields of a [`Contact`] that may be changed after creation.
///
/// Absent keys leave the stored value untouched. `full_name` distinguishes
/// an absent key (`None`) from an explicit `null` or blank name
/// (`Some(None)`), which clears the name. The required fields reject `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactPatch {
  #[serde(default, deserialize_with = "validate::present_name")]
  pub full_name: Option<Option<String>>,
  #[serde(default, deserialize_with = "validate::given")]
  pub email:     Option<String>,
  #[serde(default, deserialize_with = "validate::given")]
  pub address:   Option<String>,
  #[serde(default, deserialize_with = "validate::given")]
  pub phone:     Option<String>,
}

impl ContactPatch {
  pub fn is_empty(&self) -> bool {
    self.full_name.is_none()
      && self.email.is_none()
      && self.address.is_none()
      && self.phone.is_none()
  }

  pub fn validate(&self) -> Result<()> {
    if let Some(Some(name)) = &self.full_name {
      validate::bounded("full_name", name, FULL_NAME_MAX)?;
    }
    if let Some(email) = &self.email {
      validate::email("email", email)?;
    }
    if let Some(address) = &self.address {
      validate::required("address", address, ADDRESS_MAX)?;
    }
    if let Some(phone) = &self.phone {
      validate::required("phone", phone, PHONE_MAX)?;
    }
    Ok(())
  }

  /// Overwrite the fields of `contact` that this patch names.
  pub fn apply_to(self, contact: &mut Contact) {
    if let Some(full_name) = self.full_name {
      contact.full_name = full_name;
    }
    if let Some(email) = self.email {
      contact.email = email;
    }
    if let Some(address) = self.address {
      contact.address = address;
    }
    if let Some(phone) = self.phone {
      contact.phone = phone;
    }
  }
}
