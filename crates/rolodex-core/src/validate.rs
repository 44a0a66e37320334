//! Field checks shared by the input and patch types.
//!
//! Column limits mirror the widths declared in the SQLite schema.

use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

pub(crate) const FULL_NAME_MAX: usize = 80;
pub(crate) const EMAIL_MAX: usize = 120;
pub(crate) const ADDRESS_MAX: usize = 120;
pub(crate) const PHONE_MAX: usize = 20;
pub(crate) const GROUP_NAME_MAX: usize = 20;

/// A required string: not blank, at most `max` characters.
pub(crate) fn required(field: &'static str, value: &str, max: usize) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::invalid(field, "must not be blank"));
  }
  bounded(field, value, max)
}

pub(crate) fn bounded(field: &'static str, value: &str, max: usize) -> Result<()> {
  let len = value.chars().count();
  if len > max {
    return Err(Error::invalid(
      field,
      format!("must be at most {max} characters, got {len}"),
    ));
  }
  Ok(())
}

pub(crate) fn email(field: &'static str, value: &str) -> Result<()> {
  required(field, value, EMAIL_MAX)?;
  match value.split_once('@') {
    Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
    _ => Err(Error::invalid(field, "must be an email address")),
  }
}

// ─── Deserializers ───────────────────────────────────────────────────────────

/// A patch field that may be omitted but never set to `null`.
pub(crate) fn given<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  String::deserialize(de).map(Some)
}

/// An optional name. Blank text reads as no name at all.
pub(crate) fn name<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(de)?;
  Ok(value.filter(|n| !n.trim().is_empty()))
}

/// Like [`name`], but keeps a present key (`Some`) apart from an absent one.
pub(crate) fn present_name<'de, D>(
  de: D,
) -> std::result::Result<Option<Option<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  name(de).map(Some)
}
