//! Group records. Contacts join groups through
//! [`Subscription`](crate::subscription::Subscription)s.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  validate::{self, GROUP_NAME_MAX},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  pub id:         i64,
  pub group_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewGroup {
  pub group_name: String,
}

impl NewGroup {
  pub fn new(group_name: impl Into<String>) -> Self {
    Self { group_name: group_name.into() }
  }

  pub fn validate(&self) -> Result<()> {
    validate::required("group_name", &self.group_name, GROUP_NAME_MAX)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupPatch {
  #[serde(default, deserialize_with = "validate::given")]
  pub group_name: Option<String>,
}

impl GroupPatch {
  pub fn is_empty(&self) -> bool { self.group_name.is_none() }

  pub fn validate(&self) -> Result<()> {
    match &self.group_name {
      Some(name) => validate::required("group_name", name, GROUP_NAME_MAX),
      None => Ok(()),
    }
  }

  pub fn apply_to(self, group: &mut Group) {
    if let Some(group_name) = self.group_name {
      group.group_name = group_name;
    }
  }
}
