use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Primary key of a contact. Always a positive integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Accept a caller-supplied id; zero and negatives are rejected.
    pub fn new(raw: i64) -> Result<Self, ModelError> {
        if raw <= 0 {
            return Err(ModelError::Validation(format!("id must be greater than 0, got {raw}")));
        }
        Ok(Self(raw as u64))
    }

    /// Parse a document key. Only the canonical decimal form is accepted:
    /// ASCII digits, no sign, no leading zero, value above zero.
    pub fn from_canonical_key(key: &str) -> Result<Self, ModelError> {
        let canonical = !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_digit())
            && !key.starts_with('0');
        if !canonical {
            return Err(ModelError::Integrity(format!("non-canonical contact key {key:?}")));
        }
        key.parse::<u64>()
            .map(Self)
            .map_err(|_| ModelError::Integrity(format!("contact key {key:?} out of range")))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value stored under each key of the contact document. Extra fields would be
/// lost on the next save, so they fail the load instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
}

/// A validated contact ready to be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn into_parts(self) -> (ContactId, ContactRecord) {
        (self.id, ContactRecord { name: self.name, phone: self.phone })
    }
}

/// Create payload as received from callers, before validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewContact {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

impl NewContact {
    pub fn validate(self) -> Result<Contact, ModelError> {
        let id = ContactId::new(self.id)?;
        let name = required_trimmed("name", &self.name)?;
        let phone = required_trimmed("phone", &self.phone)?;
        Ok(Contact { id, name, phone })
    }
}

/// Update payload; only the phone number may change after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub phone: String,
}

impl ContactUpdate {
    /// Returns the trimmed phone number.
    pub fn validate(self) -> Result<String, ModelError> {
        required_trimmed("phone", &self.phone)
    }
}

fn required_trimmed(field: &str, value: &str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
