//! Contact — the single persisted entity.
//!
//! A contact carries its store-assigned id plus three user-supplied fields.
//! [`NewContact`] is the id-less payload accepted by create and update; the
//! store assigns ids and never lets callers choose them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Store-assigned contact identifier. Positive, unique within a store,
/// allocated as one more than the current maximum.
pub type ContactId = u64;

/// A persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:    ContactId,
  pub name:  String,
  pub email: Option<String>,
  pub phone: String,
}

/// The id-less contact payload submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
  pub name:  String,
  pub email: Option<String>,
  pub phone: String,
}

impl NewContact {
  /// Check the field-level rules applied at the request boundary, before any
  /// store call: non-empty name, 7–15 phone digits, well-formed email.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::EmptyName);
    }

    validate_phone(&self.phone)?;

    if let Some(email) = &self.email {
      validate_email(email)?;
    }

    Ok(())
  }

  /// Apply this payload to an existing record, leaving the id untouched.
  pub fn apply_to(&self, contact: &mut Contact) {
    contact.name = self.name.clone();
    contact.email = self.email.clone();
    contact.phone = self.phone.clone();
  }
}

/// A phone number is 7–15 digits once common separators are stripped.
/// Anything other than digits and `+ - ( ) .` or spaces is rejected.
fn validate_phone(phone: &str) -> Result<()> {
  let mut digits = 0usize;
  for c in phone.chars() {
    match c {
      '0'..='9' => digits += 1,
      '+' | '-' | '(' | ')' | '.' | ' ' => {}
      _ => return Err(Error::InvalidPhone(phone.to_string())),
    }
  }
  if !(7..=15).contains(&digits) {
    return Err(Error::InvalidPhone(phone.to_string()));
  }
  Ok(())
}

/// Minimal well-formedness check: exactly one `@`, non-empty local part, and
/// a dot somewhere inside the domain.
fn validate_email(email: &str) -> Result<()> {
  let mut parts = email.split('@');
  let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
    (Some(l), Some(d), None) => (l, d),
    _ => return Err(Error::InvalidEmail(email.to_string())),
  };
  if local.is_empty()
    || domain.len() < 3
    || !domain.contains('.')
    || domain.starts_with('.')
    || domain.ends_with('.')
  {
    return Err(Error::InvalidEmail(email.to_string()));
  }
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
