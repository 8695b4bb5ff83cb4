//! Contact record
//!
//! One contact: a name, an ordered list of phone numbers, and an optional
//! birthday. The record owns both; callers mutate through the operations
//! below so the validation invariants hold.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RolodexError, RolodexResult};
use crate::models::{Birthday, PhoneNumber};

/// A single contact in the address book.
///
/// The name doubles as the book key and is never empty (the command loop
/// only produces non-empty tokens). Duplicate phone numbers are allowed and
/// order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Contact name (unique key within the book)
    pub name: String,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, set at most once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, raw: &str) -> RolodexResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new` number
    ///
    /// The replacement is validated before the list is searched, so a
    /// malformed `new` number reports `InvalidPhone` and leaves the list
    /// untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RolodexResult<()> {
        let replacement = PhoneNumber::new(new)?;

        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| RolodexError::phone_not_found(old))?;

        self.phones[position] = replacement;
        Ok(())
    }

    /// Find the first phone equal to `value`
    pub fn find_phone(&self, value: &str) -> RolodexResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == value)
            .ok_or_else(|| RolodexError::phone_not_found(value))
    }

    /// Remove the first phone equal to `value`
    pub fn remove_phone(&mut self, value: &str) -> RolodexResult<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| RolodexError::phone_not_found(value))?;

        self.phones.remove(position);
        Ok(())
    }

    /// Set the birthday from `DD.MM.YYYY` input
    ///
    /// The birthday can be set at most once; a second attempt fails with
    /// `BirthdayAlreadySet` and leaves the first value unchanged.
    pub fn add_birthday(&mut self, raw: &str) -> RolodexResult<()> {
        if self.birthday.is_some() {
            return Err(RolodexError::BirthdayAlreadySet);
        }

        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
