//! Phone number value object
//!
//! A type-safe wrapper that guarantees every stored phone number passed
//! validation at construction time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::RolodexError;

/// A validated phone number: exactly 10 ASCII digits.
///
/// The check runs on the raw string as given. No normalization is performed,
/// so separators like `-` or spaces are rejected rather than stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `RolodexError::InvalidPhone` if the input is not exactly
    /// 10 decimal digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, RolodexError> {
        let raw = raw.into();

        if !Self::is_valid(&raw) {
            return Err(RolodexError::InvalidPhone(raw));
        }

        Ok(Self(raw))
    }

    /// Validate phone format: exactly 10 ASCII digits.
    fn is_valid(raw: &str) -> bool {
        raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as a plain string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
