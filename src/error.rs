//! Custom error types for Rolodex CLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Rolodex operations
#[derive(Error, Debug)]
pub enum RolodexError {
    /// Phone number failed validation (wrong length or non-digit characters)
    #[error("Invalid phone number '{0}': must be exactly 10 digits")]
    InvalidPhone(String),

    /// Birthday string failed to parse as a real calendar date
    #[error("Invalid date '{0}': use DD.MM.YYYY")]
    InvalidDate(String),

    /// A phone edit/find/remove targeted a number the contact doesn't have
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Attempt to set a birthday on a contact that already has one
    #[error("Birthday is already set")]
    BirthdayAlreadySet,

    /// A command required a contact that isn't in the book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RolodexError {
    /// Create a "contact not found" error
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::ContactNotFound(name.into())
    }

    /// Create a "phone not found" error
    pub fn phone_not_found(number: impl Into<String>) -> Self {
        Self::PhoneNotFound(number.into())
    }

    /// Check if this is a "not found" error (contact or phone)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }

    /// Check if this is a validation error (phone or date)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPhone(_) | Self::InvalidDate(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RolodexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RolodexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Rolodex operations
pub type RolodexResult<T> = Result<T, RolodexError>;
