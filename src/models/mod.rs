//! Core data models for Rolodex CLI
//!
//! This module contains the data structures that represent the contact
//! domain: validated phone numbers and birthdays, contact records, and the
//! address book that holds them.

pub mod birthday;
pub mod book;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use book::{AddressBook, Congratulation};
pub use phone::PhoneNumber;
pub use record::Record;
