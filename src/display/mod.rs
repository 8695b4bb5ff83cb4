//! Terminal output formatting for Rolodex CLI
//!
//! Pure string producers; the command loop decides what to print.

pub mod contact;

pub use contact::{format_birthdays, format_contact_list};
