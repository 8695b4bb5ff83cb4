//! Business logic layer for Rolodex CLI
//!
//! Services bridge the command dispatcher and the data models.

pub mod contact;

pub use contact::{AddOutcome, ContactService};
