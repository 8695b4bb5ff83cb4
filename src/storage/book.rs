//! Address book repository for JSON storage
//!
//! Loads and saves the whole address book as one snapshot in contacts.json.

use std::path::PathBuf;

use crate::error::RolodexError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Serializable snapshot of the address book
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BookData {
    contacts: Vec<Record>,
}

/// Repository for address book persistence
pub struct BookRepository {
    path: PathBuf,
}

impl BookRepository {
    /// Create a new repository backed by the given snapshot file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the address book from disk
    ///
    /// A missing snapshot yields an empty book; a present but unreadable
    /// snapshot is an error.
    pub fn load(&self) -> Result<AddressBook, RolodexError> {
        let data: BookData = read_json(&self.path)?;

        let mut book = AddressBook::new();
        for record in data.contacts {
            book.add_record(record);
        }

        Ok(book)
    }

    /// Save the address book to disk as one snapshot
    pub fn save(&self, book: &AddressBook) -> Result<(), RolodexError> {
        let data = BookData {
            contacts: book.records().cloned().collect(),
        };

        write_json_atomic(&self.path, &data)
    }
}
