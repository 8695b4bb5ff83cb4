//! Contact service
//!
//! Command-level operations over the address book. Commands that require an
//! existing contact get their missing-contact mapping here; the book itself
//! treats an absent name as an ordinary `None`.

use chrono::NaiveDate;

use crate::error::{RolodexError, RolodexResult};
use crate::models::{AddressBook, Congratulation, PhoneNumber, Record};

/// What `add_contact` did with the name it was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created
    Added,
    /// The phone was appended to an existing contact
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Add a phone to a contact, creating the contact if needed
    ///
    /// The phone is validated before the book is touched, so a bad number for
    /// an unknown name does not leave an empty record behind.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> RolodexResult<AddOutcome> {
        // Validate up front; Record::add_phone would accept the raw string
        // too, but only after a new record had been created.
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.book.find_mut(name) {
            record.phones.push(phone);
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(name);
        record.phones.push(phone);
        self.book.add_record(record);
        Ok(AddOutcome::Added)
    }

    /// Replace one of a contact's phone numbers
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> RolodexResult<()> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))?;

        record.edit_phone(old, new)
    }

    /// Look up a contact, failing if it doesn't exist
    pub fn contact(&self, name: &str) -> RolodexResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))
    }

    /// Set a contact's birthday from `DD.MM.YYYY` input
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> RolodexResult<()> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))?;

        record.add_birthday(birthday)
    }

    /// Remove a contact; no-op if absent
    pub fn remove_contact(&mut self, name: &str) {
        self.book.delete(name);
    }

    /// Contacts to congratulate within the window starting at `today`
    pub fn upcoming(&self, today: NaiveDate, window_days: i64) -> Vec<Congratulation> {
        self.book.upcoming_birthdays(today, window_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_contact_creates_then_updates() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        assert_eq!(
            service.add_contact("Alice", "1234567890").unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            service.add_contact("Alice", "0987654321").unwrap(),
            AddOutcome::Updated
        );

        let alice = book.find("Alice").unwrap();
        assert_eq!(alice.phones.len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let result = service.add_contact("Alice", "123");
        assert!(matches!(result, Err(RolodexError::InvalidPhone(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        service.add_contact("Alice", "1234567890").unwrap();
        service
            .change_phone("Alice", "1234567890", "0987654321")
            .unwrap();

        assert_eq!(book.find("Alice").unwrap().phones[0].as_str(), "0987654321");
    }

    #[test]
    fn test_change_phone_unknown_contact() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        let result = service.change_phone("Ghost", "1234567890", "0987654321");
        assert!(matches!(result, Err(RolodexError::ContactNotFound(_))));
    }

    #[test]
    fn test_change_phone_unknown_number() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        service.add_contact("Alice", "1234567890").unwrap();
        let result = service.change_phone("Alice", "0000000000", "0987654321");
        assert!(matches!(result, Err(RolodexError::PhoneNotFound(_))));
    }

    #[test]
    fn test_contact_lookup() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        service.add_contact("Alice", "1234567890").unwrap();

        assert!(service.contact("Alice").is_ok());
        assert!(matches!(
            service.contact("Ghost"),
            Err(RolodexError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_add_birthday() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        service.add_contact("Alice", "1234567890").unwrap();
        service.add_birthday("Alice", "12.06.1990").unwrap();

        assert!(matches!(
            service.add_birthday("Alice", "01.01.1991"),
            Err(RolodexError::BirthdayAlreadySet)
        ));
        assert!(matches!(
            service.add_birthday("Ghost", "12.06.1990"),
            Err(RolodexError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_remove_contact() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        service.add_contact("Alice", "1234567890").unwrap();
        service.remove_contact("Alice");
        service.remove_contact("Alice"); // absent: no-op

        assert!(book.is_empty());
    }

    #[test]
    fn test_upcoming_delegates_to_book() {
        let mut book = AddressBook::new();
        let mut service = ContactService::new(&mut book);

        service.add_contact("Alice", "1234567890").unwrap();
        service.add_birthday("Alice", "12.06.1990").unwrap();

        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let upcoming = service.upcoming(today, 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Alice");
    }
}
