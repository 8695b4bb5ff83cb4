//! The address book
//!
//! A thin wrapper over a name-to-record map exposing only domain operations,
//! including the upcoming-birthdays query.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

use crate::models::Record;

/// One entry of the upcoming-birthdays result: who to congratulate, and when.
///
/// The date is the birthday's occurrence after weekend shifting, so it always
/// falls on a weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Congratulation {
    pub name: String,
    pub date: NaiveDate,
}

/// All contacts, keyed by name.
///
/// Name-ordered iteration makes listings and the birthday query
/// deterministic. Adding a record under an existing name replaces it
/// (last write wins).
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. An existing entry under the same
    /// name is replaced.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.clone(), record);
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`; no-op if absent
    pub fn delete(&mut self, name: &str) {
        self.records.remove(name);
    }

    /// Number of contacts in the book
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no contacts
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose birthdays fall within `window_days` of `today`
    /// (inclusive on both ends).
    ///
    /// Each birthday is mapped to its occurrence this year, or next year if
    /// this year's has already passed. Occurrences landing on Saturday shift
    /// forward 2 days and Sunday 1 day, so every congratulation date is a
    /// weekday. Records without a birthday are skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<Congratulation> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday else {
                continue;
            };

            let mut occurrence = birthday.occurrence_in(today.year());
            if occurrence < today {
                occurrence = birthday.occurrence_in(today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if !(0..=window_days).contains(&days_until) {
                continue;
            }

            let date = match occurrence.weekday() {
                Weekday::Sat => occurrence + Duration::days(2),
                Weekday::Sun => occurrence + Duration::days(1),
                _ => occurrence,
            };

            upcoming.push(Congratulation {
                name: record.name.clone(),
                date,
            });
        }

        upcoming
    }
}
