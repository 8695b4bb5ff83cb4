//! Contact display formatting
//!
//! Formats the address book and the upcoming-birthday listing for terminal
//! output.

use crate::models::{AddressBook, Congratulation, PhoneNumber};

/// Format all contacts as a table
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.\n".to_string();
    }

    let rows: Vec<(String, String, String)> = book
        .records()
        .map(|record| {
            let phones = record
                .phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            let birthday = record
                .birthday
                .map(|b| b.to_string())
                .unwrap_or_default();
            (record.name.clone(), phones, birthday)
        })
        .collect();

    // Calculate column widths
    let name_width = rows
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let phones_width = rows
        .iter()
        .map(|(_, phones, _)| phones.len())
        .max()
        .unwrap_or(6)
        .max(6);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<phones_width$}  {}\n",
        "Name",
        "Phones",
        "Birthday",
        name_width = name_width,
        phones_width = phones_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:-<phones_width$}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
        phones_width = phones_width,
    ));

    // Contact rows
    for (name, phones, birthday) in &rows {
        output.push_str(&format!(
            "{:<name_width$}  {:<phones_width$}  {}\n",
            name,
            phones,
            birthday,
            name_width = name_width,
            phones_width = phones_width,
        ));
    }

    output
}

/// Format the upcoming-birthday listing, one contact per line
pub fn format_birthdays(upcoming: &[Congratulation]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays found.\n".to_string();
    }

    let mut output = String::new();
    for congratulation in upcoming {
        output.push_str(&format!(
            "{}: {}\n",
            congratulation.name,
            congratulation.date.format("%d.%m.%Y")
        ));
    }

    output
}
