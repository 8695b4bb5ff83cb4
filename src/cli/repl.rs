//! The read-eval-print loop
//!
//! Reads a line at a time, splits it into a command token (lowercased) and
//! positional arguments, and routes to the service layer. Every domain error
//! maps to a message and the loop continues; only `close`/`exit` (or end of
//! input) ends the session, saving the book on the way out.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::config::Settings;
use crate::display::{format_birthdays, format_contact_list};
use crate::error::{RolodexError, RolodexResult};
use crate::models::AddressBook;
use crate::services::{AddOutcome, ContactService};
use crate::storage::BookRepository;

use super::commands;

/// Run the interactive shell until `close`/`exit` or end of input
pub fn run(
    book: &mut AddressBook,
    repository: &BookRepository,
    settings: &Settings,
) -> RolodexResult<()> {
    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{}", settings.prompt);
        io::stdout().flush()?;

        line.clear();
        let bytes_read = stdin.lock().read_line(&mut line)?;

        // End of input behaves like `exit` so piped sessions still save
        let quit = bytes_read == 0
            || match parse_input(&line) {
                Some((command, args)) => {
                    if matches!(command.as_str(), "close" | "exit") {
                        true
                    } else {
                        print!("{}", execute(&command, &args, book, settings));
                        false
                    }
                }
                None => false,
            };

        if quit {
            repository.save(book)?;
            println!("Good bye!");
            return Ok(());
        }
    }
}

/// Split a line into a lowercased command token and its arguments
///
/// Returns `None` for blank input. Argument case is preserved.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Execute one command and produce the text to print
fn execute(command: &str, args: &[String], book: &mut AddressBook, settings: &Settings) -> String {
    match command {
        "hello" => "How can I help you?\n".to_string(),

        "add" => match args {
            [name, phone, ..] => match ContactService::new(book).add_contact(name, phone) {
                Ok(AddOutcome::Added) => "Contact added.\n".to_string(),
                Ok(AddOutcome::Updated) => "Contact updated.\n".to_string(),
                Err(err) => report(&err),
            },
            _ => usage("add"),
        },

        "change" => match args {
            [name, old, new] => match ContactService::new(book).change_phone(name, old, new) {
                Ok(()) => "Contact changed.\n".to_string(),
                Err(err) => report(&err),
            },
            _ => usage("change"),
        },

        "phone" => match args {
            [name] => match ContactService::new(book).contact(name) {
                Ok(record) => format!("{}\n", record),
                Err(err) => report(&err),
            },
            _ => usage("phone"),
        },

        "all" => format_contact_list(book),

        "add-birthday" => match args {
            [name, date] => match ContactService::new(book).add_birthday(name, date) {
                Ok(()) => "Birthday added.\n".to_string(),
                Err(err) => report(&err),
            },
            _ => usage("add-birthday"),
        },

        "show-birthday" => match args {
            [name] => match ContactService::new(book).contact(name) {
                Ok(record) => format!("{}\n", record),
                Err(err) => report(&err),
            },
            _ => usage("show-birthday"),
        },

        "birthdays" => {
            if book.is_empty() {
                "No contacts.\n".to_string()
            } else {
                let today = Local::now().date_naive();
                let upcoming =
                    ContactService::new(book).upcoming(today, settings.birthday_window_days);
                format_birthdays(&upcoming)
            }
        }

        "list" => commands::format_help(),

        _ => "Invalid command. Enter 'list' to see all commands and their format.\n".to_string(),
    }
}

/// Map a domain error to a user-facing message
fn report(err: &RolodexError) -> String {
    match err {
        RolodexError::ContactNotFound(name) => format!(
            "Contact '{}' doesn't exist. To add it use the 'add' command.\n",
            name
        ),
        _ => format!(
            "{}. Enter 'list' to see all commands and their format.\n",
            err
        ),
    }
}

/// Message for a command called with the wrong number of arguments
fn usage(name: &str) -> String {
    match commands::find(name) {
        Some(spec) => format!("Invalid arguments. Format: {}.\n", spec.usage),
        None => "Invalid arguments. Enter 'list' to see all commands and their format.\n"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_input_lowercases_command_only() {
        let (command, args) = parse_input("ADD Alice 1234567890").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \n").is_none());
    }

    #[test]
    fn test_parse_input_splits_on_whitespace() {
        let (command, args) = parse_input("  change   Bob  1111111111 2222222222 \n").unwrap();
        assert_eq!(command, "change");
        assert_eq!(args, ["Bob", "1111111111", "2222222222"]);
    }

    #[test]
    fn test_add_then_update() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        let output = execute("add", &args(&["Alice", "1234567890"]), &mut book, &settings);
        assert_eq!(output, "Contact added.\n");

        let output = execute("add", &args(&["Alice", "0987654321"]), &mut book, &settings);
        assert_eq!(output, "Contact updated.\n");
    }

    #[test]
    fn test_add_invalid_phone_reports_and_keeps_book_clean() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        let output = execute("add", &args(&["Alice", "123"]), &mut book, &settings);
        assert!(output.contains("must be exactly 10 digits"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_with_missing_args() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        let output = execute("add", &args(&["Alice"]), &mut book, &settings);
        assert_eq!(
            output,
            "Invalid arguments. Format: add <name> <phone: 10 digits>.\n"
        );
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        let output = execute(
            "change",
            &args(&["Ghost", "1111111111", "2222222222"]),
            &mut book,
            &settings,
        );
        assert_eq!(
            output,
            "Contact 'Ghost' doesn't exist. To add it use the 'add' command.\n"
        );
    }

    #[test]
    fn test_phone_shows_record() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        execute("add", &args(&["Alice", "1234567890"]), &mut book, &settings);
        let output = execute("phone", &args(&["Alice"]), &mut book, &settings);
        assert_eq!(
            output,
            "Contact name: Alice, phones: 1234567890, birthday: \n"
        );
    }

    #[test]
    fn test_all_on_empty_book() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        assert_eq!(execute("all", &[], &mut book, &settings), "No contacts.\n");
    }

    #[test]
    fn test_birthday_flow() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        execute("add", &args(&["Alice", "1234567890"]), &mut book, &settings);

        let output = execute(
            "add-birthday",
            &args(&["Alice", "12.06.1990"]),
            &mut book,
            &settings,
        );
        assert_eq!(output, "Birthday added.\n");

        let output = execute(
            "add-birthday",
            &args(&["Alice", "01.01.1991"]),
            &mut book,
            &settings,
        );
        assert!(output.contains("Birthday is already set"));

        let output = execute("show-birthday", &args(&["Alice"]), &mut book, &settings);
        assert!(output.contains("12.06.1990"));
    }

    #[test]
    fn test_birthdays_on_empty_book() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        assert_eq!(
            execute("birthdays", &[], &mut book, &settings),
            "No contacts.\n"
        );
    }

    #[test]
    fn test_birthdays_lists_contact_with_birthday_tomorrow() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        // 1992 is a leap year, so a Feb 29 "tomorrow" still parses
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let birthday = tomorrow.format("%d.%m.1992").to_string();

        execute("add", &args(&["Alice", "1234567890"]), &mut book, &settings);
        execute(
            "add-birthday",
            &args(&["Alice", &birthday]),
            &mut book,
            &settings,
        );

        let output = execute("birthdays", &[], &mut book, &settings);
        assert!(output.contains("Alice"));
    }

    #[test]
    fn test_hello() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        assert_eq!(
            execute("hello", &[], &mut book, &settings),
            "How can I help you?\n"
        );
    }

    #[test]
    fn test_invalid_command() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        let output = execute("frobnicate", &[], &mut book, &settings);
        assert!(output.contains("Invalid command"));
    }

    #[test]
    fn test_list_shows_help() {
        let mut book = AddressBook::new();
        let settings = Settings::default();

        let output = execute("list", &[], &mut book, &settings);
        assert!(output.contains("add-birthday <name> <DD.MM.YYYY>"));
    }
}
