//! Command definitions for the interactive shell
//!
//! Defines all commands the line dispatcher recognizes, with the usage
//! strings shown by the `list` command and by argument errors.

/// A command the shell dispatcher recognizes
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command name (what the user types)
    pub name: &'static str,
    /// Usage line, including argument placeholders
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
}

/// All available commands
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        usage: "hello",
        description: "Say hello",
    },
    CommandSpec {
        name: "add",
        usage: "add <name> <phone: 10 digits>",
        description: "Add a contact, or another phone for an existing one",
    },
    CommandSpec {
        name: "change",
        usage: "change <name> <old phone> <new phone>",
        description: "Replace a contact's phone number",
    },
    CommandSpec {
        name: "phone",
        usage: "phone <name>",
        description: "Show a contact's phone numbers",
    },
    CommandSpec {
        name: "all",
        usage: "all",
        description: "Show all contacts with details",
    },
    CommandSpec {
        name: "add-birthday",
        usage: "add-birthday <name> <DD.MM.YYYY>",
        description: "Add a birthday to a contact",
    },
    CommandSpec {
        name: "show-birthday",
        usage: "show-birthday <name>",
        description: "Show a contact's birthday",
    },
    CommandSpec {
        name: "birthdays",
        usage: "birthdays",
        description: "Show upcoming birthdays",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        description: "Show all commands and their format",
    },
    CommandSpec {
        name: "close",
        usage: "close | exit",
        description: "Save the book and quit",
    },
];

/// Look up a command by name
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Format the command table for the `list` command
pub fn format_help() -> String {
    let usage_width = COMMANDS
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for spec in COMMANDS {
        output.push_str(&format!(
            "{:<usage_width$}  - {}\n",
            spec.usage,
            spec.description,
            usage_width = usage_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert!(find("add").is_some());
        assert!(find("add-birthday").is_some());
        assert!(find("frobnicate").is_none());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = format_help();
        for spec in COMMANDS {
            assert!(help.contains(spec.usage));
            assert!(help.contains(spec.description));
        }
    }
}
