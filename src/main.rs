use anyhow::Result;
use clap::{Parser, Subcommand};

use rolodex::cli::repl;
use rolodex::config::{paths::RolodexPaths, settings::Settings};
use rolodex::storage::BookRepository;

#[derive(Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Terminal-based contact book with birthday reminders",
    long_about = "Rolodex is a terminal-based contact book. It stores names, \
                  phone numbers, and birthdays, keeps them in a JSON snapshot \
                  on disk, and tells you whose birthdays are coming up \
                  (weekend dates shift to the following Monday)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive shell (default when no command is given)
    #[command(alias = "repl")]
    Shell,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RolodexPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Rolodex Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Contacts file:    {}", paths.contacts_file().display());
            println!();
            println!("Settings:");
            println!("  Birthday window: {} days", settings.birthday_window_days);
        }
        Some(Commands::Shell) | None => {
            paths.ensure_directories()?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            let repository = BookRepository::new(paths.contacts_file());
            let mut book = repository.load()?;

            repl::run(&mut book, &repository, &settings)?;
        }
    }

    Ok(())
}
