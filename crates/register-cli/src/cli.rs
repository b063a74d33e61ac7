use clap::Parser;

/// One-line usage shown when the command is missing or unknown
pub const USAGE: &str = "Usage: appointments [view_all | add | delete | search]";

/// Main CLI structure
///
/// The command is a plain positional string rather than a clap subcommand so
/// that a missing command and an unknown command can be answered with the
/// register's own usage line and exit codes.
#[derive(Parser, Debug)]
#[command(name = "appointments")]
#[command(about = "Keep a register of patient appointments in appointments.txt")]
#[command(version)]
pub struct Cli {
    /// Operation to run: view_all, add, delete or search
    pub command: Option<String>,
}

/// Operations the register supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print every appointment
    ViewAll,
    /// Prompt for a new appointment and save it
    Add,
    /// Prompt for a patient number and remove that appointment
    Delete,
    /// Prompt for a patient number and print that appointment
    Search,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::ViewAll,
        Command::Add,
        Command::Delete,
        Command::Search,
    ];

    /// Look up a command by the name typed on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::ViewAll => "view_all",
            Command::Add => "add",
            Command::Delete => "delete",
            Command::Search => "search",
        }
    }
}
