//! Console command parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_help_subcommand = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// A console command.
///
/// Commands taking an id carry `None` when the id was left off; the shell
/// then prompts for it, as the numbered menu entries do.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// View all items
    #[command(aliases = ["1", "view", "view-all", "all"])]
    List,
    /// Items that can be borrowed right now
    #[command(alias = "avail")]
    Available,
    /// Borrow an item
    #[command(aliases = ["2", "b"])]
    Borrow { id: Option<String> },
    /// Return an item
    #[command(aliases = ["3", "r"])]
    Return { id: Option<String> },
    /// Switch the active user
    #[command(name = "user", aliases = ["5", "select-user", "switch"])]
    SwitchUser { id: Option<String> },
    /// List registered users
    Users,
    /// Items held by the active user
    #[command(alias = "me")]
    Mine,
    /// Dump the catalog as JSON
    #[command(alias = "json")]
    Export,
    /// Show the menu again
    #[command(aliases = ["menu", "?"])]
    Help,
    /// Leave the shell
    #[command(aliases = ["4", "quit", "q"])]
    Exit,
}

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Blank,
    Command(Command),
    /// Anything that is not a known command, kept as typed
    Invalid(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Input::Blank;
        };

        // Command words are case-insensitive, arguments are passed as typed
        let args = std::iter::once(head.to_lowercase()).chain(words.map(str::to_string));
        match CommandLine::try_parse_from(args) {
            Ok(parsed) => Input::Command(parsed.command),
            Err(e) => {
                tracing::debug!("Unrecognised input {:?}: {:?}", line, e.kind());
                Input::Invalid(line.trim().to_string())
            }
        }
    }
}
