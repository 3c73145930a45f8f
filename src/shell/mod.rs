//! Interactive console shell over a [`Catalog`]
//!
//! The shell reads one command per line from any `BufRead` and writes all
//! feedback to any `Write`, so the binary drives it with stdin/stdout and
//! tests drive it with in-memory buffers.

pub mod commands;

use std::io::{BufRead, Write};

pub use commands::{Command, Input};

use crate::{
    error::{AppError, AppResult},
    models::ItemFilter,
    services::{Catalog, UserSelection},
};

const BANNER: &str = "\
=====================================
   WELCOME TO THE LIBRARY OF STUFF
=====================================";

const MENU: &str = "\
1. View All Items
2. Borrow Item
3. Return Item
4. Exit
5. Switch User
(or type: available, users, mine, export, help)";

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
    /// User to log in as instead of prompting
    preselected: Option<String>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            preselected: None,
        }
    }

    /// Log in as the given user before the session starts, skipping the login prompt
    pub fn preselect_user(&mut self, user_id: &str) {
        self.preselected = Some(user_id.to_string());
    }

    /// Run the command loop until `exit` or end of input
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", BANNER)?;

        match self.preselected.take() {
            Some(user_id) => self.switch_user(&user_id)?,
            None => self.login()?,
        }

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(line) = self.prompt("Choose: ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                break;
            };

            let command = match Input::parse(&line) {
                Input::Blank => continue,
                Input::Invalid(_) => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
                Input::Command(command) => command,
            };
            tracing::debug!("Command: {:?}", command);

            match self.execute(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Command failed with code {:?}: {}", e.code(), e);
                    writeln!(self.output, "{}", feedback(&e))?;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> AppResult<Flow> {
        match command {
            Command::List => self.print_all_items()?,
            Command::Available => self.print_available_items()?,
            Command::Borrow { id } => return self.borrow(id),
            Command::Return { id } => return self.return_item(id),
            Command::SwitchUser { id } => {
                let id = match id {
                    Some(id) => id,
                    None => match self.ask_user_id()? {
                        Some(id) => id,
                        None => return self.goodbye(),
                    },
                };
                self.switch_user(&id)?;
            }
            Command::Users => self.print_users()?,
            Command::Mine => self.print_mine()?,
            Command::Export => {
                let json = serde_json::to_string_pretty(&self.catalog.snapshot()?)?;
                writeln!(self.output, "{}", json)?;
            }
            Command::Help => writeln!(self.output, "\n{}", MENU)?,
            Command::Exit => return self.goodbye(),
        }
        Ok(Flow::Continue)
    }

    fn login(&mut self) -> AppResult<()> {
        // End of input here still logs in the default user
        let id = self.ask_user_id()?.unwrap_or_default();
        self.switch_user(&id)
    }

    fn ask_user_id(&mut self) -> AppResult<Option<String>> {
        writeln!(self.output, "\n--- User Selection ---")?;
        for user in self.catalog.list_users() {
            writeln!(self.output, "- {}", user)?;
        }
        self.prompt("Enter User ID to login: ")
    }

    fn switch_user(&mut self, user_id: &str) -> AppResult<()> {
        let selection = self.catalog.set_active_user(user_id);
        let name = self.catalog.active_user()?.name().to_string();
        match selection {
            UserSelection::Matched => writeln!(self.output, "Welcome, {}!", name)?,
            UserSelection::Defaulted => {
                writeln!(self.output, "User not found. Defaulting to {}.", name)?
            }
        }
        Ok(())
    }

    fn borrow(&mut self, id: Option<String>) -> AppResult<Flow> {
        let id = match id {
            Some(id) => id,
            None => {
                writeln!(self.output, "\n--- Borrow an Item ---")?;
                for item in self.catalog.filter_items(ItemFilter::Available) {
                    writeln!(self.output, "{}: {}", item.id(), item.name())?;
                }
                match self.prompt("Enter ID to borrow: ")? {
                    Some(id) => id,
                    None => return self.goodbye(),
                }
            }
        };
        if id.is_empty() {
            writeln!(self.output, "No item selected.")?;
            return Ok(Flow::Continue);
        }

        let user_id = self.catalog.active_user()?.id().to_string();
        let award = self.catalog.lending().loyalty_points_per_borrow;
        let name = self.catalog.borrow_item(&id, &user_id)?.name().to_string();
        writeln!(
            self.output,
            "Success! You borrowed {}. You earned {} loyalty points!",
            name, award
        )?;
        Ok(Flow::Continue)
    }

    fn return_item(&mut self, id: Option<String>) -> AppResult<Flow> {
        let user_id = self.catalog.active_user()?.id().to_string();

        let id = match id {
            Some(id) => id,
            None => {
                let held = self.catalog.held_items(&user_id)?;
                if held.is_empty() {
                    writeln!(self.output, "You have no items to return.")?;
                    return Ok(Flow::Continue);
                }
                for item in held {
                    writeln!(self.output, "{}: {}", item.id(), item.name())?;
                }
                match self.prompt("Enter ID to return: ")? {
                    Some(id) => id,
                    None => return self.goodbye(),
                }
            }
        };
        if id.is_empty() {
            writeln!(self.output, "No item selected.")?;
            return Ok(Flow::Continue);
        }

        self.catalog.return_item(&id, &user_id)?;
        writeln!(self.output, "Item returned successfully.")?;
        Ok(Flow::Continue)
    }

    fn print_all_items(&mut self) -> AppResult<()> {
        for item in self.catalog.list_items() {
            write!(self.output, "{}", item.describe())?;
        }
        Ok(())
    }

    fn print_available_items(&mut self) -> AppResult<()> {
        let available = self.catalog.filter_items(ItemFilter::Available);
        if available.is_empty() {
            writeln!(self.output, "Nothing is available right now.")?;
        }
        for item in available {
            writeln!(self.output, "{}", item.summary())?;
        }
        Ok(())
    }

    fn print_users(&mut self) -> AppResult<()> {
        let active = self.catalog.active_user()?.id();
        for user in self.catalog.list_users() {
            let marker = if user.id() == active { " (active)" } else { "" };
            writeln!(self.output, "- {}{}", user, marker)?;
        }
        Ok(())
    }

    fn print_mine(&mut self) -> AppResult<()> {
        let user = self.catalog.active_user()?;
        writeln!(self.output, "{}", user.summary())?;

        let held = self.catalog.held_items(user.id())?;
        if held.is_empty() {
            writeln!(self.output, "You are not holding any items.")?;
        }
        for item in held {
            match item.loan() {
                Some(loan) => writeln!(
                    self.output,
                    "- {} (since {})",
                    item.summary(),
                    loan.date.format("%Y-%m-%d %H:%M UTC")
                )?,
                None => writeln!(self.output, "- {}", item.summary())?,
            }
        }
        Ok(())
    }

    fn goodbye(&mut self) -> AppResult<Flow> {
        writeln!(self.output, "Goodbye!")?;
        Ok(Flow::Exit)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Feedback line shown for a failed command
fn feedback(err: &AppError) -> String {
    match err {
        AppError::ItemNotFound(id) => format!("No item found with ID '{}'.", id),
        AppError::ItemUnavailable(_) => "Item is not available.".to_string(),
        AppError::ItemNotOnLoan(id) => format!("Item {} is not on loan.", id),
        AppError::NotBorrower { item_id, .. } => {
            format!("Item {} is on loan to someone else.", item_id)
        }
        AppError::UserNotFound(id) => format!("User '{}' not found.", id),
        other => format!("Error: {}", other),
    }
}
