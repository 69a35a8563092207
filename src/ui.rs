// UI layer: the menu loop. Input is read through the `Prompt` trait
// (backed by `dialoguer` in the binary) and everything is printed to a
// writer, so a whole session can be scripted in tests.

use anyhow::{anyhow, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::InventoryError;
use crate::inventory::{DeleteOutcome, Inventory};
use crate::store::InventoryFile;

const MENU_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]";
const RULE: &str = "======================================";

/// Source of user input. One call is one line typed by the user.
pub trait Prompt {
    fn line(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal prompt backed by `dialoguer::Input`. Empty answers are allowed
/// so "press ENTER" prompts and blank titles work.
#[derive(Default)]
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn line(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Menu entries, keyed by the letter the user types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Load,
    Add,
    List,
    Delete,
    Save,
    Exit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" => Ok(Command::Load),
            "a" => Ok(Command::Add),
            "i" => Ok(Command::List),
            "d" => Ok(Command::Delete),
            "s" => Ok(Command::Save),
            "x" => Ok(Command::Exit),
            other => Err(anyhow!("unknown menu choice {other:?}")),
        }
    }
}

/// One interactive run: owns the inventory for the life of the process and
/// hands it to the store and the record operations by reference.
pub struct Session<P: Prompt, W: Write> {
    prompt: P,
    out: W,
    file: InventoryFile,
    inventory: Inventory,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(prompt: P, out: W, config: &Config) -> Self {
        Session {
            prompt,
            out,
            file: InventoryFile::new(&config.data_file),
            inventory: Inventory::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consume the session and return the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Pick up whatever was saved last time. Nothing is unsaved yet, so a
    /// failure here just leaves the inventory empty.
    pub fn load_on_start(&mut self) -> Result<()> {
        match self.load_snapshot() {
            Ok(inventory) => self.inventory = inventory,
            Err(InventoryError::FileNotFound { .. }) => {
                writeln!(
                    self.out,
                    "No saved inventory at {}, starting with an empty one.\n",
                    self.file.path().display()
                )?;
            }
            Err(e) => {
                self.report(&e)?;
                writeln!(self.out, "Starting with an empty inventory.\n")?;
            }
        }
        Ok(())
    }

    /// Show the menu and dispatch commands until the user picks exit.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let command = self.menu_choice()?;
            debug!(?command, "menu choice");
            match command {
                Command::Exit => break,
                Command::Load => self.handle_load()?,
                Command::Add => self.handle_add()?,
                Command::List => self.show_inventory()?,
                Command::Delete => self.handle_delete()?,
                Command::Save => self.handle_save()?,
            }
        }
        info!("session finished");
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Menu")?;
        writeln!(self.out, "[l] Load Inventory from file")?;
        writeln!(self.out, "[a] Add CD")?;
        writeln!(self.out, "[i] Display Current Inventory")?;
        writeln!(self.out, "[d] Delete CD from Inventory")?;
        writeln!(self.out, "[s] Save Inventory to file")?;
        writeln!(self.out, "[x] Exit")
    }

    /// Ask until the answer is one of the menu letters.
    fn menu_choice(&mut self) -> Result<Command> {
        let command = loop {
            let answer = self.prompt.line(MENU_PROMPT)?;
            if let Ok(command) = answer.parse::<Command>() {
                break command;
            }
        };
        writeln!(self.out)?;
        Ok(command)
    }

    fn show_inventory(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n======= The Current Inventory: =======")?;
        writeln!(self.out, "ID\tCD Title (by: Artist)\n")?;
        for record in self.inventory.records() {
            writeln!(self.out, "{record}")?;
        }
        writeln!(self.out, "{RULE}\n")
    }

    fn handle_load(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file."
        )?;
        let answer = self
            .prompt
            .line("Type 'yes' to continue and reload from file, otherwise reload will be canceled")?;
        if answer.trim().eq_ignore_ascii_case("yes") {
            writeln!(self.out, "reloading...")?;
            match self.load_snapshot() {
                Ok(inventory) => self.inventory = inventory,
                Err(e) => {
                    self.report(&e)?;
                    writeln!(self.out, "Inventory data NOT reloaded.")?;
                }
            }
        } else {
            self.prompt.line(
                "Canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
        }
        self.show_inventory()?;
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        let id = self.prompt.line("Enter ID")?;
        let title = self.prompt.line("What is the CD's title?")?;
        let artist = self.prompt.line("What is the Artist's name?")?;
        if let Err(e) = self.inventory.add(id.trim(), title.trim(), artist.trim()) {
            self.report(&e)?;
        }
        self.show_inventory()?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        self.show_inventory()?;
        let id = self.prompt.line("Which ID would you like to delete?")?;
        match self.inventory.delete(id.trim()) {
            Ok(DeleteOutcome::Found) => writeln!(self.out, "The CD was removed\n")?,
            Ok(DeleteOutcome::NotFound) => writeln!(self.out, "Could not find this CD!\n")?,
            Err(e) => self.report(&e)?,
        }
        self.show_inventory()?;
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        self.show_inventory()?;
        let answer = self.prompt.line("Save this inventory to file? [y/n]")?;
        if answer.trim().eq_ignore_ascii_case("y") {
            let spinner = spinner("Saving...");
            let saved = self.file.save(&self.inventory);
            spinner.finish_and_clear();
            match saved {
                Ok(()) => writeln!(
                    self.out,
                    "Inventory saved to {}\n",
                    self.file.path().display()
                )?,
                Err(e) => self.report(&e)?,
            }
        } else {
            writeln!(self.out, "The inventory was NOT saved to file.")?;
            self.prompt.line("Press [ENTER] to return to the menu.")?;
        }
        Ok(())
    }

    fn load_snapshot(&self) -> crate::error::Result<Inventory> {
        let spinner = spinner("Loading...");
        let loaded = self.file.load();
        spinner.finish_and_clear();
        loaded
    }

    fn report(&mut self, err: &InventoryError) -> io::Result<()> {
        match err {
            InventoryError::InvalidId { .. } => {
                writeln!(self.out, "Oops! ID must be an integer. Please try again.\n")
            }
            InventoryError::IdOutOfRange { .. } => {
                writeln!(self.out, "Oops! {err}. Please try again.\n")
            }
            other => writeln!(self.out, "Oops! {other}\n"),
        }
    }
}

/// Spinner shown while the snapshot file is read or written. It draws on
/// stderr and stays hidden when that is not a terminal.
fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Main interactive menu on the real terminal. Loads the saved inventory,
/// then loops until the user chooses exit.
pub fn main_menu(config: &Config) -> Result<()> {
    let mut session = Session::new(TermPrompt, io::stdout().lock(), config);
    session.load_on_start()?;
    session.run()
}
