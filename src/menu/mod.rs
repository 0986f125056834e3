pub mod command;
pub mod render;

pub use command::Command;

use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, Error, Result};
use command::strip_line_ending;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// Interactive menu over a loaded dictionary.
///
/// Input, output and the random source are injected so the whole loop can
/// be driven from tests.
pub struct Session<'a, I, O, G> {
    dictionary: &'a Dictionary,
    input: I,
    output: O,
    rng: G,
    state: MenuState,
}

impl<'a, I, O, G> Session<'a, I, O, G>
where
    I: BufRead,
    O: Write,
    G: Rng,
{
    pub fn new(dictionary: &'a Dictionary, input: I, output: O, rng: G) -> Self {
        Self {
            dictionary,
            input,
            output,
            rng,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        while self.state == MenuState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Show the menu once, read a choice and act on it
    pub fn step(&mut self) -> Result<MenuState> {
        if self.state == MenuState::Terminated {
            return Ok(self.state);
        }

        render::write_menu(&mut self.output)?;
        write!(self.output, "Enter your choice (1-3): ")?;
        self.output.flush()?;

        let Some(choice) = self.read_line()? else {
            debug!("Input closed, leaving menu");
            self.state = MenuState::Terminated;
            return Ok(self.state);
        };

        match Command::parse(&choice) {
            Some(command) => {
                debug!("Dispatching {:?}", command);
                self.dispatch(command)?;
            }
            None => writeln!(self.output, "Invalid option! Please try again.")?,
        }

        self.output.flush()?;
        Ok(self.state)
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Search => self.search(),
            Command::RandomWord => self.random_word(),
            Command::Exit => {
                writeln!(self.output, "Thank you, Goodbye!")?;
                self.state = MenuState::Terminated;
                Ok(())
            }
        }
    }

    fn search(&mut self) -> Result<()> {
        write!(self.output, "\nEnter a word to search for: ")?;
        self.output.flush()?;

        let query = self.read_line()?.unwrap_or_default();
        match self.dictionary.search(&query) {
            Some(entry) => render::write_entry(&mut self.output, "Word", entry)?,
            None => writeln!(self.output, "Word not found.\n")?,
        }
        Ok(())
    }

    fn random_word(&mut self) -> Result<()> {
        match self.dictionary.random_entry(&mut self.rng) {
            Ok(entry) => render::write_entry(&mut self.output, "Random Word", entry)?,
            Err(Error::Dictionary(DictionaryError::EmptyDictionary)) => writeln!(
                self.output,
                "Dictionary is empty - no random word available.\n"
            )?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Next input line without its terminator, `None` at end of input.
    /// Invalid UTF-8 is decoded lossily.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}
