use std::io::{self, Write};

use crate::dictionary::{Dictionary, WordEntry};
use crate::error::{DictionaryError, Error, Result};

pub const BANNER: &str = "Welcome to the Dictionary Application...";
pub const RULE: &str = "-----------------------------------------";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", RULE)
}

/// Startup message for the outcome of `Dictionary::open`
pub fn write_load_status<W: Write>(out: &mut W, loaded: &Result<Dictionary>) -> io::Result<()> {
    match loaded {
        Ok(_) => writeln!(out, "Dictionary loaded Successfully!\n"),
        Err(Error::Dictionary(DictionaryError::EmptyDictionary)) => {
            writeln!(out, "Dictionary loaded but its empty!")
        }
        Err(_) => writeln!(out, "Error - dictionary empty!"),
    }
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--------Main Menu---------")?;
    writeln!(out, "1. Search for a word")?;
    writeln!(out, "2. Display a random word")?;
    writeln!(out, "3. Exit")
}

/// Full record, headed by `label` ("Word" or "Random Word")
pub fn write_entry<W: Write>(out: &mut W, label: &str, entry: &WordEntry) -> io::Result<()> {
    writeln!(out, "\n{} - {}", label, entry.name)?;
    writeln!(out, "Type - {}", entry.abbreviation())?;
    writeln!(out, "Definitions -")?;
    for (i, definition) in entry.definitions.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, definition)?;
    }
    writeln!(out)
}
