//! Parser for the three-line dictionary format:
//!
//! ```text
//! <name>;
//! <type>;
//! <definition1>;<definition2>;...;
//! ```
//!
//! Malformed lines are dropped one at a time. A bad name line only costs that
//! line, while a bad type line costs the pending name and the parser retries
//! the following line as a new name.

use std::io::BufRead;
use tracing::{debug, warn};

use super::entry::WordEntry;

const SEPARATOR: char = ';';

/// Parse every complete record from `reader`, in file order
pub fn parse_entries<R: BufRead>(reader: R) -> Vec<WordEntry> {
    let mut lines = NumberedLines::new(reader);
    let mut entries = Vec::new();

    while let Some((number, raw)) = lines.next() {
        let line = raw.trim_start_matches(|c: char| c == ' ' || c == '\t');
        if line.is_empty() {
            continue;
        }

        let Some(name) = leading_field(line) else {
            debug!("Skipping line {}: no name before '{}'", number, SEPARATOR);
            continue;
        };

        let Some((number, raw_type)) = lines.next() else {
            debug!("Input ended after name '{}', record discarded", name);
            break;
        };
        let Some(word_type) = leading_field(&raw_type) else {
            debug!(
                "Skipping line {}: no type before '{}', dropping '{}'",
                number, SEPARATOR, name
            );
            continue;
        };

        let Some((_, raw_definitions)) = lines.next() else {
            debug!("Input ended before definitions of '{}', record discarded", name);
            break;
        };

        entries.push(WordEntry::new(
            name,
            word_type,
            split_definitions(&raw_definitions),
        ));
    }

    entries
}

/// Text before the first separator, if there is a separator and the text is non-empty
fn leading_field(line: &str) -> Option<&str> {
    line.split_once(SEPARATOR)
        .map(|(field, _)| field)
        .filter(|field| !field.is_empty())
}

fn split_definitions(line: &str) -> Vec<String> {
    line.split(SEPARATOR)
        .filter(|definition| !definition.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lines with their 1-based numbers and without `\n` / `\r\n` terminators.
/// Invalid UTF-8 is decoded lossily; a read error ends the stream.
struct NumberedLines<R> {
    reader: R,
    number: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.number += 1;
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some((self.number, String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                warn!(
                    "Failed to read dictionary after line {}, keeping entries parsed so far: {}",
                    self.number, e
                );
                self.done = true;
                None
            }
        }
    }
}
