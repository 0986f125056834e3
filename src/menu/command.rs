/// One recognized main-menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Search,
    RandomWord,
    Exit,
}

impl Command {
    /// Parse a raw input line. Only the exact strings `1`, `2` and `3` are
    /// accepted once the line terminator is removed.
    pub fn parse(line: &str) -> Option<Self> {
        match strip_line_ending(line) {
            "1" => Some(Command::Search),
            "2" => Some(Command::RandomWord),
            "3" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub(crate) fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(Command::parse("1"), Some(Command::Search));
        assert_eq!(Command::parse("2\n"), Some(Command::RandomWord));
        assert_eq!(Command::parse("3\r\n"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        assert_eq!(Command::parse("1 "), None);
        assert_eq!(Command::parse("01"), None);
        assert_eq!(Command::parse(" 2"), None);
        assert_eq!(Command::parse("4"), None);
        assert_eq!(Command::parse("search"), None);
        assert_eq!(Command::parse(""), None);
    }
}
