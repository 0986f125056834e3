use crate::word_type::WordType;

/// One headword with its grammatical type and definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Lowercased headword
    pub name: String,
    /// Type code exactly as written in the source file
    pub word_type: String,
    /// Definitions in display order
    pub definitions: Vec<String>,
}

impl WordEntry {
    pub fn new(name: &str, word_type: &str, definitions: Vec<String>) -> Self {
        Self {
            name: name.to_lowercase(),
            word_type: word_type.to_string(),
            definitions,
        }
    }

    pub fn kind(&self) -> WordType {
        WordType::from_code(&self.word_type)
    }

    pub fn abbreviation(&self) -> &'static str {
        self.kind().abbreviation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_lowercased() {
        let entry = WordEntry::new("Helsinki", "pn", vec!["capital of Finland".to_string()]);
        assert_eq!(entry.name, "helsinki");
        assert_eq!(entry.word_type, "pn");
        assert_eq!(entry.kind(), WordType::ProperNoun);
        assert_eq!(entry.abbreviation(), "(pn.)");
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let entry = WordEntry::new("zzz", "Noun", Vec::new());
        assert_eq!(entry.word_type, "Noun");
        assert_eq!(entry.kind(), WordType::Unknown);
        assert_eq!(entry.abbreviation(), "(unknown)");
    }
}
