/// Grammatical category of a headword, keyed by the short code used in
/// dictionary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordType {
    Noun,
    Verb,
    Adverb,
    Adjective,
    Preposition,
    ProperNoun,
    NounAndVerb,
    Misc,
    Unknown,
}

impl WordType {
    /// Exact, case-sensitive match against the known codes
    pub fn from_code(code: &str) -> Self {
        match code {
            "n" => WordType::Noun,
            "v" => WordType::Verb,
            "adv" => WordType::Adverb,
            "adj" => WordType::Adjective,
            "prep" => WordType::Preposition,
            "pn" => WordType::ProperNoun,
            "n_and_v" => WordType::NounAndVerb,
            "misc" => WordType::Misc,
            _ => WordType::Unknown,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            WordType::Noun => "(n.)",
            WordType::Verb => "(v.)",
            WordType::Adverb => "(adv.)",
            WordType::Adjective => "(adj.)",
            WordType::Preposition => "(prep.)",
            WordType::ProperNoun => "(pn.)",
            WordType::NounAndVerb => "(n. v.)",
            WordType::Misc => "(misc.)",
            WordType::Unknown => "(unknown)",
        }
    }
}

/// Display abbreviation for a type code, `(unknown)` for anything unrecognized
pub fn type_abbreviation(code: &str) -> &'static str {
    WordType::from_code(code).abbreviation()
}
