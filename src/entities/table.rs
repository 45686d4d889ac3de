//! Substitution table
//!
//! Ordered literal replacements applied to a whole document.

/// The seven German special characters and their named HTML entities
pub const UMLAUT_ENTITIES: [(&str, &str); 7] = [
    ("ä", "&auml;"),
    ("Ä", "&Auml;"),
    ("ö", "&ouml;"),
    ("Ö", "&Ouml;"),
    ("ü", "&uuml;"),
    ("Ü", "&Uuml;"),
    ("ß", "&szlig;"),
];

/// A single literal replacement
#[derive(Debug, Clone, PartialEq, Eq)]
struct Substitution {
    /// Literal text to look for
    pattern: String,
    /// Text that replaces every occurrence of `pattern`
    replacement: String,
}

/// Ordered list of substitutions
///
/// Each substitution is applied to the entire text before the next one runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    /// Creates a table from `(pattern, replacement)` pairs, keeping their order
    pub fn new<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(pattern, replacement)| Substitution {
                pattern: pattern.into(),
                replacement: replacement.into(),
            })
            .filter(|entry| !entry.pattern.is_empty())
            .collect();
        SubstitutionTable { entries }
    }

    /// The umlaut to HTML entity table
    pub fn umlauts() -> Self {
        Self::new(UMLAUT_ENTITIES)
    }

    /// Applies every substitution in order and returns the new text
    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).0
    }

    /// Like [`apply`](Self::apply), but also returns how many matches were replaced
    pub fn apply_counted(&self, text: &str) -> (String, usize) {
        let mut result = text.to_string();
        let mut replaced = 0;

        for entry in &self.entries {
            let occurrences = result.matches(entry.pattern.as_str()).count();
            if occurrences == 0 {
                continue;
            }
            replaced += occurrences;
            result = result.replace(entry.pattern.as_str(), &entry.replacement);
        }

        (result, replaced)
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::umlauts()
    }
}
