use std::fmt::Display;

/// Start token used when none is supplied
pub const DEFAULT_START: &str = "%#";

/// End token used when none is supplied
pub const DEFAULT_END: &str = "#%";

/// Grammar of a placeholder name, captured lazily so the first end token
/// closes the placeholder
pub const PLACEHOLDER_NAME_PATTERN: &str = r"([A-Za-z][A-Za-z0-9_]*?)";

/// The start and end tokens surrounding a placeholder name
///
/// Tokens are kept as the literal text that appears in files. They are
/// escaped whenever a pattern is built from them, so characters like `{` or
/// `$` never act as pattern operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter {
    start: String,
    end: String,
}

impl Delimiter {
    /// Create a [Delimiter] from literal start and end tokens
    ///
    /// Empty tokens are accepted but match far more than intended.
    pub fn from_literals(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// The placeholder for `name` as it appears in a file
    ///
    /// e.g. `FIRST` becomes `%#FIRST#%` with the default delimiter
    pub fn placeholder(&self, name: &str) -> String {
        format!("{}{}{}", self.start, name, self.end)
    }

    /// Pattern matching any placeholder, capturing its name in group 1
    pub fn pattern(&self) -> String {
        format!(
            "{}{}{}",
            regex::escape(&self.start),
            PLACEHOLDER_NAME_PATTERN,
            regex::escape(&self.end)
        )
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::from_literals(DEFAULT_START, DEFAULT_END)
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}NAME{}", self.start, self.end)
    }
}
