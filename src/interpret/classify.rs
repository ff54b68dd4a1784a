use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One arithmetic operator followed by digits only.
    static ref COMMIT_PATTERN: Regex = Regex::new(r"^[+\-*/][0-9]+$").unwrap();
    /// One arithmetic operator followed by at least one letter; trailing
    /// content is unconstrained.
    static ref SEARCH_PATTERN: Regex = Regex::new(r"^[+\-*/][A-Za-z]").unwrap();
}

/// What the raw input text currently looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum InputPattern {
    /// Operator plus a fully numeric operand, ready to commit on Enter.
    CommitNumber { operator: char, digits: String },
    /// Operator plus a partial identifier; `query` is the text after the
    /// operator, trimmed.
    Search { operator: char, query: String },
    /// Anything else. Plain text entry is not an error, just no action.
    Unrecognized,
}

pub fn classify(raw: &str) -> InputPattern {
    if COMMIT_PATTERN.is_match(raw) {
        let mut chars = raw.chars();
        let operator = chars.next().unwrap_or('+');
        return InputPattern::CommitNumber {
            operator,
            digits: chars.collect(),
        };
    }

    if SEARCH_PATTERN.is_match(raw) {
        let mut chars = raw.chars();
        let operator = chars.next().unwrap_or('+');
        return InputPattern::Search {
            operator,
            query: chars.collect::<String>().trim().to_string(),
        };
    }

    InputPattern::Unrecognized
}

/// Whether `c` is one of the recognized arithmetic operator characters.
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}
