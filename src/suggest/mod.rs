use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("lookup transport error: {0}")]
    Transport(String),
}

/// One autocomplete candidate as delivered by the lookup backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionItem {
    /// Display name shown in the dropdown and kept as the chip label.
    pub name: String,
    /// Grouping tag shown under the name.
    pub category: String,
    /// Underlying operand payload that enters the formula.
    pub value: String,
}

/// The external suggestion lookup: a non-empty search string in, a ranked
/// candidate list out. A failed lookup is not fatal for the widget; the
/// caller degrades to an empty, error-flagged surface.
pub trait SuggestionProvider {
    fn search(&self, query: &str) -> Result<Vec<SuggestionItem>, SuggestError>;
}

pub mod catalog;

pub use catalog::FunctionCatalog;
