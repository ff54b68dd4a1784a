pub mod store;
pub mod token;

pub use store::{FormulaError, FormulaStore, PoppedPair};
pub use token::{FormulaToken, TokenKind};
