pub mod classify;
pub mod interpreter;

pub use classify::{classify, is_operator_char, InputPattern};
pub use interpreter::{Interpreter, LookupRequest, Suggestions};
