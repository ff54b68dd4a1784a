use super::mode::AppMode;
use crate::formula::FormulaToken;
use crate::interpret::Suggestions;

/// Read-only snapshot the UI renders from: the chip row, the raw input
/// text, the last computed value and the suggestion surface state.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub mode: AppMode,
    pub tokens: Vec<FormulaToken>,
    pub input: String,
    pub calculated_value: f64,
    pub suggestions: Suggestions,
}
