/// Kind tag for one entry in the formula sequence.
///
/// Evaluation only cares whether a token is an operator or an operand;
/// `Text` vs `Function` exists for rendering (literal chips vs resolved
/// function chips).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Operator,
    Function,
}

/// One atomic unit in the formula sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaToken {
    pub kind: TokenKind,
    /// Operand magnitude for Text/Function tokens, the operator symbol
    /// for Operator tokens.
    pub value: String,
    /// Display name distinct from the underlying value. Set when the
    /// token came from a resolved function or reference, absent for
    /// plain numeric literals.
    pub label: Option<String>,
}

impl FormulaToken {
    pub fn operator(symbol: char) -> Self {
        Self {
            kind: TokenKind::Operator,
            value: symbol.to_string(),
            label: None,
        }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Text,
            value: value.into(),
            label: None,
        }
    }

    pub fn function(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Function,
            value: value.into(),
            label: Some(name.into()),
        }
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    /// Text shown on the chip: the label when one exists, the raw value
    /// otherwise.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}
