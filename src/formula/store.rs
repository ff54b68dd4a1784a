use super::token::{FormulaToken, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FormulaError {
    #[error("operand at token {0} has no preceding operator")]
    UnpairedOperand(usize),

    #[error("operator at token {0} has no operand")]
    DanglingOperator(usize),
}

/// The trailing (operator, operand) pair removed by `pop`, reported so
/// the caller can re-seed the input field with `"{operator}{value}"`.
#[derive(Debug, Clone, PartialEq)]
pub struct PoppedPair {
    pub operator: Option<char>,
    pub value: Option<String>,
}

impl PoppedPair {
    /// Reconstructed raw text, empty string standing in for absent parts.
    pub fn as_input_text(&self) -> String {
        let mut text = String::new();
        if let Some(op) = self.operator {
            text.push(op);
        }
        if let Some(value) = &self.value {
            text.push_str(value);
        }
        text
    }
}

/// Owns the ordered formula sequence and the last computed value.
///
/// The sequence always groups into (operator, operand) pairs: every
/// operand is preceded by exactly one operator, and the fold seed 0.0
/// plays the role of the implicit leading operand. `push` maintains the
/// pairing by construction; `from_tokens` validates it.
#[derive(Debug)]
pub struct FormulaStore {
    tokens: Vec<FormulaToken>,
    calculated_value: f64,
}

impl FormulaStore {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            calculated_value: 0.0,
        }
    }

    /// Build a store from a pre-existing sequence, rejecting shapes that
    /// break the operator/operand pairing instead of guessing at
    /// reduction time.
    pub fn from_tokens(tokens: Vec<FormulaToken>) -> Result<Self, FormulaError> {
        for (i, token) in tokens.iter().enumerate() {
            let expect_operator = i % 2 == 0;
            if expect_operator && !token.is_operator() {
                return Err(FormulaError::UnpairedOperand(i));
            }
            if !expect_operator && token.is_operator() {
                return Err(FormulaError::DanglingOperator(i - 1));
            }
        }
        if tokens.len() % 2 != 0 {
            return Err(FormulaError::DanglingOperator(tokens.len() - 1));
        }
        Ok(Self {
            tokens,
            calculated_value: 0.0,
        })
    }

    pub fn tokens(&self) -> &[FormulaToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn calculated_value(&self) -> f64 {
        self.calculated_value
    }

    /// Append an operator token followed by an operand token. The store
    /// does not validate the operator symbol; the interpreter's pattern
    /// matching is the gatekeeper.
    pub fn push(
        &mut self,
        operator: char,
        value: impl Into<String>,
        kind: TokenKind,
        label: Option<String>,
    ) {
        self.tokens.push(FormulaToken::operator(operator));
        self.tokens.push(FormulaToken {
            kind,
            value: value.into(),
            label,
        });
    }

    /// Drop the trailing (operator, operand) pair. With fewer than two
    /// tokens this is a no-op returning `{None, None}`.
    pub fn pop(&mut self) -> PoppedPair {
        if self.tokens.len() < 2 {
            return PoppedPair {
                operator: None,
                value: None,
            };
        }
        let operand = self.tokens.pop();
        let operator = self.tokens.pop();
        PoppedPair {
            operator: operator.and_then(|t| t.value.chars().next()),
            value: operand.map(|t| t.value),
        }
    }

    /// Left-to-right fold into a running total seeded at 0. The operator
    /// preceding each operand picks the arithmetic action; non-numeric
    /// operand values are skipped so partial or unresolved entries never
    /// fail the reduction. No precedence.
    pub fn calculate(&mut self) -> f64 {
        let mut total = 0.0;
        let mut pending_op = '+';

        for token in &self.tokens {
            if token.is_operator() {
                if let Some(symbol) = token.value.chars().next() {
                    pending_op = symbol;
                }
                continue;
            }
            let operand: f64 = match token.value.parse() {
                Ok(n) => n,
                Err(_) => continue,
            };
            total = match pending_op {
                '+' => total + operand,
                '-' => total - operand,
                '*' => total * operand,
                '/' => total / operand,
                _ => total,
            };
        }

        self.calculated_value = total;
        total
    }
}

impl Default for FormulaStore {
    fn default() -> Self {
        Self::new()
    }
}
