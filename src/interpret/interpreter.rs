use std::time::{Duration, Instant};

use super::classify::{classify, is_operator_char, InputPattern};
use crate::formula::{FormulaStore, TokenKind};
use crate::suggest::{SuggestError, SuggestionItem};

/// A lookup whose quiet period is still running. Superseded wholesale by
/// the next qualifying keystroke.
#[derive(Debug, Clone, PartialEq)]
struct PendingLookup {
    query: String,
    deadline: Instant,
    generation: u64,
}

/// A lookup whose quiet period has elapsed. The boundary executes it and
/// feeds the outcome back through `apply_results` with the same
/// generation stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub query: String,
    pub generation: u64,
}

/// Suggestion surface state, read by the rendering layer.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    pub items: Vec<SuggestionItem>,
    pub selected: usize,
    pub visible: bool,
    pub loading: bool,
    pub error: bool,
}

impl Suggestions {
    fn hide(&mut self) {
        *self = Suggestions::default();
    }

    pub fn selected_item(&self) -> Option<&SuggestionItem> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }
}

/// Classifies raw input text and drives the formula store plus the
/// debounced suggestion lookup.
///
/// The debounce handle is per-instance state; two widgets never clobber
/// each other's pending request. Lookup results carry a generation stamp
/// and only the stamp issued last is ever applied, so a slow request that
/// resolves after a newer one cannot overwrite the surface.
pub struct Interpreter {
    debounce: Duration,
    pending: Option<PendingLookup>,
    generation: u64,
    last_query: Option<String>,
    pub suggestions: Suggestions,
}

impl Interpreter {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: None,
            generation: 0,
            last_query: None,
            suggestions: Suggestions::default(),
        }
    }

    /// Rule 3 / rule 4: on every text change, either (re)schedule a
    /// debounced lookup or dismiss the surface. Scheduling supersedes any
    /// pending or in-flight lookup.
    pub fn on_text_change(&mut self, raw: &str, now: Instant) {
        match classify(raw) {
            InputPattern::Search { query, .. } => {
                // Cancel first; only the newest keystroke's search survives.
                self.pending = None;
                if query.is_empty() {
                    return;
                }
                self.generation += 1;
                self.pending = Some(PendingLookup {
                    query,
                    deadline: now + self.debounce,
                    generation: self.generation,
                });
            }
            _ => self.dismiss(),
        }
    }

    /// Rule 2: commit key with "operator + digits" appends the pair and
    /// reports true so the caller clears the input. Anything else is
    /// ignored here.
    pub fn on_commit_key(&mut self, raw: &str, store: &mut FormulaStore) -> bool {
        if let InputPattern::CommitNumber { operator, digits } = classify(raw) {
            store.push(operator, digits, TokenKind::Text, None);
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Rule 1: deletion key on an empty input pops the trailing pair and
    /// returns the reconstructed text to seed the input with. None when
    /// the sequence is empty.
    pub fn on_backspace_empty(&mut self, store: &mut FormulaStore) -> Option<String> {
        if store.is_empty() {
            return None;
        }
        Some(store.pop().as_input_text())
    }

    /// When the next pending lookup becomes due, for event-loop timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Hand out the pending lookup once its quiet period has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<LookupRequest> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        let pending = self.pending.take()?;
        self.suggestions.loading = true;
        self.last_query = Some(pending.query.clone());
        Some(LookupRequest {
            query: pending.query,
            generation: pending.generation,
        })
    }

    /// Apply a resolved lookup. Results stamped with anything other than
    /// the latest issued generation are discarded: last writer wins, not
    /// first resolved.
    pub fn apply_results(
        &mut self,
        generation: u64,
        result: Result<Vec<SuggestionItem>, SuggestError>,
    ) {
        if generation != self.generation {
            return;
        }
        self.suggestions.loading = false;
        match result {
            Ok(items) if items.is_empty() => self.dismiss(),
            Ok(items) => {
                self.suggestions.items = items;
                self.suggestions.selected = 0;
                self.suggestions.visible = true;
                self.suggestions.error = false;
            }
            Err(_) => {
                self.suggestions.items.clear();
                self.suggestions.selected = 0;
                self.suggestions.visible = true;
                self.suggestions.error = true;
            }
        }
    }

    /// Re-issue the last failed lookup immediately.
    pub fn retry(&mut self, now: Instant) {
        if !self.suggestions.error {
            return;
        }
        if let Some(query) = self.last_query.clone() {
            self.generation += 1;
            self.pending = Some(PendingLookup {
                query,
                deadline: now,
                generation: self.generation,
            });
        }
    }

    /// Commit the highlighted suggestion: operator comes from the first
    /// character of the raw text, the operand payload and label from the
    /// item. Reports true so the caller clears the input.
    pub fn select_suggestion(&mut self, raw: &str, store: &mut FormulaStore) -> bool {
        let Some(item) = self.suggestions.selected_item().cloned() else {
            return false;
        };
        let Some(operator) = raw.chars().next().filter(|c| is_operator_char(*c)) else {
            self.dismiss();
            return false;
        };
        store.push(operator, item.value, TokenKind::Function, Some(item.name));
        self.dismiss();
        true
    }

    /// Hide the surface and invalidate any pending or in-flight lookup so
    /// a late result cannot reopen it.
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.generation += 1;
        self.last_query = None;
        self.suggestions.hide();
    }
}
