use std::time::Instant;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::WidgetConfig;
use crate::formula::{FormulaStore, TokenKind};
use crate::interpret::Interpreter;
use crate::suggest::SuggestionProvider;

/// Application core: wires the input text, the formula store and the
/// interpreter together, and executes due suggestion lookups against the
/// provider. The UI layer only feeds it `AppEvent`s and reads
/// `RenderState` snapshots.
pub struct App {
    pub mode: AppMode,
    store: FormulaStore,
    interpreter: Interpreter,
    input: String,
    provider: Box<dyn SuggestionProvider>,
}

impl App {
    pub fn new(provider: Box<dyn SuggestionProvider>, config: &WidgetConfig) -> Self {
        let mut store = FormulaStore::new();
        if config.seed_demo_formula {
            store.push('+', "13", TokenKind::Text, None);
            store.push('*', "120", TokenKind::Text, None);
        }
        Self {
            mode: AppMode::Edit,
            store,
            interpreter: Interpreter::new(config.debounce),
            input: String::new(),
            provider,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Input(c) => {
                self.input.push(c);
                self.interpreter.on_text_change(&self.input, now);
            }
            AppEvent::DeleteBack => {
                if self.input.is_empty() {
                    // Reconstructed text is set programmatically, which
                    // does not count as a text change
                    if let Some(text) = self.interpreter.on_backspace_empty(&mut self.store) {
                        self.input = text;
                    }
                } else {
                    self.input.pop();
                    self.interpreter.on_text_change(&self.input, now);
                }
            }
            AppEvent::Commit => {
                let committed = if self.interpreter.suggestions.visible
                    && self.interpreter.suggestions.selected_item().is_some()
                {
                    self.interpreter
                        .select_suggestion(&self.input, &mut self.store)
                } else {
                    self.interpreter.on_commit_key(&self.input, &mut self.store)
                };
                if committed {
                    self.input.clear();
                }
            }
            AppEvent::FocusLost => {
                self.store.calculate();
                self.interpreter.dismiss();
            }
            AppEvent::Dismiss => self.interpreter.dismiss(),
            AppEvent::HighlightNext => self.interpreter.suggestions.select_next(),
            AppEvent::HighlightPrev => self.interpreter.suggestions.select_prev(),
            AppEvent::Retry => self.interpreter.retry(now),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::None => {}
        }
    }

    /// Fire the pending suggestion lookup if its quiet period elapsed.
    /// Lookup failure degrades to an error-flagged surface, never a crash.
    pub fn tick(&mut self, now: Instant) {
        if let Some(request) = self.interpreter.take_due(now) {
            let result = self.provider.search(&request.query);
            self.interpreter.apply_results(request.generation, result);
        }
    }

    /// When the event loop must wake up next for a pending lookup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interpreter.next_deadline()
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            tokens: self.store.tokens().to_vec(),
            input: self.input.clone(),
            calculated_value: self.store.calculated_value(),
            suggestions: self.interpreter.suggestions.clone(),
        }
    }

    pub fn store(&self) -> &FormulaStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
