use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::app::{App, AppEvent, AppMode};
use crate::config::WidgetConfig;
use crate::formula::TokenKind;
use crate::suggest::{FunctionCatalog, SuggestError, SuggestionItem, SuggestionProvider};

/// Fails the first `failures` calls, then answers with a fixed item.
struct FlakyProvider {
    failures: Cell<u32>,
}

impl SuggestionProvider for FlakyProvider {
    fn search(&self, _query: &str) -> Result<Vec<SuggestionItem>, SuggestError> {
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            return Err(SuggestError::Transport("connection refused".to_string()));
        }
        Ok(vec![SuggestionItem {
            name: "admin_fee".to_string(),
            category: "Fees".to_string(),
            value: "25".to_string(),
        }])
    }
}

fn bare_app() -> App {
    let config = WidgetConfig {
        seed_demo_formula: false,
        ..WidgetConfig::default()
    };
    App::new(Box::new(FunctionCatalog::new(config.max_suggestions)), &config)
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        app.handle_event(AppEvent::Input(c), now);
    }
}

#[test]
fn test_commit_numeric_entry() {
    let mut app = bare_app();
    let now = Instant::now();
    type_text(&mut app, "+42", now);
    app.handle_event(AppEvent::Commit, now);

    assert_eq!(app.input(), "");
    let tokens = app.store().tokens();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "+");
    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Text);
}

#[test]
fn test_numeric_entry_never_triggers_lookup() {
    let mut app = bare_app();
    let now = Instant::now();
    type_text(&mut app, "+42", now);
    assert!(app.next_deadline().is_none());
}

#[test]
fn test_search_entry_populates_surface_after_quiet_period() {
    let mut app = bare_app();
    let t0 = Instant::now();
    type_text(&mut app, "+ad", t0);

    app.tick(t0 + Duration::from_millis(100));
    assert!(!app.get_render_state().suggestions.visible);

    app.tick(t0 + Duration::from_millis(300));
    let suggestions = app.get_render_state().suggestions;
    assert!(suggestions.visible);
    assert_eq!(suggestions.items[0].name, "admin_fee");
}

#[test]
fn test_commit_with_open_surface_selects_highlighted_item() {
    let mut app = bare_app();
    let t0 = Instant::now();
    type_text(&mut app, "*ad", t0);
    app.tick(t0 + Duration::from_millis(300));

    app.handle_event(AppEvent::Commit, t0 + Duration::from_millis(300));

    assert_eq!(app.input(), "");
    let tokens = app.store().tokens();
    assert_eq!(tokens[0].value, "*");
    assert_eq!(tokens[1].kind, TokenKind::Function);
    assert_eq!(tokens[1].label.as_deref(), Some("admin_fee"));
    assert_eq!(tokens[1].value, "25");
    assert!(!app.get_render_state().suggestions.visible);
}

#[test]
fn test_focus_lost_evaluates_seeded_formula() {
    let config = WidgetConfig::default();
    let mut app = App::new(Box::new(FunctionCatalog::new(8)), &config);
    app.handle_event(AppEvent::FocusLost, Instant::now());
    // 0 + 13 = 13, 13 * 120 = 1560
    assert_eq!(app.get_render_state().calculated_value, 1560.0);
}

#[test]
fn test_focus_lost_on_empty_store_yields_zero() {
    let mut app = bare_app();
    app.handle_event(AppEvent::FocusLost, Instant::now());
    assert_eq!(app.get_render_state().calculated_value, 0.0);
}

#[test]
fn test_backspace_on_empty_input_restores_pair_text() {
    let mut app = bare_app();
    let now = Instant::now();
    type_text(&mut app, "+13", now);
    app.handle_event(AppEvent::Commit, now);
    assert_eq!(app.store().tokens().len(), 2);

    app.handle_event(AppEvent::DeleteBack, now);
    assert_eq!(app.input(), "+13");
    assert!(app.store().is_empty());

    // Sequence is now empty; another delete just does nothing to it
    app.handle_event(AppEvent::DeleteBack, now);
    assert_eq!(app.input(), "+1");
}

#[test]
fn test_unrecognized_text_dismisses_surface() {
    let mut app = bare_app();
    let t0 = Instant::now();
    type_text(&mut app, "+ad", t0);
    app.tick(t0 + Duration::from_millis(300));
    assert!(app.get_render_state().suggestions.visible);

    // Deleting back to "+a" keeps searching, but clearing the operator
    // leaves plain text and closes the surface
    app.handle_event(AppEvent::DeleteBack, t0 + Duration::from_millis(300));
    app.handle_event(AppEvent::DeleteBack, t0 + Duration::from_millis(300));
    app.handle_event(AppEvent::DeleteBack, t0 + Duration::from_millis(300));
    type_text(&mut app, "42", t0 + Duration::from_millis(300));
    assert!(!app.get_render_state().suggestions.visible);
    assert!(app.next_deadline().is_none());
}

#[test]
fn test_lookup_failure_then_retry_recovers() {
    let config = WidgetConfig {
        seed_demo_formula: false,
        ..WidgetConfig::default()
    };
    let mut app = App::new(
        Box::new(FlakyProvider {
            failures: Cell::new(1),
        }),
        &config,
    );

    let t0 = Instant::now();
    type_text(&mut app, "+ad", t0);
    app.tick(t0 + Duration::from_millis(300));

    let suggestions = app.get_render_state().suggestions;
    assert!(suggestions.visible);
    assert!(suggestions.error);
    assert!(suggestions.items.is_empty());

    let t1 = t0 + Duration::from_millis(400);
    app.handle_event(AppEvent::Retry, t1);
    app.tick(t1);

    let suggestions = app.get_render_state().suggestions;
    assert!(suggestions.visible);
    assert!(!suggestions.error);
    assert_eq!(suggestions.items[0].name, "admin_fee");
}

#[test]
fn test_quit_event_sets_quit_mode() {
    let mut app = bare_app();
    app.handle_event(AppEvent::Quit, Instant::now());
    assert_eq!(app.mode, AppMode::Quit);
}
