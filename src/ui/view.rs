use crate::formula::{FormulaToken, TokenKind};
use crate::interpret::Suggestions;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

/// Spans for one token chip. Function chips show the label with the
/// underlying numeric value appended dimmed.
fn chip_spans(token: &FormulaToken) -> Vec<Span<'static>> {
    match token.kind {
        TokenKind::Operator => vec![Span::styled(
            format!(" {} ", token.value),
            Style::default().fg(colors::dimmed()),
        )],
        TokenKind::Text => vec![Span::styled(
            token.value.clone(),
            Style::default().fg(colors::chip_text()),
        )],
        TokenKind::Function => {
            let mut spans = vec![Span::styled(
                token.display_text().to_string(),
                Style::default()
                    .fg(colors::chip_function())
                    .add_modifier(Modifier::BOLD),
            )];
            if token.label.is_some() {
                spans.push(Span::styled(
                    format!(" {}", token.value),
                    Style::default().fg(colors::dimmed()),
                ));
            }
            spans
        }
    }
}

/// The formula bar content: the chip row followed by the raw input text
/// and a cursor mark.
pub fn render_formula_line(tokens: &[FormulaToken], input: &str) -> Line<'static> {
    let mut spans = Vec::new();
    for token in tokens {
        spans.extend(chip_spans(token));
    }
    if !tokens.is_empty() {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        input.to_string(),
        Style::default().fg(colors::text()),
    ));
    spans.push(Span::styled("▏", Style::default().fg(colors::dimmed())));
    Line::from(spans)
}

/// Display width of everything before the input text, used to place the
/// suggestion dropdown under the input rather than under the chips.
pub fn formula_prefix_width(tokens: &[FormulaToken]) -> u16 {
    let mut width = 0usize;
    for token in tokens {
        for span in chip_spans(token) {
            width += span.content.width();
        }
    }
    if !tokens.is_empty() {
        width += 1;
    }
    width as u16
}

/// Dropdown rows: each candidate as a name line plus a dimmed category
/// line; the highlighted candidate gets a selection background. Loading
/// and error states render as single status lines.
pub fn render_suggestion_lines(suggestions: &Suggestions) -> Vec<Line<'static>> {
    if suggestions.error {
        return vec![Line::from(Span::styled(
            "lookup failed · Ctrl-R to retry",
            Style::default().fg(colors::error()),
        ))];
    }
    if suggestions.loading && suggestions.items.is_empty() {
        return vec![Line::from(Span::styled(
            "searching…",
            Style::default().fg(colors::dimmed()),
        ))];
    }

    let mut lines = Vec::new();
    for (i, item) in suggestions.items.iter().enumerate() {
        let (name_style, category_style) = if i == suggestions.selected {
            (
                Style::default()
                    .fg(colors::text())
                    .bg(colors::highlight_bg())
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(colors::dimmed())
                    .bg(colors::highlight_bg()),
            )
        } else {
            (
                Style::default().fg(colors::text()),
                Style::default().fg(colors::dimmed()),
            )
        };
        lines.push(Line::from(Span::styled(item.name.clone(), name_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.category),
            category_style,
        )));
    }
    lines
}

/// Calculated values print without a fractional part when they are whole.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn render_result(value: f64) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("= ", Style::default().fg(colors::dimmed())),
        Span::styled(
            format_value(value),
            Style::default()
                .fg(colors::result())
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left)
}

pub fn render_help_line() -> Line<'static> {
    Line::from(Span::styled(
        "Enter commit · Tab evaluate · Esc dismiss · Ctrl-Q quit",
        Style::default().fg(colors::dimmed()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::SuggestionItem;

    #[test]
    fn test_format_value_trims_whole_numbers() {
        assert_eq!(format_value(1560.0), "1560");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-42.0), "-42");
    }

    #[test]
    fn test_format_value_keeps_fractions() {
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn test_prefix_width_counts_chips_and_gap() {
        let tokens = vec![FormulaToken::operator('+'), FormulaToken::number("13")];
        // " + " is 3 wide, "13" is 2 wide, plus the trailing gap
        assert_eq!(formula_prefix_width(&tokens), 6);
        assert_eq!(formula_prefix_width(&[]), 0);
    }

    #[test]
    fn test_error_state_renders_retry_hint() {
        let suggestions = Suggestions {
            error: true,
            visible: true,
            ..Suggestions::default()
        };
        let lines = render_suggestion_lines(&suggestions);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_each_candidate_renders_two_lines() {
        let suggestions = Suggestions {
            items: vec![
                SuggestionItem {
                    name: "admin_fee".to_string(),
                    category: "Fees".to_string(),
                    value: "25".to_string(),
                },
                SuggestionItem {
                    name: "avg_basket".to_string(),
                    category: "Metrics".to_string(),
                    value: "73".to_string(),
                },
            ],
            visible: true,
            ..Suggestions::default()
        };
        assert_eq!(render_suggestion_lines(&suggestions).len(), 4);
    }
}
