/// Semantic input events, translated from terminal keys by the UI layer.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// A printable character typed into the input.
    Input(char),
    /// Deletion key. On an empty input this pops the trailing formula
    /// pair back into the input text.
    DeleteBack,
    /// Commit key: selects the highlighted suggestion when the surface is
    /// open, otherwise commits an "operator + digits" input.
    Commit,
    /// The widget lost logical focus; triggers evaluation.
    FocusLost,
    /// Close the suggestion surface without committing anything.
    Dismiss,
    HighlightNext,
    HighlightPrev,
    /// Re-issue the last failed suggestion lookup.
    Retry,
    Quit,
    None,
}
