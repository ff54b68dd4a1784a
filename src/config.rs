// Configuration for the formula widget with defaults as documented

use std::time::Duration;

/// Widget behavior knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Quiet period before a suggestion lookup fires (default 250 ms).
    pub debounce: Duration,

    /// Maximum suggestion rows shown in the dropdown (default 8).
    pub max_suggestions: usize,

    /// Seed the widget with the demo formula `+13 *120` at startup.
    pub seed_demo_formula: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(250),
            max_suggestions: 8,
            seed_demo_formula: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_debounce_is_250ms() {
        let config = WidgetConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.max_suggestions, 8);
        assert!(config.seed_demo_formula);
    }
}
