use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub chip_text: Color,
    pub chip_function: Color,
    pub dimmed: Color,
    pub highlight_bg: Color,
    pub error: Color,
    pub result: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),     // #1A1B26 stormy dark
            text: Color::Rgb(169, 177, 214),        // #A9B1D6 light blue
            chip_text: Color::Rgb(158, 206, 106),   // #9ECE6A green
            chip_function: Color::Rgb(122, 162, 247), // #7AA2F7 blue
            dimmed: Color::Rgb(100, 110, 150),      // #646E96 dimmed blue
            highlight_bg: Color::Rgb(52, 59, 88),   // #343B58 selection
            error: Color::Rgb(247, 118, 142),       // #F7768E coral red
            result: Color::Rgb(224, 175, 104),      // #E0AF68 amber
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn chip_text() -> Color {
        Theme::current().chip_text
    }
    pub fn chip_function() -> Color {
        Theme::current().chip_function
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn highlight_bg() -> Color {
        Theme::current().highlight_bg
    }
    pub fn error() -> Color {
        Theme::current().error
    }
    pub fn result() -> Color {
        Theme::current().result
    }
}
