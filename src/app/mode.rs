#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing in the formula bar.
    Edit,
    Quit,
}
