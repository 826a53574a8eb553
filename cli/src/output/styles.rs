//! Stylesheet for terminal output.

use owo_colors::Style;

/// One `Style` per kind of text elba prints. All plain by default.
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Load balancer names in listings.
    pub load_balancer: Style,
    /// Instance ids in listings.
    pub instance: Style,
    /// Summaries and other secondary text.
    pub dim: Style,
}

impl Styles {
    /// Colored stylesheet when `colors` is set, plain otherwise.
    #[must_use]
    pub fn for_terminal(colors: bool) -> Self {
        if !colors {
            return Self::default();
        }
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            load_balancer: Style::new().bold().cyan(),
            instance: Style::new().green(),
            dim: Style::new().dimmed(),
        }
    }
}
