//! Theme configuration and the theme scope
//!
//! The application theme is built once at the root of the shell and handed to
//! [`ThemeProvider`] as a prop. Descendants read it back with [`use_theme`] and
//! style themselves through the CSS custom properties it emits.

use dioxus::prelude::*;

/// Baseline reset applied once at the root, before any page content.
pub const BASELINE_CSS: &str = "\
*, *::before, *::after { box-sizing: border-box; }
html { -webkit-text-size-adjust: 100%; text-size-adjust: 100%; }
body { margin: 0; line-height: 1.5; -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; }
body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; }
h1, h2, h3, h4, h5, h6, p { margin: 0; }
img, svg, video { display: block; max-width: 100%; }
input, button, textarea, select { font: inherit; }
a { color: inherit; }
";

/// Brand palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
}

/// Design tokens shared by every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    /// The job board's theme
    pub fn job_board() -> Self {
        Self {
            palette: Palette {
                primary: "#2563eb".to_string(),
                secondary: "#64748b".to_string(),
            },
        }
    }

    /// Tokens as CSS custom properties, suitable for an inline `style` attribute
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary: {}; --color-secondary: {};",
            self.palette.primary, self.palette.secondary
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::job_board()
    }
}

/// Theme scope: provides `theme` to every descendant and applies the baseline reset
#[component]
pub fn ThemeProvider(theme: Theme, children: Element) -> Element {
    // Provided once; later renders with a different prop do not replace it.
    let theme = use_context_provider(|| theme);
    let variables = theme.css_variables();

    rsx! {
        style { id: "baseline", dangerous_inner_html: BASELINE_CSS }
        div {
            class: "app-theme",
            style: "{variables}",
            {children}
        }
    }
}

/// Hook to access the theme
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_board_tokens() {
        let theme = Theme::job_board();
        assert_eq!(theme.palette.primary, "#2563eb");
        assert_eq!(theme.palette.secondary, "#64748b");
    }

    #[test]
    fn test_css_variables() {
        let vars = Theme::job_board().css_variables();
        assert!(vars.contains("--color-primary: #2563eb;"));
        assert!(vars.contains("--color-secondary: #64748b;"));
    }

    #[test]
    fn test_default_is_job_board() {
        assert_eq!(Theme::default(), Theme::job_board());
    }

    #[test]
    fn test_baseline_has_no_escapable_characters() {
        // Rendered as raw HTML; keep it free of markup-significant characters.
        assert!(!BASELINE_CSS.contains('<'));
        assert!(!BASELINE_CSS.contains('>'));
        assert!(!BASELINE_CSS.contains('"'));
    }
}
