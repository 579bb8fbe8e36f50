//! Turning a list of styles into output for one surface.

use crate::env::ColorConfig;
use crate::style::{Style, Surface, RESET};

use super::output::{ConsoleArgs, Output};

/// A style list with its directives already joined for one configuration.
///
/// The terminal prefix (or CSS declaration) is computed once at
/// construction, so [`Formatter::apply`] only concatenates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    surface: Surface,
    /// `None` when styling is off or there are no styles.
    joined: Option<String>,
}

impl Formatter {
    pub fn new(styles: &[Style], config: ColorConfig) -> Self {
        let surface = config.surface();
        if !config.is_enabled() || styles.is_empty() {
            return Self {
                surface,
                joined: None,
            };
        }

        let table = config.table();
        let directives = styles.iter().map(|style| table.lookup(*style).as_str());
        let joined = match surface {
            Surface::Terminal => directives.collect::<String>(),
            Surface::Browser => directives.collect::<Vec<_>>().join(" "),
        };
        Self {
            surface,
            joined: Some(joined),
        }
    }

    /// Whether [`apply`](Self::apply) adds anything to the text.
    pub fn is_styled(&self) -> bool {
        self.joined.is_some()
    }

    pub fn apply(&self, text: &str) -> Output {
        match (&self.joined, self.surface) {
            (None, surface) => Output::unstyled(text, surface),
            (Some(prefix), Surface::Terminal) => {
                let mut out = String::with_capacity(prefix.len() + text.len() + RESET.len());
                out.push_str(prefix);
                out.push_str(text);
                out.push_str(RESET);
                Output::Plain(out)
            }
            (Some(declaration), Surface::Browser) => {
                Output::Console(ConsoleArgs::styled(text, declaration))
            }
        }
    }
}

/// Renders `text` through `styles` in accumulation order.
///
/// Terminal: every directive, then the text, then one reset. Browser: the
/// `%c` template and the space-joined CSS. Disabled styling or an empty
/// list leaves the text untouched.
///
/// # Example
///
/// ```rust
/// use tincture::{render, ColorConfig, Style, Surface};
///
/// let config = ColorConfig::new(Surface::Terminal, true);
/// let out = render(&[Style::Red, Style::Bold], "x", config);
/// assert_eq!(out, "\x1b[31m\x1b[1mx\x1b[0m");
/// ```
pub fn render(styles: &[Style], text: &str, config: ColorConfig) -> Output {
    Formatter::new(styles, config).apply(text)
}
