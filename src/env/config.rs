//! Resolved color configuration.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::signals::{Environment, FORCE_COLOR, MCP_MODE, NO_COLOR};
use crate::style::{StyleTable, Surface};

/// How rendered output is produced once the environment has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// ANSI escape sequences around the text.
    Ansi,
    /// `%c` template plus a CSS declaration for a browser console.
    Css,
    /// Text passes through untouched.
    Plain,
}

/// Caller override for the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Decide from the environment.
    #[default]
    Auto,
    /// Terminal with styling forced on.
    Term,
    /// Terminal with styling off.
    Text,
    /// Browser console with styling on.
    Css,
}

/// Error returned when an [`OutputMode`] name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output mode '{value}' (expected auto, term, text or css)")]
pub struct ParseModeError {
    pub value: String,
}

impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "css" => Ok(OutputMode::Css),
            other => Err(ParseModeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Whether styling is on, and for which surface.
///
/// This is the explicitly initialized value every painter carries. It is
/// `Copy` and never changes after construction, so independent instances
/// with independent signals can coexist in one process.
///
/// # Example
///
/// ```rust
/// use tincture::{BrowserGlobals, ColorConfig, Environment, RenderMode};
///
/// let piped = ColorConfig::resolve(&Environment::empty());
/// assert_eq!(piped.render_mode(), RenderMode::Plain);
///
/// let page = ColorConfig::resolve(&Environment::empty().browser(BrowserGlobals::new()));
/// assert_eq!(page.render_mode(), RenderMode::Css);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorConfig {
    enabled: bool,
    surface: Surface,
}

impl ColorConfig {
    /// Terminal surface with styling off.
    pub const PLAIN: ColorConfig = ColorConfig::new(Surface::Terminal, false);

    pub const fn new(surface: Surface, enabled: bool) -> Self {
        Self { enabled, surface }
    }

    /// Applies the signal precedence to `env`. First match wins:
    ///
    /// 1. Browser page: enabled unless the browser `NO_COLOR` flag is set.
    /// 2. `NO_COLOR` or `MCP_MODE` set: disabled.
    /// 3. `FORCE_COLOR` set to a non-empty value: enabled.
    /// 4. Output is an interactive terminal: enabled.
    /// 5. Otherwise disabled.
    pub fn resolve(env: &Environment) -> Self {
        let (config, reason) = Self::decide(env);
        debug!(
            reason = reason,
            surface = ?config.surface,
            enabled = config.enabled,
            "resolved color configuration"
        );
        config
    }

    /// Resolves against the running process.
    pub fn detect() -> Self {
        Self::resolve(&Environment::from_process())
    }

    /// Resolves with a caller override; only [`OutputMode::Auto`] consults `env`.
    pub fn for_mode(mode: OutputMode, env: &Environment) -> Self {
        match mode {
            OutputMode::Auto => Self::resolve(env),
            OutputMode::Term => Self::new(Surface::Terminal, true),
            OutputMode::Text => Self::PLAIN,
            OutputMode::Css => Self::new(Surface::Browser, true),
        }
    }

    fn decide(env: &Environment) -> (Self, &'static str) {
        if let Some(globals) = env.browser_globals() {
            return (Self::new(Surface::Browser, !globals.no_color), "browser");
        }
        let terminal = |enabled| Self::new(Surface::Terminal, enabled);
        if env.is_set(NO_COLOR) {
            (terminal(false), "no_color")
        } else if env.is_set(MCP_MODE) {
            (terminal(false), "mcp_mode")
        } else if env.is_truthy(FORCE_COLOR) {
            (terminal(true), "force_color")
        } else if env.is_terminal() {
            (terminal(true), "terminal")
        } else {
            (terminal(false), "default")
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Collapses both surfaces to [`RenderMode::Plain`] when styling is off.
    pub fn render_mode(&self) -> RenderMode {
        match (self.enabled, self.surface) {
            (false, _) => RenderMode::Plain,
            (true, Surface::Terminal) => RenderMode::Ansi,
            (true, Surface::Browser) => RenderMode::Css,
        }
    }

    pub fn table(&self) -> StyleTable {
        StyleTable::for_surface(self.surface)
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::PLAIN
    }
}
