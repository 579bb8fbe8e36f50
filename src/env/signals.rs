//! Snapshot of the ambient signals that decide whether styling is active.

use std::collections::BTreeMap;

use console::Term;

/// Disables styling when set, with absolute priority outside a browser.
pub const NO_COLOR: &str = "NO_COLOR";
/// Disables styling when set; same priority as [`NO_COLOR`].
pub const MCP_MODE: &str = "MCP_MODE";
/// Enables styling when set to a non-empty value, unless a disabling
/// variable is also set.
pub const FORCE_COLOR: &str = "FORCE_COLOR";

const SIGNAL_VARS: [&str; 3] = [NO_COLOR, MCP_MODE, FORCE_COLOR];

/// Globals visible to code running inside a browser page.
///
/// A browser context requires both `window` and `document`; a host that
/// only exposes one of them (a web worker, a test shim) is treated as a
/// terminal context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserGlobals {
    pub window: bool,
    pub document: bool,
    /// Browser-scoped equivalent of the `NO_COLOR` variable.
    pub no_color: bool,
}

impl BrowserGlobals {
    /// A regular page: `window` and `document` present, `NO_COLOR` unset.
    pub fn new() -> Self {
        Self {
            window: true,
            document: true,
            no_color: false,
        }
    }

    /// Sets the browser-scoped `NO_COLOR` flag.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    fn is_page(&self) -> bool {
        self.window && self.document
    }
}

impl Default for BrowserGlobals {
    fn default() -> Self {
        Self::new()
    }
}

/// The ambient signals consumed by the resolver.
///
/// Built from the running process with [`Environment::from_process`], or by
/// hand so tests and embedders can describe any situation without touching
/// the real process environment.
///
/// # Example
///
/// ```rust
/// use tincture::{ColorConfig, Environment, FORCE_COLOR, NO_COLOR};
///
/// let env = Environment::empty().var(FORCE_COLOR, "1").var(NO_COLOR, "");
/// assert!(!ColorConfig::resolve(&env).is_enabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    terminal: bool,
    browser: Option<BrowserGlobals>,
}

impl Environment {
    /// No variables, not a terminal, not a browser.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads the signal variables and whether stdout is attached to a terminal.
    ///
    /// Native processes never see browser globals; a wasm host describes
    /// them with [`Environment::browser`].
    pub fn from_process() -> Self {
        let vars = SIGNAL_VARS
            .iter()
            .filter_map(|key| {
                std::env::var_os(key)
                    .map(|value| (key.to_string(), value.to_string_lossy().into_owned()))
            })
            .collect();

        Self {
            vars,
            terminal: Term::stdout().is_term(),
            browser: None,
        }
    }

    /// Sets a variable, returning the updated snapshot.
    pub fn var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets whether the output stream is an interactive terminal.
    pub fn terminal(mut self, is_terminal: bool) -> Self {
        self.terminal = is_terminal;
        self
    }

    /// Marks the snapshot as taken inside a browser with the given globals.
    pub fn browser(mut self, globals: BrowserGlobals) -> Self {
        self.browser = Some(globals);
        self
    }

    /// Whether `key` is present. An empty value still counts as set.
    pub fn is_set(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether `key` is present with a non-empty value.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The browser globals, if both `window` and `document` are present.
    pub fn browser_globals(&self) -> Option<&BrowserGlobals> {
        self.browser.as_ref().filter(|globals| globals.is_page())
    }

    pub fn is_browser(&self) -> bool {
        self.browser_globals().is_some()
    }
}
