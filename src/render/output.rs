//! Rendered values.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::style::{Surface, CONSOLE_MARKER};

/// Arguments for a browser `console.log` call.
///
/// With a declaration this is the two-element payload
/// `["%c<text>", "<css>"]`; without one it is the single-element `[text]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleArgs {
    template: String,
    declaration: Option<String>,
}

impl ConsoleArgs {
    pub(crate) fn styled(text: &str, declaration: &str) -> Self {
        let mut template = String::with_capacity(CONSOLE_MARKER.len() + text.len());
        template.push_str(CONSOLE_MARKER);
        template.push_str(text);
        Self {
            template,
            declaration: Some(declaration.to_string()),
        }
    }

    pub(crate) fn unstyled(text: &str) -> Self {
        Self {
            template: text.to_string(),
            declaration: None,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The space-joined CSS fragments, absent for unstyled payloads.
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    /// The payload as positional console arguments (one or two elements).
    pub fn args(&self) -> Vec<&str> {
        let mut args = vec![self.template.as_str()];
        args.extend(self.declaration.as_deref());
        args
    }
}

impl Serialize for ConsoleArgs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let args = self.args();
        let mut seq = serializer.serialize_seq(Some(args.len()))?;
        for arg in args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

/// The result of painting text.
///
/// Terminal and plain rendering produce [`Output::Plain`]; a browser surface
/// always produces [`Output::Console`], even when styling is off.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Output {
    Plain(String),
    Console(ConsoleArgs),
}

impl Output {
    /// Output for an empty chain or disabled styling on `surface`.
    pub(crate) fn unstyled(text: &str, surface: Surface) -> Self {
        match surface {
            Surface::Terminal => Output::Plain(text.to_string()),
            Surface::Browser => Output::Console(ConsoleArgs::unstyled(text)),
        }
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Output::Plain(s) => Some(s),
            Output::Console(_) => None,
        }
    }

    pub fn into_plain(self) -> Option<String> {
        match self {
            Output::Plain(s) => Some(s),
            Output::Console(_) => None,
        }
    }

    pub fn as_console(&self) -> Option<&ConsoleArgs> {
        match self {
            Output::Plain(_) => None,
            Output::Console(args) => Some(args),
        }
    }
}

/// Writes the terminal string, or the console template.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Plain(s) => f.write_str(s),
            Output::Console(args) => f.write_str(args.template()),
        }
    }
}

impl PartialEq<&str> for Output {
    fn eq(&self, other: &&str) -> bool {
        self.as_plain() == Some(*other)
    }
}

impl PartialEq<str> for Output {
    fn eq(&self, other: &str) -> bool {
        self.as_plain() == Some(other)
    }
}
