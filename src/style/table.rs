//! Per-surface directive tables.

use std::fmt;

use super::name::Style;

/// The ANSI sequence that clears every active attribute.
pub const RESET: &str = "\x1b[0m";

/// Prefix marking a browser console template argument as styled.
pub const CONSOLE_MARKER: &str = "%c";

/// The kind of output a rendered value is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// A terminal that understands ANSI escape sequences.
    Terminal,
    /// A browser devtools console, styled with `%c` and CSS.
    Browser,
}

/// An opaque rendering instruction for one style on one surface.
///
/// On a terminal this is an escape sequence such as `"\x1b[31m"`; in a
/// browser it is a CSS declaration such as `"color: #ff0000;"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive(&'static str);

impl Directive {
    /// Returns the raw directive text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A fixed mapping from [`Style`] to [`Directive`] for one surface.
///
/// Both tables define the same name set; aliases are resolved through
/// [`Style::canonical`] before the lookup so `grey`/`gray` and
/// `blueBright`/`cyan` always agree.
///
/// # Example
///
/// ```rust
/// use tincture::{Style, StyleTable};
///
/// assert_eq!(StyleTable::ANSI.lookup(Style::Red).as_str(), "\x1b[31m");
/// assert_eq!(StyleTable::CSS.lookup(Style::Red).as_str(), "color: #ff0000;");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTable {
    surface: Surface,
}

impl StyleTable {
    /// Terminal escape codes.
    pub const ANSI: StyleTable = StyleTable {
        surface: Surface::Terminal,
    };

    /// Browser console CSS fragments.
    pub const CSS: StyleTable = StyleTable {
        surface: Surface::Browser,
    };

    /// Returns the table for `surface`.
    pub fn for_surface(surface: Surface) -> StyleTable {
        match surface {
            Surface::Terminal => Self::ANSI,
            Surface::Browser => Self::CSS,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Looks up the directive for `style`. Never fails for the closed set.
    pub fn lookup(&self, style: Style) -> Directive {
        let code = match self.surface {
            Surface::Terminal => ansi_code(style.canonical()),
            Surface::Browser => css_fragment(style.canonical()),
        };
        Directive(code)
    }
}

fn ansi_code(style: Style) -> &'static str {
    match style {
        Style::Bold => "\x1b[1m",
        Style::Dim => "\x1b[2m",
        Style::Underline => "\x1b[4m",
        Style::Black => "\x1b[30m",
        Style::Red => "\x1b[31m",
        Style::Green => "\x1b[32m",
        Style::Yellow => "\x1b[33m",
        Style::Blue => "\x1b[34m",
        Style::Magenta => "\x1b[35m",
        Style::Cyan | Style::BlueBright => "\x1b[36m",
        Style::White => "\x1b[37m",
        Style::Gray | Style::Grey => "\x1b[90m",
    }
}

fn css_fragment(style: Style) -> &'static str {
    match style {
        Style::Bold => "font-weight: bold;",
        Style::Dim => "opacity: 0.5;",
        Style::Underline => "text-decoration: underline;",
        Style::Black => "color: #000000;",
        Style::Red => "color: #ff0000;",
        Style::Green => "color: #00ff00;",
        Style::Yellow => "color: #ffff00;",
        Style::Blue => "color: #0000ff;",
        Style::Magenta => "color: #ff00ff;",
        Style::Cyan | Style::BlueBright => "color: #00ffff;",
        Style::White => "color: #ffffff;",
        Style::Gray | Style::Grey => "color: #808080;",
    }
}
