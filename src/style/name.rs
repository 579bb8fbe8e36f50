//! The closed set of style identifiers.

use std::fmt;
use std::str::FromStr;

use super::error::ParseStyleError;

/// One of the fixed style identifiers: eight colors, two aliases and three
/// modifiers.
///
/// `Grey` is an alias of `Gray` and `BlueBright` is an alias of `Cyan`; both
/// resolve to the same directive as their target on every surface. See
/// [`Style::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Grey,
    BlueBright,
    Bold,
    Dim,
    Underline,
}

impl Style {
    /// Every style identifier, colors first, then modifiers.
    pub const ALL: [Style; 14] = [
        Style::Black,
        Style::Red,
        Style::Green,
        Style::Yellow,
        Style::Blue,
        Style::Magenta,
        Style::Cyan,
        Style::White,
        Style::Gray,
        Style::Grey,
        Style::BlueBright,
        Style::Bold,
        Style::Dim,
        Style::Underline,
    ];

    /// The public camelCase name of the style (`"blueBright"`).
    pub fn name(self) -> &'static str {
        match self {
            Style::Black => "black",
            Style::Red => "red",
            Style::Green => "green",
            Style::Yellow => "yellow",
            Style::Blue => "blue",
            Style::Magenta => "magenta",
            Style::Cyan => "cyan",
            Style::White => "white",
            Style::Gray => "gray",
            Style::Grey => "grey",
            Style::BlueBright => "blueBright",
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Underline => "underline",
        }
    }

    /// Resolves aliases to the style whose directive they share.
    ///
    /// `BlueBright` maps to `Cyan`, not to a distinct bright blue.
    pub fn canonical(self) -> Style {
        match self {
            Style::Grey => Style::Gray,
            Style::BlueBright => Style::Cyan,
            other => other,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Accepts the camelCase name and, for `blueBright`, the snake_case
    /// spelling used by the accessor methods.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "blue_bright" {
            return Ok(Style::BlueBright);
        }
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| ParseStyleError::UnknownStyle {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
        }
    }

    #[test]
    fn test_snake_case_blue_bright() {
        assert_eq!("blue_bright".parse::<Style>(), Ok(Style::BlueBright));
    }

    #[test]
    fn test_unknown_name() {
        let err = "purple".parse::<Style>().unwrap_err();
        assert_eq!(
            err,
            ParseStyleError::UnknownStyle {
                name: "purple".to_string()
            }
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Red".parse::<Style>().is_err());
        assert!("bluebright".parse::<Style>().is_err());
    }

    #[test]
    fn test_canonical_aliases() {
        assert_eq!(Style::Grey.canonical(), Style::Gray);
        assert_eq!(Style::BlueBright.canonical(), Style::Cyan);
        assert_eq!(Style::Blue.canonical(), Style::Blue);
        assert_eq!(Style::Bold.canonical(), Style::Bold);
    }

}
