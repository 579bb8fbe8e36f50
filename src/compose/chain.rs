//! Immutable, shareable style chains.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::env::ColorConfig;
use crate::render::{render, Output};
use crate::style::{ParseStyleError, Style};

#[derive(Debug)]
struct Link {
    style: Style,
    prev: Option<Arc<Link>>,
}

/// An ordered list of styles accumulated by chaining.
///
/// Chains are persistent: [`Chain::with`] returns a new chain that shares
/// its prefix with the original, which is left untouched. Two chains
/// extended from the same base never observe each other.
///
/// # Example
///
/// ```rust
/// use tincture::{Chain, Style};
///
/// let base = Chain::new().with(Style::Red);
/// let bold = base.with(Style::Bold);
/// let dim = base.with(Style::Dim);
///
/// assert_eq!(base.styles(), vec![Style::Red]);
/// assert_eq!(bold.styles(), vec![Style::Red, Style::Bold]);
/// assert_eq!(dim.styles(), vec![Style::Red, Style::Dim]);
/// ```
#[derive(Clone, Default)]
pub struct Chain {
    tail: Option<Arc<Link>>,
    len: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new chain with `style` appended.
    #[must_use]
    pub fn with(&self, style: Style) -> Self {
        Self {
            tail: Some(Arc::new(Link {
                style,
                prev: self.tail.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The styles in accumulation order.
    pub fn styles(&self) -> Vec<Style> {
        let mut styles = Vec::with_capacity(self.len);
        let mut cursor = self.tail.as_deref();
        while let Some(link) = cursor {
            styles.push(link.style);
            cursor = link.prev.as_deref();
        }
        styles.reverse();
        styles
    }

    pub fn render(&self, text: &str, config: ColorConfig) -> Output {
        render(&self.styles(), text, config)
    }
}

// Unlink iteratively so very deep chains cannot overflow the stack on drop.
impl Drop for Chain {
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => next = owned.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.styles() == other.styles()
    }
}

impl Eq for Chain {}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.styles()).finish()
    }
}

/// Writes the dotted path form, e.g. `red.bold`.
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, style) in self.styles().into_iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(style.name())?;
        }
        Ok(())
    }
}

impl FromIterator<Style> for Chain {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        iter.into_iter().fold(Chain::new(), |chain, style| chain.with(style))
    }
}

impl FromStr for Chain {
    type Err = ParseStyleError;

    /// Parses a dotted path such as `"red.bold.underline"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.split('.').any(str::is_empty) {
            return Err(ParseStyleError::EmptyPath {
                path: s.to_string(),
            });
        }
        trimmed
            .split('.')
            .map(str::parse::<Style>)
            .collect::<Result<Chain, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Surface;

    #[test]
    fn test_new_chain_is_empty() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.styles().is_empty());
    }

    #[test]
    fn test_with_does_not_mutate_base() {
        let base = Chain::new().with(Style::Red);
        let _extended = base.with(Style::Bold);
        assert_eq!(base.styles(), vec![Style::Red]);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_branches_are_independent() {
        let base = Chain::new().with(Style::Blue);
        let a = base.with(Style::Bold).with(Style::Underline);
        let b = base.with(Style::Dim);
        assert_eq!(a.styles(), vec![Style::Blue, Style::Bold, Style::Underline]);
        assert_eq!(b.styles(), vec![Style::Blue, Style::Dim]);
    }

    #[test]
    fn test_same_step_twice_gives_equal_chains() {
        let base = Chain::new().with(Style::Green);
        assert_eq!(base.with(Style::Bold), base.with(Style::Bold));
    }

    #[test]
    fn test_from_str_dotted_path() {
        let chain: Chain = "red.bold.underline".parse().unwrap();
        assert_eq!(chain.styles(), vec![Style::Red, Style::Bold, Style::Underline]);
        assert_eq!(chain.to_string(), "red.bold.underline");
    }

    #[test]
    fn test_from_str_rejects_unknown_and_empty() {
        assert_eq!(
            "red.sparkle".parse::<Chain>(),
            Err(ParseStyleError::UnknownStyle {
                name: "sparkle".to_string()
            })
        );
        assert!(matches!(
            "".parse::<Chain>(),
            Err(ParseStyleError::EmptyPath { .. })
        ));
        assert!(matches!(
            "red..bold".parse::<Chain>(),
            Err(ParseStyleError::EmptyPath { .. })
        ));
    }

    #[test]
    fn test_render_uses_accumulation_order() {
        let config = ColorConfig::new(Surface::Terminal, true);
        let chain: Chain = [Style::Underline, Style::Yellow].into_iter().collect();
        assert_eq!(chain.render("x", config), "\x1b[4m\x1b[33mx\x1b[0m");
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let mut chain = Chain::new();
        for _ in 0..200_000 {
            chain = chain.with(Style::Bold);
        }
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }

    #[test]
    fn test_chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chain>();
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_style() -> impl Strategy<Value = Style> {
        prop::sample::select(Style::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn collected_chain_preserves_order(styles in prop::collection::vec(any_style(), 0..16)) {
            let chain: Chain = styles.iter().copied().collect();
            prop_assert_eq!(chain.len(), styles.len());
            prop_assert_eq!(chain.styles(), styles);
        }

        #[test]
        fn branching_leaves_both_sides_intact(
            prefix in prop::collection::vec(any_style(), 0..8),
            left in any_style(),
            right in any_style(),
        ) {
            let base: Chain = prefix.iter().copied().collect();
            let l = base.with(left);
            let r = base.with(right);

            let mut expected_l = prefix.clone();
            expected_l.push(left);
            let mut expected_r = prefix.clone();
            expected_r.push(right);

            prop_assert_eq!(base.styles(), prefix);
            prop_assert_eq!(l.styles(), expected_l);
            prop_assert_eq!(r.styles(), expected_r);
        }
    }
}
