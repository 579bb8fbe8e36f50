//! The static front end: a fixed table of precomputed formatters.

use crate::env::ColorConfig;
use crate::render::{Formatter, Output};
use crate::style::Style;

macro_rules! combos {
    ($($variant:ident => $method:ident, $name:literal, [$($style:ident),+];)+) => {
        /// The pre-enumerated style combinations offered by [`FastChalk`].
        ///
        /// Every single style, plus a few color/modifier pairs in a fixed
        /// order. `BoldRed` and `RedBold` are distinct entries that emit
        /// their directives in opposite order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Combo {
            $($variant,)+
        }

        impl Combo {
            pub const ALL: &'static [Combo] = &[$(Combo::$variant,)+];

            /// The public camelCase name (`"redBold"`).
            pub fn name(self) -> &'static str {
                match self {
                    $(Combo::$variant => $name,)+
                }
            }

            /// The styles applied, in order.
            pub fn styles(self) -> &'static [Style] {
                match self {
                    $(Combo::$variant => &[$(Style::$style),+],)+
                }
            }
        }

        impl FastChalk {
            $(
                pub fn $method(&self, text: &str) -> Output {
                    self.apply(Combo::$variant, text)
                }
            )+
        }
    };
}

combos! {
    Black => black, "black", [Black];
    Red => red, "red", [Red];
    Green => green, "green", [Green];
    Yellow => yellow, "yellow", [Yellow];
    Blue => blue, "blue", [Blue];
    Magenta => magenta, "magenta", [Magenta];
    Cyan => cyan, "cyan", [Cyan];
    White => white, "white", [White];
    Gray => gray, "gray", [Gray];
    Grey => grey, "grey", [Grey];
    BlueBright => blue_bright, "blueBright", [BlueBright];
    Bold => bold, "bold", [Bold];
    Dim => dim, "dim", [Dim];
    Underline => underline, "underline", [Underline];
    RedBold => red_bold, "redBold", [Red, Bold];
    GreenBold => green_bold, "greenBold", [Green, Bold];
    BlueBold => blue_bold, "blueBold", [Blue, Bold];
    YellowBold => yellow_bold, "yellowBold", [Yellow, Bold];
    RedUnderline => red_underline, "redUnderline", [Red, Underline];
    GreenUnderline => green_underline, "greenUnderline", [Green, Underline];
    BlueUnderline => blue_underline, "blueUnderline", [Blue, Underline];
    BoldRed => bold_red, "boldRed", [Bold, Red];
    BoldGreen => bold_green, "boldGreen", [Bold, Green];
    BoldBlue => bold_blue, "boldBlue", [Bold, Blue];
    BoldYellow => bold_yellow, "boldYellow", [Bold, Yellow];
}

impl Combo {
    /// Looks up a combination by its camelCase name.
    pub fn from_name(name: &str) -> Option<Combo> {
        Combo::ALL.iter().copied().find(|combo| combo.name() == name)
    }
}

/// Styling without chaining: every combination is prepared up front.
///
/// Construction joins the directives of each [`Combo`] once; applying a
/// style afterwards is a single concatenation. Combinations outside the
/// fixed set do not exist: [`FastChalk::get`] returns `None` for them.
///
/// # Example
///
/// ```rust
/// use tincture::{ColorConfig, FastChalk, Surface};
///
/// let fast = FastChalk::new(ColorConfig::new(Surface::Terminal, true));
/// assert_eq!(fast.red_bold("x"), "\x1b[31m\x1b[1mx\x1b[0m");
/// assert_eq!(fast.bold_red("x"), "\x1b[1m\x1b[31mx\x1b[0m");
/// assert!(fast.get("greenDim").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastChalk {
    config: ColorConfig,
    formatters: Vec<Formatter>,
}

impl FastChalk {
    pub fn new(config: ColorConfig) -> Self {
        let formatters = Combo::ALL
            .iter()
            .map(|combo| Formatter::new(combo.styles(), config))
            .collect();
        Self { config, formatters }
    }

    pub fn config(&self) -> ColorConfig {
        self.config
    }

    /// The identity call: returns `text` unchanged in every mode.
    pub fn call(&self, text: &str) -> String {
        text.to_string()
    }

    pub fn formatter(&self, combo: Combo) -> &Formatter {
        // `formatters` is built from `Combo::ALL`, which lists every variant
        // in declaration order.
        &self.formatters[combo as usize]
    }

    /// The formatter for a camelCase combination name, if it is enumerated.
    pub fn get(&self, name: &str) -> Option<&Formatter> {
        Combo::from_name(name).map(|combo| self.formatter(combo))
    }

    pub fn apply(&self, combo: Combo, text: &str) -> Output {
        self.formatter(combo).apply(text)
    }
}
