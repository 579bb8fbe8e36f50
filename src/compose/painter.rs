//! The chaining front end: [`Chalk`] and [`Painter`].

use crate::env::ColorConfig;
use crate::render::Output;
use crate::style::{ParseStyleError, Style};

use super::chain::Chain;

/// Generates one accessor per style name on a type with a `then` method.
macro_rules! style_accessors {
    ($ty:ty) => {
        impl $ty {
            #[must_use]
            pub fn black(&self) -> Painter {
                self.then(Style::Black)
            }
            #[must_use]
            pub fn red(&self) -> Painter {
                self.then(Style::Red)
            }
            #[must_use]
            pub fn green(&self) -> Painter {
                self.then(Style::Green)
            }
            #[must_use]
            pub fn yellow(&self) -> Painter {
                self.then(Style::Yellow)
            }
            #[must_use]
            pub fn blue(&self) -> Painter {
                self.then(Style::Blue)
            }
            #[must_use]
            pub fn magenta(&self) -> Painter {
                self.then(Style::Magenta)
            }
            #[must_use]
            pub fn cyan(&self) -> Painter {
                self.then(Style::Cyan)
            }
            #[must_use]
            pub fn white(&self) -> Painter {
                self.then(Style::White)
            }
            #[must_use]
            pub fn gray(&self) -> Painter {
                self.then(Style::Gray)
            }
            /// Alias of [`gray`](Self::gray).
            #[must_use]
            pub fn grey(&self) -> Painter {
                self.then(Style::Grey)
            }
            /// Renders exactly like [`cyan`](Self::cyan).
            #[must_use]
            pub fn blue_bright(&self) -> Painter {
                self.then(Style::BlueBright)
            }
            #[must_use]
            pub fn bold(&self) -> Painter {
                self.then(Style::Bold)
            }
            #[must_use]
            pub fn dim(&self) -> Painter {
                self.then(Style::Dim)
            }
            #[must_use]
            pub fn underline(&self) -> Painter {
                self.then(Style::Underline)
            }

            /// Extends with a style chosen at runtime.
            #[must_use]
            pub fn style(&self, style: Style) -> Painter {
                self.then(style)
            }

            /// Extends with every style in a dotted path such as `"red.bold"`.
            pub fn path(&self, path: &str) -> Result<Painter, ParseStyleError> {
                let parsed: Chain = path.parse()?;
                Ok(parsed
                    .styles()
                    .into_iter()
                    .fold(self.then_none(), |painter, style| painter.then(style)))
            }
        }
    };
}

/// The root of the chaining API.
///
/// Calling it directly with [`Chalk::call`] never styles. Every accessor
/// returns a [`Painter`] that carries the same accessors, so chains can be
/// any depth and may repeat styles.
///
/// # Example
///
/// ```rust
/// use tincture::{Chalk, ColorConfig, Surface};
///
/// let chalk = Chalk::new(ColorConfig::new(Surface::Terminal, true));
/// assert_eq!(chalk.red().bold().paint("x"), "\x1b[31m\x1b[1mx\x1b[0m");
/// assert_eq!(chalk.call("x"), "x");
///
/// let plain = Chalk::new(ColorConfig::PLAIN);
/// assert_eq!(plain.red().bold().paint("x"), "x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chalk {
    config: ColorConfig,
}

impl Chalk {
    pub fn new(config: ColorConfig) -> Self {
        Self { config }
    }

    /// A root bound to a fresh resolution of the running process.
    pub fn detect() -> Self {
        Self::new(ColorConfig::detect())
    }

    pub fn config(&self) -> ColorConfig {
        self.config
    }

    /// The identity call: returns `text` unchanged in every mode.
    pub fn call(&self, text: &str) -> String {
        text.to_string()
    }

    fn then_none(&self) -> Painter {
        Painter {
            chain: Chain::new(),
            config: self.config,
        }
    }

    fn then(&self, style: Style) -> Painter {
        Painter {
            chain: Chain::new().with(style),
            config: self.config,
        }
    }
}

style_accessors!(Chalk);

/// A chain of styles bound to a configuration.
///
/// Painters are immutable; each accessor returns a new painter and leaves
/// `self` usable, so one base can be branched freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painter {
    chain: Chain,
    config: ColorConfig,
}

impl Painter {
    /// Renders `text` through the accumulated styles.
    pub fn paint(&self, text: &str) -> Output {
        self.chain.render(text, self.config)
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn config(&self) -> ColorConfig {
        self.config
    }

    fn then_none(&self) -> Painter {
        self.clone()
    }

    fn then(&self, style: Style) -> Painter {
        Painter {
            chain: self.chain.with(style),
            config: self.config,
        }
    }
}

style_accessors!(Painter);
