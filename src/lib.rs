//! # Tincture - minimal chainable text styling
//!
//! Tincture wraps strings in ANSI escape sequences, or in `%c` + CSS payloads
//! for a browser console, and stays out of the way when the environment asks
//! for plain text.
//!
//! ## Quick start
//!
//! ```rust
//! let chalk = tincture::chalk();
//! println!("{}", chalk.red().bold().paint("error:"));
//! println!("{}", tincture::fast().green_bold("done"));
//! ```
//!
//! ## Deciding whether to style
//!
//! The decision is made once, from these signals, first match wins:
//!
//! 1. Inside a browser page (`window` and `document` present): on, unless the
//!    page sets its own `NO_COLOR` flag.
//! 2. `NO_COLOR` or `MCP_MODE` set, even to an empty value: off.
//! 3. `FORCE_COLOR` set: on.
//! 4. stdout is a terminal: on.
//! 5. Otherwise off.
//!
//! [`chalk`] and [`fast`] use a process-wide [`ColorConfig`] resolved at first
//! use. For tests, or to react to a changed environment, build an
//! [`Environment`] by hand and pass the resolved config explicitly:
//!
//! ```rust
//! use tincture::{Chalk, ColorConfig, Environment, FORCE_COLOR};
//!
//! let config = ColorConfig::resolve(&Environment::empty().var(FORCE_COLOR, "1"));
//! let chalk = Chalk::new(config);
//! assert_eq!(chalk.red().bold().paint("x"), "\x1b[31m\x1b[1mx\x1b[0m");
//! ```
//!
//! ## Two front ends
//!
//! - [`Chalk`]: every accessor returns a [`Painter`] that has the same
//!   accessors again, to any depth. Painters are immutable, so a shared base
//!   can be branched without interference.
//! - [`FastChalk`]: a fixed set of [`Combo`]s with their directives joined up
//!   front. Combinations outside the set are simply absent.
//!
//! Both render through the same rules: directives in accumulation order, then
//! the text, then a single reset. A browser surface yields
//! [`Output::Console`] instead of a string.

pub mod compose;
pub mod env;
mod global;
pub mod render;
pub mod style;

pub use compose::{Chain, Chalk, Combo, FastChalk, Painter};
pub use env::{
    BrowserGlobals, ColorConfig, Environment, OutputMode, ParseModeError, RenderMode,
    FORCE_COLOR, MCP_MODE, NO_COLOR,
};
pub use global::{chalk, fast, global_config};
pub use render::{register_filters, render, ConsoleArgs, Formatter, Output};
pub use style::{
    Directive, ParseStyleError, Style, StyleTable, Surface, CONSOLE_MARKER, RESET,
};
