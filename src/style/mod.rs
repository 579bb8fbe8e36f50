//! Style identifiers and their per-surface directives.
//!
//! - [`Style`]: the closed set of color and modifier names
//! - [`StyleTable`]: maps a style to a [`Directive`] for one [`Surface`]
//! - [`ParseStyleError`]: errors from parsing style names
//!
//! The tables are fixed. Aliases (`grey`, `blueBright`) are resolved before
//! lookup so they can never drift from their targets.

mod error;
mod name;
mod table;

pub use error::ParseStyleError;
pub use name::Style;
pub use table::{Directive, StyleTable, Surface, CONSOLE_MARKER, RESET};
