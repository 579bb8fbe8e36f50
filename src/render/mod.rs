//! Surface rendering.
//!
//! - [`render`]: one-shot rendering of a style list
//! - [`Formatter`]: a style list prepared once and applied many times
//! - [`Output`]: a terminal string or a browser console payload
//! - [`register_filters`]: a `style` filter for MiniJinja templates

mod filters;
mod formatter;
mod output;

pub use filters::register_filters;
pub use formatter::{render, Formatter};
pub use output::{ConsoleArgs, Output};
