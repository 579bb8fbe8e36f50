//! Style composition.
//!
//! Two front ends over the same renderer:
//!
//! - [`Chalk`] / [`Painter`]: arbitrary-depth chaining over an immutable [`Chain`]
//! - [`FastChalk`]: a fixed set of [`Combo`]s prepared once, no chaining

mod chain;
mod fast;
mod painter;

pub use chain::Chain;
pub use fast::{Combo, FastChalk};
pub use painter::{Chalk, Painter};
