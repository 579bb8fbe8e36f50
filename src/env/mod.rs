//! Environment detection.
//!
//! - [`Environment`]: a snapshot of the variables, TTY flag and browser globals
//! - [`ColorConfig`]: the enable/disable decision plus the target [`Surface`]
//! - [`OutputMode`]: an explicit caller override
//!
//! [`Surface`]: crate::Surface

mod config;
mod signals;

pub use config::{ColorConfig, OutputMode, ParseModeError, RenderMode};
pub use signals::{BrowserGlobals, Environment, FORCE_COLOR, MCP_MODE, NO_COLOR};
