//! Process-wide default instances.

use once_cell::sync::Lazy;

use crate::compose::{Chalk, FastChalk};
use crate::env::ColorConfig;

static CONFIG: Lazy<ColorConfig> = Lazy::new(ColorConfig::detect);

static FAST: Lazy<FastChalk> = Lazy::new(|| FastChalk::new(*CONFIG));

/// The configuration resolved from the process on first use.
///
/// It is never re-evaluated; build a [`ColorConfig`] explicitly to react to
/// a changed environment.
pub fn global_config() -> ColorConfig {
    *CONFIG
}

/// A chaining root bound to [`global_config`].
pub fn chalk() -> Chalk {
    Chalk::new(global_config())
}

/// The static front end bound to [`global_config`].
pub fn fast() -> &'static FastChalk {
    &FAST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_is_stable() {
        assert_eq!(global_config(), global_config());
        assert_eq!(chalk().config(), fast().config());
    }

    #[test]
    fn test_global_identity_call() {
        assert_eq!(chalk().call("x"), "x");
        assert_eq!(fast().call("x"), "x");
    }
}
