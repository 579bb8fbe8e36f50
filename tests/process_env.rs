//! Resolution against the real process environment.
//!
//! These tests mutate process-wide variables, so they run serially and
//! restore what they change.

use std::ffi::OsString;

use serial_test::serial;
use tincture::{Chalk, ColorConfig, Environment, FastChalk, FORCE_COLOR, MCP_MODE, NO_COLOR};

struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
        let saved = [NO_COLOR, MCP_MODE, FORCE_COLOR]
            .into_iter()
            .map(|key| (key, std::env::var_os(key)))
            .collect();
        for key in [NO_COLOR, MCP_MODE, FORCE_COLOR] {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            if let Some(value) = value {
                std::env::set_var(key, value);
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_detect_force_color() {
    let _guard = EnvGuard::set(&[(FORCE_COLOR, Some("1"))]);
    let chalk = Chalk::detect();
    assert_eq!(chalk.red().paint("test"), "\x1b[31mtest\x1b[0m");
}

#[test]
#[serial]
fn test_detect_no_color() {
    let _guard = EnvGuard::set(&[(NO_COLOR, Some("1"))]);
    assert_eq!(Chalk::detect().red().paint("test"), "test");
}

#[test]
#[serial]
fn test_detect_mcp_mode() {
    let _guard = EnvGuard::set(&[(MCP_MODE, Some("1"))]);
    assert_eq!(Chalk::detect().red().paint("test"), "test");
}

#[test]
#[serial]
fn test_detect_no_color_over_force_color() {
    let _guard = EnvGuard::set(&[(NO_COLOR, Some("1")), (FORCE_COLOR, Some("1"))]);
    assert!(!ColorConfig::detect().is_enabled());
}

#[test]
#[serial]
fn test_detect_mcp_mode_over_force_color() {
    let _guard = EnvGuard::set(&[(MCP_MODE, Some("1")), (FORCE_COLOR, Some("1"))]);
    let fast = FastChalk::new(ColorConfig::detect());
    assert_eq!(fast.red_bold("test"), "test");
}

#[test]
#[serial]
fn test_detect_empty_no_color_disables() {
    let _guard = EnvGuard::set(&[(NO_COLOR, Some("")), (FORCE_COLOR, Some("1"))]);
    assert!(!ColorConfig::detect().is_enabled());
}

#[test]
#[serial]
fn test_empty_force_color_defers_to_terminal() {
    let _guard = EnvGuard::set(&[(FORCE_COLOR, Some(""))]);
    let env = Environment::from_process();
    assert!(!ColorConfig::resolve(&env.clone().terminal(false)).is_enabled());
    assert!(ColorConfig::resolve(&env.terminal(true)).is_enabled());
}

#[test]
#[serial]
fn test_empty_mcp_mode_disables_over_force_color() {
    let _guard = EnvGuard::set(&[(MCP_MODE, Some("")), (FORCE_COLOR, Some("1"))]);
    let env = Environment::from_process().terminal(true);
    assert!(!ColorConfig::resolve(&env).is_enabled());
}

#[test]
#[serial]
fn test_instances_keep_their_resolution() {
    let forced = {
        let _guard = EnvGuard::set(&[(FORCE_COLOR, Some("1"))]);
        Chalk::detect()
    };
    let _guard = EnvGuard::set(&[(NO_COLOR, Some("1"))]);
    let disabled = Chalk::detect();

    assert_eq!(forced.red().paint("x"), "\x1b[31mx\x1b[0m");
    assert_eq!(disabled.red().paint("x"), "x");
}
