//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::compose::Chain;
use crate::env::ColorConfig;
use crate::style::{ParseStyleError, Surface};

/// Registers the `style` filter on a MiniJinja environment.
///
/// `{{ value | style("red.bold") }}` paints `value` through the dotted style
/// path. Templates produce strings, so a browser configuration renders the
/// text unstyled. An unknown style name fails the render.
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use tincture::{register_filters, ColorConfig, Surface};
///
/// let mut env = Environment::new();
/// register_filters(&mut env, ColorConfig::new(Surface::Terminal, true));
/// let out = env
///     .render_str(r#"{{ name | style("green.bold") }}"#, context! { name => "ok" })
///     .unwrap();
/// assert_eq!(out, "\x1b[32m\x1b[1mok\x1b[0m");
/// ```
pub fn register_filters(env: &mut Environment<'_>, config: ColorConfig) {
    let config = match config.surface() {
        Surface::Terminal => config,
        Surface::Browser => ColorConfig::PLAIN,
    };

    env.add_filter("style", move |value: Value, path: String| -> Result<String, Error> {
        let chain: Chain = path.parse().map_err(|e: ParseStyleError| {
            Error::new(ErrorKind::InvalidOperation, e.to_string())
        })?;
        Ok(chain.render(&value.to_string(), config).to_string())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn render(config: ColorConfig, template: &str) -> Result<String, Error> {
        let mut env = Environment::new();
        register_filters(&mut env, config);
        env.render_str(template, context! { message => "hi", count => 3 })
    }

    #[test]
    fn test_style_filter_terminal() {
        let out = render(
            ColorConfig::new(Surface::Terminal, true),
            r#"{{ message | style("red") }}"#,
        )
        .unwrap();
        assert_eq!(out, "\x1b[31mhi\x1b[0m");
    }

    #[test]
    fn test_style_filter_non_string_value() {
        let out = render(
            ColorConfig::new(Surface::Terminal, true),
            r#"{{ count | style("bold") }}"#,
        )
        .unwrap();
        assert_eq!(out, "\x1b[1m3\x1b[0m");
    }

    #[test]
    fn test_style_filter_disabled() {
        let out = render(ColorConfig::PLAIN, r#"[{{ message | style("red.bold") }}]"#).unwrap();
        assert_eq!(out, "[hi]");
    }

    #[test]
    fn test_style_filter_browser_is_plain() {
        let out = render(
            ColorConfig::new(Surface::Browser, true),
            r#"{{ message | style("red") }}"#,
        )
        .unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_style_filter_unknown_style() {
        let err = render(
            ColorConfig::new(Surface::Terminal, true),
            r#"{{ message | style("red.sparkle") }}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("sparkle"));
    }
}
