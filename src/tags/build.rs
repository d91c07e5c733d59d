//! Polyfill service URL and tag construction.
//!
//! Pure functions of the canonical configuration: identical config, identical
//! output, so the results are snapshot-testable and builds stay reproducible.

use super::{AttrValue, TagDescriptor};
use crate::config::PolyfillConfig;

/// Polyfill service endpoint, without the extension suffix.
const SERVICE_BASE: &str = "https://cdn.polyfill.io/v2/polyfill";

/// Builds the polyfill script URL for `config`.
///
/// Query parameters are appended in a fixed order (`features`, `excludes`,
/// `flags`, `callback`, `unknown`, `rum`) and only when present; `rum`
/// serializes as `1`/`0`. Values go in verbatim: feature tokens, enum
/// literals, and validated callback names are already URL-safe. With no
/// parameters the URL carries no `?` at all.
///
/// # Examples
///
/// - all defaults, development mode → `https://cdn.polyfill.io/v2/polyfill.js`
/// - `minify` with `features = "default-3.6"` →
///   `https://cdn.polyfill.io/v2/polyfill.min.js?features=default-3.6`
pub fn build_src(config: &PolyfillConfig) -> String {
    let mut src = String::from(SERVICE_BASE);
    src.push_str(if config.minify { ".min.js" } else { ".js" });

    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(features) = &config.features {
        params.push(("features", features));
    }
    if let Some(excludes) = &config.excludes {
        params.push(("excludes", excludes));
    }
    if let Some(flags) = config.flags {
        params.push(("flags", flags.as_str()));
    }
    if let Some(callback) = &config.callback {
        params.push(("callback", callback));
    }
    if let Some(unknown) = config.unknown {
        params.push(("unknown", unknown.as_str()));
    }
    if let Some(rum) = config.rum {
        params.push(("rum", if rum { "1" } else { "0" }));
    }

    for (i, (name, value)) in params.iter().enumerate() {
        src.push(if i == 0 { '?' } else { '&' });
        src.push_str(name);
        src.push('=');
        src.push_str(value);
    }

    src
}

/// Attributes for the loader script tag.
///
/// `src` is always set. `async` is set exactly when a callback is configured:
/// the service script then invokes the named global on completion, so the
/// load must not block parsing.
pub fn script_attrs(config: &PolyfillConfig) -> Vec<(String, AttrValue)> {
    let mut attrs = vec![("src".to_string(), AttrValue::Text(build_src(config)))];
    if config.callback.is_some() {
        attrs.push(("async".to_string(), AttrValue::Flag(true)));
    }
    attrs
}

/// The loader `<script>` tag.
pub fn script_tag(config: &PolyfillConfig) -> TagDescriptor {
    TagDescriptor {
        tag_name: "script".to_string(),
        self_closing: true,
        attributes: script_attrs(config),
    }
}

/// A `<link>` preload hint for the loader script.
///
/// Only meaningful alongside a callback, when the script itself moves to the
/// body: the hint lets the fetch start while the head is still being parsed.
pub fn hint_tag(config: &PolyfillConfig) -> TagDescriptor {
    TagDescriptor {
        tag_name: "link".to_string(),
        self_closing: false,
        attributes: vec![
            ("href".to_string(), AttrValue::Text(build_src(config))),
            ("type".to_string(), AttrValue::Text("preload".to_string())),
            ("as".to_string(), AttrValue::Text("script".to_string())),
        ],
    }
}
