//! Plugin options and their canonical, validated form.
//!
//! Raw [`PolyfillOptions`] arrive from the host's own configuration (serde
//! handles the string-or-sequence spellings of `features`/`excludes`).
//! [`PolyfillConfig::from_options`] normalizes them exactly once, at plugin
//! construction, and fails fast on anything invalid.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Build mode the host resolved for this compilation.
///
/// Passed in explicitly so the `minify` default is testable and this crate
/// never reads process-wide environment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

/// A value the host config may spell as one string or a sequence of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Comma-joined canonical form. The string spelling passes through
    /// unchanged, so the operation is idempotent on already-joined input.
    fn into_joined(self) -> String {
        match self {
            OneOrMany::One(s) => s,
            OneOrMany::Many(items) => items.join(","),
        }
    }
}

/// Raw, untrusted plugin options as supplied by the host configuration.
///
/// Field names follow the host-facing `camelCase` surface (`useBody`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolyfillOptions {
    pub minify: Option<bool>,
    pub features: Option<OneOrMany>,
    pub excludes: Option<OneOrMany>,
    pub flags: Option<String>,
    pub callback: Option<String>,
    pub unknown: Option<String>,
    pub rum: Option<bool>,
    pub use_body: Option<bool>,
}

/// Polyfill service behavior flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagsMode {
    Always,
    Gated,
}

impl FlagsMode {
    /// Allowed spellings in raw options, for diagnostics.
    pub const ALLOWED: &'static str = r#""always", "gated""#;

    pub fn as_str(self) -> &'static str {
        match self {
            FlagsMode::Always => "always",
            FlagsMode::Gated => "gated",
        }
    }

    fn from_raw(value: &str) -> Option<Self> {
        match value {
            "always" => Some(FlagsMode::Always),
            "gated" => Some(FlagsMode::Gated),
            _ => None,
        }
    }
}

/// Policy for features the service does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    Ignore,
    Polyfill,
}

impl UnknownPolicy {
    /// Allowed spellings in raw options, for diagnostics.
    pub const ALLOWED: &'static str = r#""ignore", "polyfill""#;

    pub fn as_str(self) -> &'static str {
        match self {
            UnknownPolicy::Ignore => "ignore",
            UnknownPolicy::Polyfill => "polyfill",
        }
    }

    fn from_raw(value: &str) -> Option<Self> {
        match value {
            "ignore" => Some(UnknownPolicy::Ignore),
            "polyfill" => Some(UnknownPolicy::Polyfill),
            _ => None,
        }
    }
}

/// Canonical configuration: validated, defaulted, immutable after
/// construction.
///
/// `None` fields are genuinely absent and omitted from the service URL; an
/// empty string in `features`/`excludes` is a present value and serializes
/// as `features=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolyfillConfig {
    pub minify: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<FlagsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<UnknownPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rum: Option<bool>,
    pub use_body: bool,
}

impl PolyfillConfig {
    /// Normalizes and validates raw options against the resolved build mode.
    ///
    /// Fails atomically: either every supplied field passed its predicate or
    /// the first offending option is reported and nothing is built.
    pub fn from_options(options: PolyfillOptions, mode: BuildMode) -> Result<Self, ConfigError> {
        let flags = options
            .flags
            .map(|raw| match FlagsMode::from_raw(&raw) {
                Some(flags) => Ok(flags),
                None => Err(ConfigError::InvalidChoice {
                    option: "flags",
                    allowed: FlagsMode::ALLOWED,
                    value: raw,
                }),
            })
            .transpose()?;

        let unknown = options
            .unknown
            .map(|raw| match UnknownPolicy::from_raw(&raw) {
                Some(unknown) => Ok(unknown),
                None => Err(ConfigError::InvalidChoice {
                    option: "unknown",
                    allowed: UnknownPolicy::ALLOWED,
                    value: raw,
                }),
            })
            .transpose()?;

        let callback = options
            .callback
            .map(|raw| {
                if is_callback_name(&raw) {
                    Ok(raw)
                } else {
                    Err(ConfigError::InvalidCallback { value: raw })
                }
            })
            .transpose()?;

        Ok(Self {
            minify: options.minify.unwrap_or(mode.is_production()),
            features: options.features.map(OneOrMany::into_joined),
            excludes: options.excludes.map(OneOrMany::into_joined),
            flags,
            callback,
            unknown,
            rum: options.rum,
            use_body: options.use_body.unwrap_or(false),
        })
    }
}

/// Callback-name grammar: one or more ASCII word characters or literal dots,
/// the character class the service accepts for its `callback` parameter.
fn is_callback_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
