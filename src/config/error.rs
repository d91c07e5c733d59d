//! Construction-time configuration errors.

use thiserror::Error;

/// A rejected plugin option.
///
/// Raised while building the canonical configuration, never during tag
/// construction, so a misconfigured build stops before any HTML is touched.
/// Messages name the option, the allowed values or pattern, and the received
/// value; they are user-facing diagnostics, not internal codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An enum-valued option received a value outside its allowed set.
    #[error("invalid value {value:?} for option `{option}`: allowed values are {allowed}")]
    InvalidChoice {
        option: &'static str,
        allowed: &'static str,
        value: String,
    },
    /// `callback` is not a usable global identifier.
    #[error("invalid value {value:?} for option `callback`: expected a name matching [\\w.]+")]
    InvalidCallback { value: String },
}
