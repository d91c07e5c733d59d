//! Plugin facade: validate options once, mutate the host document per build.

use anyhow::Result;
use tracing::debug;

use crate::config::{BuildMode, ConfigError, PolyfillConfig, PolyfillOptions};
use crate::tags::{self, DocumentModel};

/// The host's "alter generated HTML asset tags" extension point.
///
/// Called once per compilation with the mutable head/body tag lists, after
/// the host has generated its own asset tags. Implementations either mutate
/// the model and return `Ok(())` or surface their own failure; errors raised
/// by other participants in the host's hook chain are routed by the host,
/// never through this method.
pub trait AssetTagsHook {
    fn on_tags_ready(&self, doc: &mut DocumentModel) -> Result<()>;
}

/// Injects a polyfill.io loader tag (and, with a callback, a preload hint)
/// into the host's generated HTML.
///
/// One instance corresponds to one build configuration: options are validated
/// at construction and the resulting [`PolyfillConfig`] is immutable for the
/// instance's lifetime.
#[derive(Debug)]
pub struct PolyfillPlugin {
    config: PolyfillConfig,
}

impl PolyfillPlugin {
    /// Validates `options` against the host-resolved `mode`.
    ///
    /// A misconfiguration fails here, before any build work happens; tag
    /// construction cannot fail afterwards.
    pub fn new(options: PolyfillOptions, mode: BuildMode) -> Result<Self, ConfigError> {
        let config = PolyfillConfig::from_options(options, mode)?;
        debug!(?config, "polyfill plugin configured");
        Ok(Self { config })
    }

    /// The effective configuration.
    pub fn config(&self) -> &PolyfillConfig {
        &self.config
    }
}

impl AssetTagsHook for PolyfillPlugin {
    fn on_tags_ready(&self, doc: &mut DocumentModel) -> Result<()> {
        tags::place_tags(&self.config, doc);
        Ok(())
    }
}
