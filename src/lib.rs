//! Polyfill.io loader injection for generated HTML.
//!
//! Validates plugin options once, at construction, then deterministically
//! builds the polyfill service URL and the script/preload tag descriptors
//! that a host HTML generator inserts into its document model. No network,
//! no I/O: the URL is constructed, never fetched.

pub mod config;
pub mod plugin;
pub mod tags;

pub use config::{
    BuildMode, ConfigError, FlagsMode, PolyfillConfig, PolyfillOptions, UnknownPolicy,
};
pub use plugin::{AssetTagsHook, PolyfillPlugin};
pub use tags::{AttrValue, DocumentModel, TagDescriptor};
