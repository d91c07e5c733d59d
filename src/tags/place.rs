//! Head/body placement of the generated tags.

use tracing::debug;

use super::{build, DocumentModel};
use crate::config::PolyfillConfig;

/// Inserts the polyfill tags into the host's document model.
///
/// Without a callback the load is synchronous, so the script is appended to
/// the head where it runs before any head script that may depend on the
/// polyfills. With a callback the script is async: a preload hint goes into
/// the head so the fetch starts early, and the script itself lands at the
/// front of the body to keep head parsing unblocked.
///
/// `use_body = true` forces body placement even without a callback; the hint
/// is still tied to a callback being configured.
pub fn place_tags(config: &PolyfillConfig, doc: &mut DocumentModel) {
    let script = build::script_tag(config);

    if config.callback.is_some() || config.use_body {
        if config.callback.is_some() {
            doc.head.push(build::hint_tag(config));
        }
        // Body-front keeps the polyfills ahead of any body content.
        doc.body.insert(0, script);
        debug!(
            callback = config.callback.as_deref(),
            use_body = config.use_body,
            "placed polyfill script at body front"
        );
    } else {
        doc.head.push(script);
        debug!("appended polyfill script to head");
    }
}
