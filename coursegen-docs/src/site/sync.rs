//! Metadata sync for an existing `myst.yml`.

use crate::patch::{DocumentPatcher, KeyTarget};
use crate::site::SiteMetadata;

/// One scalar to keep in sync with the course metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub target: KeyTarget,
    pub value: String,
    /// Whether a missing key is reported
    pub required: bool,
}

/// Result of a metadata sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResult {
    pub text: String,
    /// Keys that were applied and changed the document
    pub changed: Vec<KeyTarget>,
    /// Required keys that could not be found
    pub missing: Vec<KeyTarget>,
}

/// The keys kept in sync, in application order.
#[must_use]
pub fn metadata_updates(site: &SiteMetadata) -> Vec<FieldUpdate> {
    let field = |target: KeyTarget, value: &str, required: bool| FieldUpdate {
        target,
        value: value.to_string(),
        required,
    };
    vec![
        field(KeyTarget::key("project", "title"), &site.title, true),
        field(KeyTarget::key("project", "subtitle"), &site.subtitle, true),
        field(KeyTarget::key("site", "title"), &site.title, true),
        field(KeyTarget::key("site", "subtitle"), &site.subtitle, true),
        field(
            KeyTarget::first_list_item("project", "authors", "name"),
            &site.author,
            true,
        ),
        field(KeyTarget::key("project", "copyright"), &site.copyright, false),
    ]
}

/// Applies every metadata update to `document`.
///
/// Only the matched value spans change; comments, ordering and any keys
/// not listed by [`metadata_updates`] are preserved byte for byte.
pub fn sync_site_metadata(
    document: &str,
    site: &SiteMetadata,
    patcher: &dyn DocumentPatcher,
) -> SyncResult {
    let mut text = document.to_string();
    let mut changed = Vec::new();
    let mut missing = Vec::new();

    for update in metadata_updates(site) {
        let outcome = patcher.replace_value(&text, &update.target, &update.value);
        if !outcome.found() {
            if update.required {
                missing.push(update.target);
            }
            continue;
        }
        if outcome.changed(&text) {
            changed.push(update.target);
            text = outcome.text;
        }
    }

    SyncResult {
        text,
        changed,
        missing,
    }
}
