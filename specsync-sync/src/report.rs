//! Changeset renderings: summary lines, summary file body, merge proposal.

use crate::pipeline::{Changeset, UpdateResult};

/// One line per result: `key: old → new (resolved-version)`.
///
/// Never-synced entries have an empty stored version; render it as `(none)`.
pub fn summary_line(update: &UpdateResult) -> String {
    let old = if update.old_version.is_empty() {
        "(none)"
    } else {
        update.old_version.as_str()
    };
    format!(
        "{}: {} → {} ({})",
        update.key, old, update.new_version, update.api_version
    )
}

/// Joined summary of a pass, one line per updated entry, registry order.
pub fn render_summary(changeset: &Changeset) -> String {
    changeset
        .updates
        .iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title of the merge proposal.
pub fn proposal_title(changeset: &Changeset) -> String {
    match changeset.updates.as_slice() {
        [only] => format!("Update {} to {}", only.key, only.new_version),
        many => format!("Update {} OpenAPI specifications", many.len()),
    }
}

/// Markdown body of the merge proposal: each saved artifact path with its
/// resolved version and release link.
pub fn proposal_body(changeset: &Changeset) -> String {
    let mut body = String::from(
        "Automated specification update. The following upstream releases were synchronized:\n",
    );
    for update in &changeset.updates {
        body.push_str(&format!(
            "\n- **{}** `{}` → `{}`\n  - `{}` (API version {})\n  - release: {}\n",
            update.key,
            if update.old_version.is_empty() { "(none)" } else { update.old_version.as_str() },
            update.new_version,
            update.spec_path.display(),
            update.api_version,
            update.release_url,
        ));
    }
    body
}
