//! License / language classification of inline-code tags.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static LICENSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(gpl|lgpl|agpl|apache|mit|bsd|mpl|isc|cc-|epl|cddl|unlicense|proprietary)")
        .unwrap()
});

#[allow(clippy::unwrap_used)]
static LANGUAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(python|go|golang|rust|java|javascript|typescript|c\+\+|c#|c\b|php|ruby|perl|lua|haskell|kotlin|scala|shell|powershell|docker|node\.js|\.net|groovy|elixir|erlang|swift)",
    )
    .unwrap()
});

/// Tags split into the two buckets the export keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub licenses: Vec<String>,
    pub langs: Vec<String>,
}

/// Sorts raw tags into licenses and languages.
///
/// The license pattern wins when a tag matches both. Tags matching neither
/// are dropped. Both lists keep first-occurrence order without duplicates.
pub fn classify_tags<S: AsRef<str>>(tags: &[S]) -> Classification {
    let mut classification = Classification::default();

    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }

        let bucket = if LICENSE_PATTERN.is_match(tag) {
            &mut classification.licenses
        } else if LANGUAGE_PATTERN.is_match(tag) {
            &mut classification.langs
        } else {
            tracing::trace!(tag, "dropping unclassified tag");
            continue;
        };

        if !bucket.iter().any(|existing| existing == tag) {
            bucket.push(tag.to_string());
        }
    }

    classification
}
