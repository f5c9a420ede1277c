//! Deterministic identifiers: slugs for sections, short hashes for items.

use sha2::{Digest, Sha256};

/// Returned by [`slugify`] when nothing identifier-safe survives.
pub const FALLBACK_SLUG: &str = "x";

/// Length of the hex fingerprint produced by [`stable_id`].
pub const STABLE_ID_LEN: usize = 12;

const ID_SEPARATOR: &str = "||";

/// Builds a lowercase, hyphen-separated ASCII slug.
///
/// Common accented Latin vowels and `ç`/`ñ` are folded to their base letter;
/// every other run of characters outside `[a-z0-9]` becomes a single hyphen.
/// Different titles may produce the same slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars().map(fold_accent) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

const fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        other => other,
    }
}

/// Fingerprints an ordered tuple of strings as 12 hex characters.
///
/// Used for item ids: the same (category, subcategory, name, url) always
/// maps to the same id, so re-running on unchanged input keeps ids stable.
pub fn stable_id(parts: &[&str]) -> String {
    let mut digest = sha256_hex(&parts.join(ID_SEPARATOR));
    digest.truncate(STABLE_ID_LEN);
    digest
}

/// Full hex SHA-256 of `text`, used as the translation cache key.
pub fn content_hash(text: &str) -> String {
    sha256_hex(text)
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
