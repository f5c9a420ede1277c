mod cached;
mod client;

pub use cached::{CachedTranslator, TranslationStats};
pub use client::LibreTranslateClient;

use anyhow::Result;

/// Source language of every description.
pub const SOURCE_LANGUAGE: &str = "en";

/// Language descriptions are translated into.
pub const TARGET_LANGUAGE: &str = "fr";

/// Something that turns English text into French text.
///
/// The export only needs this capability, so tests can substitute a fake for
/// the HTTP backend.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, text: &str) -> Result<String>;
}
