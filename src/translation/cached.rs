use anyhow::Result;
use std::time::Duration;

use super::Translator;
use crate::cache::TranslationCache;
use crate::ident::content_hash;
use crate::model::PLACEHOLDER;

/// Counters collected while translating, reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Empty or placeholder texts returned as-is.
    pub skipped: usize,
    pub cache_hits: usize,
    pub backend_calls: usize,
    /// Cache misses returned untranslated because no backend is configured.
    pub passthrough: usize,
}

/// Translation through a [`TranslationCache`], with an optional backend for misses.
///
/// Without a backend, uncached text is returned unchanged.
pub struct CachedTranslator<T> {
    cache: TranslationCache,
    backend: Option<T>,
    delay: Duration,
    stats: TranslationStats,
}

impl<T: Translator> CachedTranslator<T> {
    /// `delay` is slept after every backend call.
    pub const fn new(cache: TranslationCache, backend: Option<T>, delay: Duration) -> Self {
        Self {
            cache,
            backend,
            delay,
            stats: TranslationStats {
                skipped: 0,
                cache_hits: 0,
                backend_calls: 0,
                passthrough: 0,
            },
        }
    }

    pub async fn translate(&mut self, text: &str) -> Result<String> {
        let clean = text.trim();
        if clean.is_empty() || clean == PLACEHOLDER {
            self.stats.skipped += 1;
            return Ok(clean.to_string());
        }

        let key = content_hash(clean);
        if let Some(cached) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(cached.to_string());
        }

        let Some(backend) = &self.backend else {
            self.stats.passthrough += 1;
            return Ok(clean.to_string());
        };

        let translated = backend.translate(clean).await?;
        self.stats.backend_calls += 1;

        let translated = if translated.is_empty() {
            clean.to_string()
        } else {
            translated
        };

        self.cache.insert(key, translated.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(translated)
    }

    pub const fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub const fn stats(&self) -> TranslationStats {
        self.stats
    }

    pub const fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn into_cache(self) -> TranslationCache {
        self.cache
    }
}
