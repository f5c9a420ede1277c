//! The export pipeline: markdown in, translated JSON out.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cache::TranslationCache;
use crate::config::ConfigFile;
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::model::Document;
use crate::parser::parse_markdown;
use crate::status;
use crate::translation::{CachedTranslator, LibreTranslateClient, TranslationStats, Translator};
use crate::ui::{Progress, Style};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub categories: usize,
    pub items: usize,
    pub output: PathBuf,
    pub cache_entries: usize,
    pub stats: TranslationStats,
}

/// Runs a full export with the given configuration.
///
/// Nothing is written unless every item was translated: a backend failure
/// aborts before the cache and the output file are touched.
pub async fn run_export(config: &ConfigFile) -> Result<ExportSummary> {
    let markdown = InputReader::read(&config.export.input)?;
    let mut document = parse_markdown(&markdown);
    tracing::info!(
        input = %config.export.input.display(),
        categories = document.categories.len(),
        items = document.item_count(),
        "parsed awesome list"
    );

    let cache = TranslationCache::load(&config.export.cache);

    let backend = if config.translate.enabled {
        let client = LibreTranslateClient::new(
            config.translate.endpoint.clone(),
            config.translate.timeout(),
        )?;
        tracing::info!(endpoint = client.endpoint(), "translating with LibreTranslate");
        Some(client)
    } else {
        status!(
            "{} translation disabled, uncached descriptions are copied as-is",
            Style::STDERR.warning("Note:")
        );
        None
    };

    let mut translator = CachedTranslator::new(cache, backend, config.translate.delay());
    let progress = Progress::new(document.item_count() as u64, "Translating");
    let items = enrich_document(&mut document, &mut translator, &progress).await?;
    progress.finish();

    let stats = translator.stats();
    let cache = translator.into_cache();
    cache.save(&config.export.cache)?;
    write_document(&document, &config.export.output)?;

    Ok(ExportSummary {
        categories: document.categories.len(),
        items,
        output: config.export.output.clone(),
        cache_entries: cache.len(),
        stats,
    })
}

/// Fills `description_fr` of every item, in document order.
///
/// Returns the number of items processed.
pub async fn enrich_document<T: Translator>(
    document: &mut Document,
    translator: &mut CachedTranslator<T>,
    progress: &Progress,
) -> Result<usize> {
    let mut total = 0;

    for item in document.items_mut() {
        item.description_fr = translator
            .translate(&item.description_en)
            .await
            .with_context(|| format!("Failed to translate description of '{}'", item.name))?;
        total += 1;
        progress.inc();
    }

    Ok(total)
}

/// Serializes the document as indented JSON, keeping non-ASCII text as-is.
pub fn write_document(document: &Document, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document).context("Failed to serialize document")?;

    atomic_write(path, &json)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
