use anyhow::Result;
use std::path::PathBuf;

use crate::config::ConfigManager;
use crate::export::run_export;
use crate::status;
use crate::ui::Style;

pub struct ExportOptions {
    pub config: Option<PathBuf>,
}

pub async fn run(options: ExportOptions) -> Result<()> {
    let style = Style::STDERR;

    let manager = ConfigManager::discover(options.config.as_deref())?;
    if let Some(path) = manager.config_path() {
        status!("{} {}", style.label("config"), style.value(path.display()));
    }
    let config = manager.load()?;

    let summary = run_export(&config).await?;

    status!(
        "{} {}  {} {}  {} {}  {} {}",
        style.label("categories"),
        style.value(summary.categories),
        style.label("translated"),
        style.value(summary.stats.backend_calls),
        style.label("cached"),
        style.value(summary.stats.cache_hits),
        style.label("cache entries"),
        style.value(summary.cache_entries)
    );
    println!(
        "{} {} items exported -> {}",
        Style::STDOUT.success("OK:"),
        summary.items,
        summary.output.display()
    );

    Ok(())
}
