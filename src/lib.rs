//! # awesome-export - Awesome list to JSON exporter
//!
//! `awesome-export` reads a curated markdown "awesome list", turns it into a
//! category → subcategory → item tree, and writes it as JSON with every item
//! description translated from English to French.
//!
//! ## Features
//!
//! - **Stable ids**: slugs for sections, short content hashes for items
//! - **Tag classification**: inline-code tags split into licenses and languages
//! - **Caching**: translations are stored in a JSON file and reused across runs
//! - **Offline mode**: with translation disabled, descriptions are copied as-is
//!
//! ## Quick Start
//!
//! ```bash
//! # Export ./awesome-sysadmin.md to ./data.json
//! awesome-export
//!
//! # Use another configuration file
//! awesome-export --config lists/selfhosted.toml
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `./awesome-export.toml` or
//! `~/.config/awesome-export/config.toml`; every key is optional:
//!
//! ```toml
//! [export]
//! input = "awesome-sysadmin.md"
//! output = "data.json"
//! cache = ".translate_cache.json"
//!
//! [translate]
//! enabled = true
//! endpoint = "http://localhost:5000/translate"
//! delay_ms = 50
//! timeout_secs = 60
//! ```

/// Translation cache persisted as a JSON file.
pub mod cache;

/// License / language tag classification.
pub mod classify;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// The export pipeline.
pub mod export;

/// File system utilities.
pub mod fs;

/// Slugs and stable ids.
pub mod ident;

/// Input file reading.
pub mod input;

/// Document tree types.
pub mod model;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Awesome-list markdown parser.
pub mod parser;

/// XDG-style path utilities for configuration.
pub mod paths;

/// English to French translation backends.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;
