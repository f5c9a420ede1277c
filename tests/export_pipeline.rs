#![allow(clippy::unwrap_used)]
//! End-to-end export runs against a mocked LibreTranslate backend.

use awesome_export::config::{ConfigFile, ExportSettings, TranslateSettings};
use awesome_export::export::run_export;
use awesome_export::ident::content_hash;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = include_str!("fixtures/awesome.md");

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Deduplicating archiver with compression and encryption.",
        "Archiveur dédupliqué avec compression et chiffrement.",
    ),
    (
        "Fast, secure, efficient backup program.",
        "Programme de sauvegarde rapide, sûr et efficace.",
    ),
    (
        "Sync files to and from cloud storage.",
        "Synchronise des fichiers avec le stockage en nuage.",
    ),
    (
        "Enterprise-class monitoring for networks and applications.",
        "Supervision de classe entreprise pour réseaux et applications.",
    ),
];

fn config_for(dir: &Path, endpoint: String) -> ConfigFile {
    ConfigFile {
        export: ExportSettings {
            input: dir.join("awesome.md"),
            output: dir.join("data.json"),
            cache: dir.join(".translate_cache.json"),
        },
        translate: TranslateSettings {
            enabled: true,
            endpoint,
            delay_ms: 0,
            timeout_secs: 5,
        },
    }
}

async fn mount_translations(server: &MockServer, expected_calls: u64) {
    for (en, fr) in DESCRIPTIONS {
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(json!({ "q": en, "source": "en", "target": "fr" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": fr })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }
}

fn all_items(document: &Value) -> Vec<Value> {
    document["categories"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["subcategories"].as_array().unwrap().clone())
        .flat_map(|s| s["items"].as_array().unwrap().clone())
        .collect()
}

#[tokio::test]
async fn test_export_translates_and_persists() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("awesome.md"), FIXTURE).unwrap();

    let server = MockServer::start().await;
    mount_translations(&server, 1).await;

    let config = config_for(dir.path(), format!("{}/translate", server.uri()));
    let summary = run_export(&config).await.unwrap();

    assert_eq!(summary.items, 5);
    assert_eq!(summary.categories, 4);
    assert_eq!(summary.stats.backend_calls, 4);
    assert_eq!(summary.stats.skipped, 1);
    assert_eq!(summary.cache_entries, 4);

    let document: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("data.json")).unwrap()).unwrap();
    let items = all_items(&document);
    let names: Vec<_> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Borg", "Restic", "Rclone", "Zabbix", "Netdata"]);

    assert_eq!(
        items[0]["description_fr"],
        "Archiveur dédupliqué avec compression et chiffrement."
    );
    assert_eq!(items[0]["licenses"], json!(["BSD-3-Clause"]));
    assert_eq!(items[0]["langs"], json!(["Python"]));
    assert_eq!(
        items[2]["links"],
        json!({
            "Demo": "https://rclone.org/demo",
            "Source Code": "https://github.com/rclone/rclone"
        })
    );
    assert_eq!(items[4]["description_en"], "—");
    assert_eq!(items[4]["description_fr"], "—");
    assert_eq!(items[4]["langs"], json!(["C"]));

    let cache: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join(".translate_cache.json")).unwrap(),
    )
    .unwrap();
    let (en, fr) = DESCRIPTIONS[2];
    assert_eq!(cache[content_hash(en)], fr);
}

#[tokio::test]
async fn test_second_run_uses_cache_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("awesome.md"), FIXTURE).unwrap();

    // Each description may reach the backend exactly once across both runs.
    let server = MockServer::start().await;
    mount_translations(&server, 1).await;

    let config = config_for(dir.path(), format!("{}/translate", server.uri()));
    let first = run_export(&config).await.unwrap();
    let first_output = fs::read_to_string(dir.path().join("data.json")).unwrap();

    let second = run_export(&config).await.unwrap();
    let second_output = fs::read_to_string(dir.path().join("data.json")).unwrap();

    assert_eq!(first.stats.backend_calls, 4);
    assert_eq!(second.stats.backend_calls, 0);
    assert_eq!(second.stats.cache_hits, 4);
    assert_eq!(first_output, second_output);
}

#[tokio::test]
async fn test_backend_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("awesome.md"), FIXTURE).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(dir.path(), format!("{}/translate", server.uri()));
    let err = run_export(&config).await.unwrap_err();

    assert!(format!("{err:#}").contains("503"));
    assert!(!dir.path().join("data.json").exists());
    assert!(!dir.path().join(".translate_cache.json").exists());
}

#[tokio::test]
async fn test_corrupt_cache_is_replaced() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("awesome.md"), FIXTURE).unwrap();
    fs::write(dir.path().join(".translate_cache.json"), "not json at all").unwrap();

    let server = MockServer::start().await;
    mount_translations(&server, 1).await;

    let config = config_for(dir.path(), format!("{}/translate", server.uri()));
    let summary = run_export(&config).await.unwrap();

    assert_eq!(summary.stats.backend_calls, 4);
    let cache: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join(".translate_cache.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(cache.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_missing_input_fails_before_backend() {
    let dir = TempDir::new().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(dir.path(), format!("{}/translate", server.uri()));
    let err = run_export(&config).await.unwrap_err();

    assert!(err.to_string().contains("Input file not found"));
    assert!(!dir.path().join(".translate_cache.json").exists());
}
