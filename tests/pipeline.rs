use chrono::{TimeZone, Utc};
use oracle_cache::io::{read_json, write_json};
use oracle_cache::{
    build_legal_catalog, build_oracle_cache, trim_catalog, CacheDocument, CacheError,
    CardFace, CatalogRecord, PipelineWarning, ReconciliationEngine, TrimmedCard,
};
use std::fs;
use std::path::PathBuf;

fn temp_path(file_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "oracle-cache-it-{}-{}",
        std::process::id(),
        file_name
    ))
}

fn create_test_record(name: &str, released_at: &str, printing_id: &str, text: &str) -> CatalogRecord {
    let mut record = CatalogRecord::named(name)
        .with_released_at(released_at)
        .with_printing_id(printing_id)
        .with_oracle_text("Instant", text)
        .with_legality("commander", "legal");
    record.oracle_id = Some(format!("{}-oracle", printing_id));
    record
}

fn create_test_catalog() -> Vec<CatalogRecord> {
    vec![
        create_test_record("Lightning Bolt", "1993-08-05", "bolt-lea", "Lightning Bolt deals 3 damage to target creature or player."),
        create_test_record("Lightning Bolt", "2023-05-10", "bolt-clb", "Lightning Bolt deals 3 damage to any target."),
        create_test_record("Counterspell", "1993-08-05", "cs-lea", "Counter target spell."),
        CatalogRecord::named("Fire // Ice")
            .with_released_at("2001-06-04")
            .with_printing_id("fire-ice-apc")
            .with_legality("commander", "legal")
            .with_faces(vec![
                CardFace {
                    name: Some("Fire".to_string()),
                    type_line: Some("Instant".to_string()),
                    oracle_text: Some("Deal 2 damage.".to_string()),
                    ..Default::default()
                },
                CardFace {
                    name: Some("Ice".to_string()),
                    type_line: Some("Instant".to_string()),
                    oracle_text: Some("Draw a card.".to_string()),
                    ..Default::default()
                },
            ]),
        CatalogRecord::named("Black Lotus")
            .with_released_at("1993-08-05")
            .with_printing_id("lotus-lea")
            .with_legality("commander", "banned"),
    ]
}

#[test]
fn test_full_pipeline_is_stable_across_runs() {
    let owned_csv = temp_path("owned.csv");
    let catalog = temp_path("oracle-cards.json.gz");
    fs::write(
        &owned_csv,
        "Count,Card Name,Edition\n4,Lightning  Bolt,m11\n1,Fire // Ice,apc\n1,Nonexistent Card,xxx\n2,Lightning Bolt,clb\n",
    )
    .unwrap();
    write_json(&catalog, &create_test_catalog()).unwrap();

    let first = build_oracle_cache(
        &owned_csv,
        &catalog,
        &ReconciliationEngine::new(Utc.with_ymd_and_hms(2025, 10, 21, 8, 0, 0).unwrap()),
    )
    .unwrap();
    let second = build_oracle_cache(
        &owned_csv,
        &catalog,
        &ReconciliationEngine::new(Utc.with_ymd_and_hms(2025, 10, 22, 8, 0, 0).unwrap()),
    )
    .unwrap();

    fs::remove_file(&owned_csv).unwrap();
    fs::remove_file(&catalog).unwrap();

    let doc = &first.document;
    assert!(first.warnings.is_empty());
    assert!(doc.is_consistent());
    assert_eq!(doc.meta.owned_names_count, 3);
    assert_eq!(doc.missing_names, vec!["Nonexistent Card"]);

    let bolt = &doc.cards[0];
    assert_eq!(bolt.name, "Lightning Bolt");
    assert_eq!(bolt.scryfall_id.as_deref(), Some("bolt-clb"));

    let fire_ice = &doc.cards[1];
    assert_eq!(fire_ice.type_line, "Instant // Instant");
    assert_eq!(fire_ice.oracle_text, "Deal 2 damage.\n//\nDraw a card.");

    assert!(second.document.changed_since(doc).is_empty());
    for (a, b) in doc.cards.iter().zip(second.document.cards.iter()) {
        assert_eq!(a.oracle_hash, b.oracle_hash);
        assert_ne!(a.last_updated_utc, b.last_updated_utc);
    }

    // Written and re-read document is unchanged
    let out = temp_path("cache.json");
    write_json(&out, doc).unwrap();
    let reread: CacheDocument = read_json(&out).unwrap();
    fs::remove_file(&out).unwrap();
    assert_eq!(&reread, doc);
}

#[test]
fn test_missing_catalog_is_fatal() {
    let owned_csv = temp_path("owned-only.csv");
    fs::write(&owned_csv, "Name\nSol Ring\n").unwrap();

    let result = build_oracle_cache(
        &owned_csv,
        &temp_path("does-not-exist.json.gz"),
        &ReconciliationEngine::now(),
    );
    fs::remove_file(&owned_csv).unwrap();

    assert!(matches!(result, Err(CacheError::MissingSource { .. })));
}

#[test]
fn test_empty_catalog_surfaces_warning() {
    let owned_csv = temp_path("owned-empty-catalog.csv");
    let catalog = temp_path("empty-catalog.json");
    fs::write(&owned_csv, "Name\nSol Ring\n").unwrap();
    fs::write(&catalog, "[]").unwrap();

    let build = build_oracle_cache(&owned_csv, &catalog, &ReconciliationEngine::now()).unwrap();
    fs::remove_file(&owned_csv).unwrap();
    fs::remove_file(&catalog).unwrap();

    assert_eq!(build.warnings, vec![PipelineWarning::EmptyCatalog]);
    assert_eq!(build.document.missing_names, vec!["Sol Ring"]);
}

#[test]
fn test_legal_catalog_then_trim() {
    let full = temp_path("default-cards.json");
    let legal = temp_path("commander_legal.json.gz");
    let trimmed = temp_path("commander_legal_trimmed.json.gz");
    write_json(&full, &create_test_catalog()).unwrap();

    let legal_count = build_legal_catalog(&full, &legal, "commander").unwrap();
    let trimmed_count = trim_catalog(&legal, &trimmed, "commander").unwrap();
    let cards: Vec<TrimmedCard> = read_json(&trimmed).unwrap();

    for path in [&full, &legal, &trimmed] {
        fs::remove_file(path).unwrap();
    }

    // Black Lotus is banned; Lightning Bolt collapses to one printing
    assert_eq!(legal_count, 3);
    assert_eq!(trimmed_count, 3);
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Counterspell", "Fire // Ice", "Lightning Bolt"]);
    assert_eq!(cards[2].oracle_text.as_deref(), Some("Lightning Bolt deals 3 damage to any target."));
    assert!(cards.iter().all(|c| c.legal_in("commander") == Some("legal")));
    assert_eq!(cards[1].faces.as_ref().map(Vec::len), Some(2));
}
