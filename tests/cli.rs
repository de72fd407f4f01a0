use oracle_cache::io::{read_json, write_json};
use oracle_cache::{CacheDocument, CatalogRecord};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_path(file_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "oracle-cache-cli-{}-{}",
        std::process::id(),
        file_name
    ))
}

fn run_cli(args: &[&str], owned_csv: &PathBuf, oracle_source: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oracle-cache"))
        .args(args)
        .env("OWNED_CSV", owned_csv)
        .env("ORACLE_SOURCE", oracle_source)
        .output()
        .unwrap()
}

fn assert_usage(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("Usage: oracle-cache <out_json>"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_cli(&[], &temp_path("unused.csv"), &temp_path("unused.json"));

    assert_usage(&output);
}

#[test]
fn test_extra_argument_prints_usage_without_building() {
    let out = temp_path("extra-arg-out.json");

    let output = run_cli(
        &[out.to_str().unwrap(), "extra"],
        &temp_path("unused.csv"),
        &temp_path("unused.json"),
    );

    assert_usage(&output);
    assert!(!out.exists(), "no document should be written");
}

#[test]
fn test_single_argument_writes_document() {
    let owned_csv = temp_path("owned.csv");
    let catalog = temp_path("oracle-cards.json");
    let out = temp_path("cache.json");
    fs::write(&owned_csv, "Name\nSol Ring\nNonexistent Card\n").unwrap();
    write_json(
        &catalog,
        &vec![CatalogRecord::named("Sol Ring").with_released_at("1993-08-05")],
    )
    .unwrap();

    let output = run_cli(&[out.to_str().unwrap()], &owned_csv, &catalog);
    let document: CacheDocument = read_json(&out).unwrap();

    for path in [&owned_csv, &catalog, &out] {
        fs::remove_file(path).unwrap();
    }

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 owned names: 1 cached, 1 missing"));
    assert_eq!(document.missing_names, vec!["Nonexistent Card"]);
}
