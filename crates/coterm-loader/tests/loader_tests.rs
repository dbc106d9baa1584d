//! Integration tests for coterm-loader
//!
//! These tests load real files from a temporary directory, plain and gzip.

use coterm_domain::Partition;
use coterm_loader::{CoTermLoader, LoaderConfig, LoaderError};
use flate2::{write::GzEncoder, Compression};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const HEADER: &str = "TARGET\tCOMPARED\tTOGETHER\tCOMPARED_COUNT\tSELECTED\tTOTAL";

fn write_plain(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = vec![HEADER];
    contents.extend_from_slice(rows);
    std::fs::write(&path, contents.join("\n") + "\n").unwrap();
    path
}

fn write_gzip(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    writeln!(encoder, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(encoder, "{}", row).unwrap();
    }
    encoder.finish().unwrap();
    path
}

fn manual_rows() -> Vec<&'static str> {
    vec![
        "GO:0000001\tGO:A\t4\t8\t8\t24",
        "GO:0000001\tGO:B\t2\t2\t8\t24",
    ]
}

fn sources() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let manual = write_plain(dir.path(), "manual.tsv", &manual_rows());
    let all = write_gzip(
        dir.path(),
        "all.tsv.gz",
        &[
            "GO:0000001\tGO:A\t5\t9\t10\t40",
            "GO:0000001\tGO:C\t1\t30\t10\t40",
            "GO:0000002\tGO:A\t3\t9\t3\t40",
        ],
    );
    (dir, manual, all)
}

#[test]
fn test_load_plain_and_gzip_sources() {
    let (_dir, manual, all) = sources();
    let loaded = CoTermLoader::new(LoaderConfig::with_sources(manual, all))
        .load()
        .unwrap();

    assert_eq!(loaded.store.partition_len(Partition::Manual), 1);
    assert_eq!(loaded.store.partition_len(Partition::All), 2);
    assert_eq!(loaded.report.manual.rows_loaded, 2);
    assert_eq!(loaded.report.all.rows_loaded, 3);
    assert_eq!(loaded.report.all.lines_read, 4);
}

#[test]
fn test_loaded_set_is_ranked_by_similarity() {
    let (_dir, manual, all) = sources();
    let loaded = CoTermLoader::new(LoaderConfig::with_sources(manual, all))
        .load()
        .unwrap();

    let set = loaded.store.get("GO:0000001", Partition::Manual).unwrap();
    assert_eq!(set.selected_count(), 8);
    assert_eq!(set.total_count(), 24);

    let ranked: Vec<_> = set.ranked_by_similarity().collect();
    // GO:A: 4 / (8 + 8 - 4) = 33.3%, GO:B: 2 / (2 + 8 - 2) = 25%
    assert_eq!(ranked[0].compared_term_id(), "GO:A");
    assert_eq!(ranked[1].compared_term_id(), "GO:B");
    assert!(ranked[0].similarity_percent() >= ranked[1].similarity_percent());
    assert!((ranked[0].probability_ratio() - 1.5).abs() < 0.001);
}

#[test]
fn test_missing_manual_source_fails_whole_load() {
    let (dir, _manual, all) = sources();
    let missing = dir.path().join("absent.tsv");

    let result = CoTermLoader::new(LoaderConfig::with_sources(missing, all)).load();
    assert!(matches!(result, Err(LoaderError::Io { ref source_name, .. }) if source_name == "MANUAL"));
}

#[test]
fn test_missing_all_source_fails_whole_load() {
    let (dir, manual, _all) = sources();
    let missing = dir.path().join("absent.tsv.gz");

    let result = CoTermLoader::new(LoaderConfig::with_sources(manual, missing)).load();
    assert!(matches!(result, Err(LoaderError::Io { ref source_name, .. }) if source_name == "ALL"));
}

#[test]
fn test_corrupt_gzip_fails_whole_load() {
    let (dir, manual, _all) = sources();
    let corrupt = dir.path().join("corrupt.tsv.gz");
    std::fs::write(&corrupt, "GO:0000001\tGO:A\t4\t8\t8\t24\n").unwrap();

    let result = CoTermLoader::new(LoaderConfig::with_sources(manual, corrupt)).load();
    assert!(matches!(result, Err(LoaderError::Io { .. })));
}

#[test]
fn test_skip_limit_applies_per_source() {
    let dir = tempdir().unwrap();
    let manual = write_plain(
        dir.path(),
        "manual.tsv",
        &["GO:0000001\tGO:A\t4\t8\t8\t24", "GO:0000001\tGO:B\tx\t2\t8\t24"],
    );
    let all = write_plain(
        dir.path(),
        "all.tsv",
        &["GO:0000001\tGO:A\t4\t8\t8\t24", "not a row"],
    );

    let config = LoaderConfig {
        skip_limit: 1,
        ..LoaderConfig::with_sources(&manual, &all)
    };
    let loaded = CoTermLoader::new(config).load().unwrap();
    assert_eq!(loaded.report.total_rows_skipped(), 2);

    let strict = CoTermLoader::new(LoaderConfig::with_sources(manual, all)).load();
    assert!(matches!(strict, Err(LoaderError::SkipLimitExceeded { .. })));
}
