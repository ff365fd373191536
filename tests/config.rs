//! Tests for config parsing.

use consoleshim::config::{Config, SinkKind};
use consoleshim::{Severity, Thresholds};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.thresholds(), Thresholds::new(5, 5));
    assert!(config.terminal.enabled);
    assert!(config.terminal.colors);
    assert_eq!(config.parse_sink_kind(), SinkKind::None);
    assert_eq!(config.internal_rank(), Severity::Warn.rank());
}

#[test]
fn snake_case_levels() {
    let config = Config::from_toml(
        r"
[levels]
client_log_level = 3
server_log_level = 1
",
    )
    .unwrap();
    assert_eq!(config.thresholds(), Thresholds::new(3, 1));
}

#[test]
fn camel_case_levels_are_accepted() {
    let config = Config::from_toml(
        r"
[levels]
clientLogLevel = 2
serverLogLevel = 0
",
    )
    .unwrap();
    assert_eq!(config.thresholds(), Thresholds::new(2, 0));
}

#[test]
fn flat_camel_case_levels_are_accepted() {
    let config = Config::from_toml("clientLogLevel = 1\nserverLogLevel = 0\n").unwrap();
    assert_eq!(config.thresholds(), Thresholds::new(1, 0));
}

#[test]
fn flat_level_overrides_table() {
    let config = Config::from_toml(
        r"
client_log_level = 2

[levels]
client_log_level = 4
server_log_level = 3
",
    )
    .unwrap();
    assert_eq!(config.thresholds(), Thresholds::new(2, 3));
}

#[test]
fn negative_level_is_a_parse_error() {
    let err = Config::from_toml("[levels]\nclient_log_level = -1").unwrap_err();
    assert!(matches!(err, consoleshim::Error::ConfigParse(_)));
}

#[test]
fn sink_kind_aliases() {
    let jsonl = Config::from_toml("[sink]\nkind = \"JSONL\"").unwrap();
    assert_eq!(jsonl.parse_sink_kind(), SinkKind::JsonLines);
    let unknown = Config::from_toml("[sink]\nkind = \"http\"").unwrap();
    assert_eq!(unknown.parse_sink_kind(), SinkKind::None);
}

#[test]
fn invalid_internal_level_falls_back_to_warn() {
    let config = Config::from_toml("[internal]\nlevel = \"loud\"").unwrap();
    assert_eq!(config.internal_rank(), Severity::Warn.rank());
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.thresholds(), Thresholds::default());
}

#[test]
fn load_from_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("consoleshim.toml");
    fs::write(
        &path,
        r#"
[levels]
client_log_level = 4

[terminal]
colors = false

[sink]
kind = "jsonl"
path = "/tmp/out.jsonl"

[stack]
capture = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.thresholds().client, 4);
    assert_eq!(config.thresholds().server, 5);
    assert!(!config.terminal.colors);
    assert_eq!(config.sink.path.as_deref(), Some("/tmp/out.jsonl"));
    assert!(!config.stack.capture);
}
