//! config.toml 로드/저장 테스트.
use assert_matches::assert_matches;
use heatstack::config::{load_or_default, load_with_outcome, Config, ConfigError, LoadOutcome};
use heatstack::cooling::CoolingTech;

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.rack.gpu_power_watts, 700.0);
    assert_eq!(cfg.rack.cooling, CoolingTech::Air);
    assert_eq!(cfg.language, "auto");
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "en".into();
    cfg.rack.cooling = CoolingTech::Dtc;
    cfg.rack.servers_per_rack = 10;
    cfg.lab_load = 80.0;
    cfg.save(&path).expect("save");

    let text = std::fs::read_to_string(&path).expect("read");
    assert!(text.contains("cooling = \"dtc\""), "{text}");

    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "language = \"ko\"\n\n[rack]\ngpu_power_watts = 1000.0\ncooling = \"imm\"\n",
    )
    .expect("write");

    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.rack.gpu_power_watts, 1000.0);
    assert_eq!(cfg.rack.cooling, CoolingTech::Imm);
    assert_eq!(cfg.rack.gpus_per_server, 8);
    assert_eq!(cfg.log_filter, "warn");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[rack\ngpu_power_watts = ").expect("write");
    assert_matches!(load_or_default(&path), Err(ConfigError::Parse(_)));
}

#[test]
fn unknown_cooling_in_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[rack]\ncooling = \"plasma\"\n").expect("write");
    assert_matches!(load_or_default(&path), Err(ConfigError::Parse(_)));
}

#[test]
fn outcome_reports_whether_defaults_were_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let (_, first) = load_with_outcome(&path).expect("first load");
    assert_eq!(first, LoadOutcome::DefaultsWritten);
    let (cfg, second) = load_with_outcome(&path).expect("second load");
    assert_eq!(second, LoadOutcome::Loaded);
    assert_eq!(cfg, Config::default());
}
