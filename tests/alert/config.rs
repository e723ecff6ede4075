use marketstack_rs::{AlertConfig, AlertRule, MsError};
use std::io::Write;

const SAMPLE: &str = r#"
[[rule]]
symbol = "GLDM"
threshold = 52.5

[[rule]]
symbol = "SIVR"
threshold = 31.0
enabled = false
"#;

#[test]
fn parses_rules_with_enabled_default() {
    let cfg = AlertConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(
        cfg.rules,
        vec![
            AlertRule::new("GLDM", 52.5),
            AlertRule::new("SIVR", 31.0).enabled(false),
        ]
    );
    let on: Vec<_> = cfg.enabled_rules().map(|r| r.symbol.as_str()).collect();
    assert_eq!(on, ["GLDM"]);
}

#[test]
fn reads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let cfg = AlertConfig::from_path(file.path()).unwrap();
    assert_eq!(cfg.rules.len(), 2);
}

#[test]
fn empty_document_has_no_rules() {
    assert!(AlertConfig::from_toml_str("").unwrap().rules.is_empty());
}

#[test]
fn malformed_config_is_a_config_error() {
    let err = AlertConfig::from_toml_str("[[rule]]\nsymbol = 3\n").unwrap_err();
    assert!(matches!(err, MsError::Config(_)));

    let err = AlertConfig::from_path("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, MsError::Config(_)));
}
