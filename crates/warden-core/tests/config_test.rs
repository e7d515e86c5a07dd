//! Configuration loading and validation tests.

use warden_core::config::{AuditConfig, CapacityConfig, PlacementPolicy, RecencyConfig};

#[test]
fn empty_toml_yields_documented_defaults() {
    let config = AuditConfig::from_toml_str("").expect("empty config is valid");
    assert_eq!(config.retention.min_daily, 7);
    assert_eq!(config.retention.min_weekly, 4);
    assert_eq!(config.retention.min_monthly, 3);
    assert_eq!(config.rpo.default_hours, 24);
    assert_eq!(config.recency.max_age_hours, 24.0);
    assert_eq!(config.jobs.success_status, "Success");
    assert_eq!(config.replication.healthy_status, "Healthy");
    assert_eq!(config.capacity.min_free_percent, 15.0);
    assert_eq!(config.subscription.max_ratio, 2.0);
}

#[test]
fn toml_sections_override_defaults() {
    let raw = r#"
        [retention]
        min_daily = 14
        min_weekly = 8

        [rpo]
        default_hours = 12

        [rpo.hours_by_level]
        critical = 4
        standard = 24

        [capacity]
        min_free_percent = 20.0

        [tiers.required_tier_by_category]
        database = "Gold"
    "#;
    let config = AuditConfig::from_toml_str(raw).expect("valid config");
    assert_eq!(config.retention.min_daily, 14);
    assert_eq!(config.retention.min_monthly, 3);
    assert_eq!(config.rpo.required_for("critical"), 4);
    assert_eq!(config.rpo.required_for("standard"), 24);
    assert_eq!(config.capacity.min_free_percent, 20.0);
    assert_eq!(config.tiers.required_for("database"), Some("Gold"));
    assert_eq!(config.tiers.required_for("web"), None);
}

#[test]
fn unmapped_criticality_falls_back_to_default_hours() {
    let config = AuditConfig::default();
    assert_eq!(config.rpo.required_for("unknown-tier"), 24);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = AuditConfig::from_toml_str("[retention\nmin_daily = 14").unwrap_err();
    assert!(matches!(
        err,
        warden_core::errors::ConfigError::ParseError { .. }
    ));
}

#[test]
fn nonsense_thresholds_are_rejected_before_evaluation() {
    let mut config = AuditConfig::default();
    config.recency = RecencyConfig {
        max_age_hours: -1.0,
    };
    assert!(config.validate().is_err());

    let mut config = AuditConfig::default();
    config.recency = RecencyConfig {
        max_age_hours: f64::NAN,
    };
    assert!(config.validate().is_err());

    let mut config = AuditConfig::default();
    config.capacity = CapacityConfig {
        min_free_percent: 0.0,
    };
    assert!(config.validate().is_err());

    let mut config = AuditConfig::default();
    config.capacity = CapacityConfig {
        min_free_percent: 150.0,
    };
    assert!(config.validate().is_err());
}

#[test]
fn zero_rpo_requirement_is_rejected() {
    let raw = r#"
        [rpo.hours_by_level]
        critical = 0
    "#;
    assert!(AuditConfig::from_toml_str(raw).is_err());
}

#[test]
fn default_placement_policy_governs_database_vms() {
    let policy = PlacementPolicy::default();
    assert_eq!(policy.matches("database", "ds-nvme-01"), Some(true));
    assert_eq!(policy.matches("database", "DS-NVME-01"), Some(true));
    assert_eq!(policy.matches("database", "ds-sas-01"), Some(false));
    assert_eq!(policy.matches("web", "ds-sas-01"), None);
}

#[test]
fn placement_policy_rejects_empty_tag_lists() {
    let mut policy = PlacementPolicy::default();
    policy
        .required_tags_by_category
        .insert("cache".to_string(), Vec::new());
    assert!(policy.validate().is_err());
}

#[test]
fn config_round_trips_through_serde() {
    let config = AuditConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: AuditConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.retention.min_daily, config.retention.min_daily);
    assert_eq!(back.recency.max_age_hours, config.recency.max_age_hours);
}
