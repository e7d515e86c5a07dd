//! Aggregate audit configuration with TOML loading.

use serde::{Deserialize, Serialize};

use super::backup_config::{
    JobStatusConfig, RecencyConfig, ReplicationConfig, RetentionThresholds, RpoRequirements,
};
use super::datastore_config::{CapacityConfig, PlacementPolicy, SubscriptionConfig, TierPolicy};
use crate::errors::ConfigError;

/// Configuration for a full compliance audit run.
///
/// Every section has documented defaults, so an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub retention: RetentionThresholds,
    pub rpo: RpoRequirements,
    pub recency: RecencyConfig,
    pub jobs: JobStatusConfig,
    pub replication: ReplicationConfig,
    pub capacity: CapacityConfig,
    pub subscription: SubscriptionConfig,
    pub placement: PlacementPolicy,
    pub tiers: TierPolicy,
}

impl AuditConfig {
    /// Parse a TOML document, then validate every section.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(
            governed_placement_categories = config.placement.required_tags_by_category.len(),
            tier_categories = config.tiers.required_tier_by_category.len(),
            "audit config loaded"
        );
        Ok(config)
    }

    /// Validate every threshold section before evaluation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rpo.validate()?;
        self.recency.validate()?;
        self.jobs.validate()?;
        self.replication.validate()?;
        self.capacity.validate()?;
        self.subscription.validate()?;
        self.placement.validate()?;
        self.tiers.validate()?;
        Ok(())
    }
}
