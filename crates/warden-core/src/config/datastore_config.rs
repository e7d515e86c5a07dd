//! Datastore compliance thresholds and placement policy tables.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATABASE_STORAGE_TAG, DEFAULT_MAX_SUBSCRIPTION_RATIO, DEFAULT_MIN_FREE_PERCENT,
};
use crate::errors::ConfigError;

/// Free-capacity floor for datastores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Minimum required free capacity, in percent of total.
    pub min_free_percent: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            min_free_percent: DEFAULT_MIN_FREE_PERCENT,
        }
    }
}

impl CapacityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_free_percent.is_finite()
            || self.min_free_percent <= 0.0
            || self.min_free_percent > 100.0
        {
            return Err(ConfigError::InvalidValue {
                field: "capacity.min_free_percent".to_string(),
                message: format!(
                    "must be a percentage in (0, 100], got {}",
                    self.min_free_percent
                ),
            });
        }
        Ok(())
    }
}

/// Subscription ceiling for datastores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionConfig {
    /// Maximum allowed provisioned-to-capacity ratio.
    pub max_ratio: f64,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            max_ratio: DEFAULT_MAX_SUBSCRIPTION_RATIO,
        }
    }
}

impl SubscriptionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_ratio.is_finite() || self.max_ratio <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "subscription.max_ratio".to_string(),
                message: format!("must be a positive number, got {}", self.max_ratio),
            });
        }
        Ok(())
    }
}

/// Placement requirements: app category to required storage-name tags.
///
/// A governed VM satisfies the policy when its datastore name contains at
/// least one of the category's tags (case-insensitive). Categories absent
/// from the table are not governed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPolicy {
    pub required_tags_by_category: FxHashMap<String, Vec<String>>,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        let mut required_tags_by_category = FxHashMap::default();
        required_tags_by_category.insert(
            "database".to_string(),
            vec![DEFAULT_DATABASE_STORAGE_TAG.to_string()],
        );
        Self {
            required_tags_by_category,
        }
    }
}

impl PlacementPolicy {
    /// Required name tags for an app category, if the category is governed.
    pub fn required_tags(&self, category: &str) -> Option<&[String]> {
        self.required_tags_by_category
            .get(category)
            .map(|tags| tags.as_slice())
    }

    /// Whether `datastore` satisfies the policy for `category`.
    /// `None` when the category is not governed.
    pub fn matches(&self, category: &str, datastore: &str) -> Option<bool> {
        let tags = self.required_tags(category)?;
        let name = datastore.to_lowercase();
        Some(tags.iter().any(|tag| name.contains(&tag.to_lowercase())))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, tags) in &self.required_tags_by_category {
            if tags.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("placement.required_tags_by_category.{category}"),
                    message: "requires at least one storage tag".to_string(),
                });
            }
            if tags.iter().any(|tag| tag.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("placement.required_tags_by_category.{category}"),
                    message: "tags must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Performance-tier requirements: app category to required tier label.
/// Categories absent from the table are not evaluated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TierPolicy {
    pub required_tier_by_category: FxHashMap<String, String>,
}

impl TierPolicy {
    /// Required tier for an app category, if one is configured.
    pub fn required_for(&self, category: &str) -> Option<&str> {
        self.required_tier_by_category
            .get(category)
            .map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, tier) in &self.required_tier_by_category {
            if tier.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tiers.required_tier_by_category.{category}"),
                    message: "tier label must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
