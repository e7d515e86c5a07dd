//! Backup compliance thresholds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HEALTHY_STATUS, DEFAULT_MAX_BACKUP_AGE_HOURS, DEFAULT_MIN_DAILY_RETENTION,
    DEFAULT_MIN_MONTHLY_RETENTION, DEFAULT_MIN_WEEKLY_RETENTION, DEFAULT_RPO_HOURS,
    DEFAULT_SUCCESS_STATUS,
};
use crate::errors::ConfigError;

/// Minimum restore-point counts per retention window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionThresholds {
    pub min_daily: u32,
    pub min_weekly: u32,
    pub min_monthly: u32,
}

impl Default for RetentionThresholds {
    fn default() -> Self {
        Self {
            min_daily: DEFAULT_MIN_DAILY_RETENTION,
            min_weekly: DEFAULT_MIN_WEEKLY_RETENTION,
            min_monthly: DEFAULT_MIN_MONTHLY_RETENTION,
        }
    }
}

/// Required RPO hours per criticality level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RpoRequirements {
    /// Criticality level to maximum tolerable data-loss window in hours.
    pub hours_by_level: FxHashMap<String, u32>,
    /// Applied to criticality levels absent from the table.
    pub default_hours: u32,
}

impl Default for RpoRequirements {
    fn default() -> Self {
        Self {
            hours_by_level: FxHashMap::default(),
            default_hours: DEFAULT_RPO_HOURS,
        }
    }
}

impl RpoRequirements {
    /// Required hours for a criticality level, falling back to the default.
    pub fn required_for(&self, level: &str) -> u32 {
        self.hours_by_level
            .get(level)
            .copied()
            .unwrap_or(self.default_hours)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rpo.default_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        for (level, hours) in &self.hours_by_level {
            if *hours == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("rpo.hours_by_level.{level}"),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Backup recency window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecencyConfig {
    /// Maximum acceptable backup age in hours.
    pub max_age_hours: f64,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            max_age_hours: DEFAULT_MAX_BACKUP_AGE_HOURS,
        }
    }
}

impl RecencyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_age_hours.is_finite() || self.max_age_hours <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "recency.max_age_hours".to_string(),
                message: format!("must be a positive number, got {}", self.max_age_hours),
            });
        }
        Ok(())
    }
}

/// Backup job status expectations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobStatusConfig {
    /// Status string reported by a successful job.
    pub success_status: String,
}

impl Default for JobStatusConfig {
    fn default() -> Self {
        Self {
            success_status: DEFAULT_SUCCESS_STATUS.to_string(),
        }
    }
}

impl JobStatusConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.success_status.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "jobs.success_status".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Offsite replication expectations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicationConfig {
    /// Status string reported by a healthy replica.
    pub healthy_status: String,
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        Self {
            healthy_status: DEFAULT_HEALTHY_STATUS.to_string(),
        }
    }
}

impl ReplicationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.healthy_status.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "replication.healthy_status".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
