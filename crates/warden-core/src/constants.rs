//! Shared constants: formats, sentinels, and default thresholds.

/// Wall-clock timestamp format used by upstream collectors.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Policy-name sentinel meaning "no policy assigned".
pub const NO_POLICY_SENTINEL: &str = "None";

/// Tier reported for datastores absent from the tier inventory.
/// Never matches a required tier.
pub const UNKNOWN_TIER: &str = "UNKNOWN";

/// Replication status considered healthy.
pub const DEFAULT_HEALTHY_STATUS: &str = "Healthy";

/// Backup job status considered successful.
pub const DEFAULT_SUCCESS_STATUS: &str = "Success";

/// RPO requirement applied to criticality levels absent from the table.
pub const DEFAULT_RPO_HOURS: u32 = 24;

/// Default minimum daily restore points.
pub const DEFAULT_MIN_DAILY_RETENTION: u32 = 7;

/// Default minimum weekly restore points.
pub const DEFAULT_MIN_WEEKLY_RETENTION: u32 = 4;

/// Default minimum monthly restore points.
pub const DEFAULT_MIN_MONTHLY_RETENTION: u32 = 3;

/// Default maximum backup age in hours.
pub const DEFAULT_MAX_BACKUP_AGE_HOURS: f64 = 24.0;

/// Default minimum free datastore capacity, in percent.
pub const DEFAULT_MIN_FREE_PERCENT: f64 = 15.0;

/// Default maximum datastore subscription ratio.
pub const DEFAULT_MAX_SUBSCRIPTION_RATIO: f64 = 2.0;

/// Default storage-name tag required for database VMs.
pub const DEFAULT_DATABASE_STORAGE_TAG: &str = "nvme";
