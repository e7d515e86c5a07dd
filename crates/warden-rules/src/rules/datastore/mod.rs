//! Datastore compliance rules: capacity, subscription, placement, tiers.

pub mod capacity;
pub mod placement;
pub mod subscription;
pub mod tier;

pub use capacity::DatastoreCapacityRule;
pub use placement::VmPlacementRule;
pub use subscription::SubscriptionRatioRule;
pub use tier::PerformanceTierRule;
