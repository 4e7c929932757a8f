//! Portfolio module - net worth aggregation, snapshots and valuation.

pub mod net_worth;
pub mod snapshot;
pub mod valuation;

pub use net_worth::{NetWorthService, NetWorthSummary};
pub use snapshot::{SnapshotRepository, SnapshotService};
