//! Net worth snapshot module - dated captures of every asset class.

mod snapshot_model;
mod snapshot_repository;
mod snapshot_service;
mod snapshot_traits;

pub use snapshot_model::{
    AssetSnapshot, AssetSnapshotDB, NetWorthSnapshot, NetWorthSnapshotDB, NewAssetSnapshot,
    NewNetWorthSnapshot, SnapshotCaptureResult, SnapshotOutcome,
};
pub use snapshot_repository::SnapshotRepository;
pub use snapshot_service::SnapshotService;
pub use snapshot_traits::SnapshotRepositoryTrait;
