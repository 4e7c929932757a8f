//! Superannuation module - retirement accounts and their dated snapshots.

mod superannuation_model;
mod superannuation_repository;
mod superannuation_service;
mod superannuation_traits;

#[cfg(test)]
mod superannuation_service_tests;

pub use superannuation_model::{
    NewSuperAccount, NewSuperSnapshot, SuperAccount, SuperAccountDB, SuperSnapshot,
    SuperSnapshotDB,
};
pub use superannuation_repository::SuperannuationRepository;
pub use superannuation_service::SuperannuationService;
pub use superannuation_traits::SuperannuationRepositoryTrait;
