//! Users module - registration, profile and password management.

mod users_model;
mod users_repository;
mod users_service;
mod users_traits;

#[cfg(test)]
mod users_service_tests;

pub use users_model::{ChangePassword, ProfileUpdate, User, UserDB, UserRegistration};
pub use users_repository::UserRepository;
pub use users_service::UserService;
pub use users_traits::UserRepositoryTrait;
