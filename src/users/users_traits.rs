//! User repository trait.
//!
//! Defines the contract for user persistence without database-specific
//! types, so services can be exercised against mock implementations.

use async_trait::async_trait;

use super::users_model::{ProfileUpdate, User, UserRegistration};
use crate::errors::Result;

/// Trait defining the contract for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Inserts a new user with an already-hashed password.
    async fn create(&self, registration: UserRegistration, password_hash: String) -> Result<User>;

    /// Retrieves a user by id.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Finds a user by username, if one exists.
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Finds a user by email, optionally excluding one user id.
    ///
    /// The exclusion supports profile updates, where a user keeping their
    /// own email must not collide with themselves.
    fn find_by_email(&self, email: &str, exclude_user_id: Option<&str>) -> Result<Option<User>>;

    /// Returns the stored password hash for a user.
    fn get_password_hash(&self, user_id: &str) -> Result<String>;

    /// Updates profile fields for a user.
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;

    /// Replaces the stored password hash for a user.
    async fn set_password_hash(&self, user_id: &str, password_hash: &str) -> Result<()>;
}
