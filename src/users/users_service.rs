//! User registration and account maintenance.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use log::{debug, info};
use std::sync::Arc;

use super::users_model::{ChangePassword, ProfileUpdate, User, UserRegistration};
use super::users_traits::UserRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::preferences::PreferencesRepositoryTrait;

/// Service for user registration and profile management
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    preferences_repository: Arc<dyn PreferencesRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        preferences_repository: Arc<dyn PreferencesRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            preferences_repository,
        }
    }

    /// Registers a new user.
    ///
    /// Creates the user row first, then the user's default preferences as an
    /// explicit second step so creation order and failure handling stay
    /// visible in this one place.
    pub async fn register(&self, registration: UserRegistration) -> Result<User> {
        registration.validate()?;

        if self
            .user_repository
            .find_by_username(registration.username.trim())?
            .is_some()
        {
            return Err(Error::Validation(ValidationError::field(
                "username",
                "A user with this username already exists.",
            )));
        }

        if self
            .user_repository
            .find_by_email(registration.email.trim(), None)?
            .is_some()
        {
            return Err(Error::Validation(ValidationError::field(
                "email",
                "A user with this email already exists.",
            )));
        }

        let hash = Self::hash_password(&registration.password)?;
        let user = self.user_repository.create(registration, hash).await?;

        self.preferences_repository.create_default(&user.id).await?;
        info!("Registered user {}", user.username);

        Ok(user)
    }

    /// Retrieves a user's profile
    pub fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository.get_by_id(user_id)
    }

    /// Updates profile fields, enforcing email uniqueness across other users
    pub async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        update.validate()?;

        if self
            .user_repository
            .find_by_email(update.email.trim(), Some(user_id))?
            .is_some()
        {
            return Err(Error::Validation(ValidationError::field(
                "email",
                "A user with this email already exists.",
            )));
        }

        self.user_repository.update_profile(user_id, update).await
    }

    /// Changes a user's password after verifying the current one
    pub async fn change_password(&self, user_id: &str, change: ChangePassword) -> Result<()> {
        change.validate()?;

        let stored_hash = self.user_repository.get_password_hash(user_id)?;
        if !Self::verify_password(&stored_hash, &change.old_password)? {
            return Err(Error::Validation(ValidationError::field(
                "old_password",
                "Old password is incorrect.",
            )));
        }

        let new_hash = Self::hash_password(&change.new_password)?;
        self.user_repository
            .set_password_hash(user_id, &new_hash)
            .await?;
        debug!("Password changed for user {}", user_id);

        Ok(())
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    fn verify_password(stored_hash: &str, candidate: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)?;
        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
