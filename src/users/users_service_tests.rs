//! Unit tests for registration, profile updates and password changes.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use crate::preferences::{PreferencesRepositoryTrait, PreferencesUpdate, UserPreferences};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockUserRepository {
    users: Mutex<Vec<(User, String)>>,
}

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn create(&self, registration: UserRegistration, password_hash: String) -> Result<User> {
        let now = Utc::now().naive_utc();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: registration.username.trim().to_string(),
            email: registration.email.trim().to_string(),
            first_name: registration.first_name,
            last_name: registration.last_name,
            created_at: now,
            updated_at: now,
        };
        self.users
            .lock()
            .unwrap()
            .push((user.clone(), password_hash));
        Ok(user)
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.clone())
            .ok_or_else(|| Error::NotFound(format!("User with id {} not found", user_id)))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    fn find_by_email(&self, email: &str, exclude_user_id: Option<&str>) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email && exclude_user_id != Some(u.id.as_str()))
            .map(|(u, _)| u.clone()))
    }

    fn get_password_hash(&self, user_id: &str) -> Result<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(_, hash)| hash.clone())
            .ok_or_else(|| Error::NotFound(format!("User with id {} not found", user_id)))
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("User with id {} not found", user_id)))?;
        entry.0.email = update.email.trim().to_string();
        entry.0.first_name = update.first_name;
        entry.0.last_name = update.last_name;
        Ok(entry.0.clone())
    }

    async fn set_password_hash(&self, user_id: &str, password_hash: &str) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("User with id {} not found", user_id)))?;
        entry.1 = password_hash.to_string();
        Ok(())
    }
}

struct MockPreferencesRepository {
    created_defaults: Mutex<Vec<String>>,
}

#[async_trait]
impl PreferencesRepositoryTrait for MockPreferencesRepository {
    async fn create_default(&self, user_id: &str) -> Result<UserPreferences> {
        self.created_defaults
            .lock()
            .unwrap()
            .push(user_id.to_string());
        let now = Utc::now().naive_utc();
        Ok(UserPreferences {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            date_of_birth: None,
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            postcode: String::new(),
            country: "Australia".to_string(),
            currency: "AUD".to_string(),
            timezone: "Australia/Sydney".to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    fn get_by_user_id(&self, _user_id: &str) -> Result<UserPreferences> {
        unimplemented!()
    }

    async fn update(&self, _user_id: &str, _update: PreferencesUpdate) -> Result<UserPreferences> {
        unimplemented!()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn registration(username: &str, email: &str) -> UserRegistration {
    UserRegistration {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret-123".to_string(),
        password_confirm: "secret-123".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}

fn create_test_user(id: &str, username: &str, email: &str) -> User {
    let now = Utc::now().naive_utc();
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn hash_for(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

struct Harness {
    service: UserService,
    user_repository: Arc<MockUserRepository>,
    preferences_repository: Arc<MockPreferencesRepository>,
}

fn harness_with_users(users: Vec<(User, String)>) -> Harness {
    let user_repository = Arc::new(MockUserRepository {
        users: Mutex::new(users),
    });
    let preferences_repository = Arc::new(MockPreferencesRepository {
        created_defaults: Mutex::new(vec![]),
    });
    let service = UserService::new(user_repository.clone(), preferences_repository.clone());
    Harness {
        service,
        user_repository,
        preferences_repository,
    }
}

fn empty_harness() -> Harness {
    harness_with_users(vec![])
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_creates_user_and_default_preferences() {
    let harness = empty_harness();

    let user = harness
        .service
        .register(registration("alice", "alice@example.com"))
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    // The raw password is never stored
    let stored_hash = harness.user_repository.get_password_hash(&user.id).unwrap();
    assert!(stored_hash.starts_with("$argon2"));

    let created = harness
        .preferences_repository
        .created_defaults
        .lock()
        .unwrap();
    assert_eq!(created.as_slice(), &[user.id]);
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let harness = empty_harness();
    let mut request = registration("alice", "alice@example.com");
    request.password_confirm = "something-else".to_string();

    let result = harness.service.register(request).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, ref message }))
            if field == "password" && message == "Password fields didn't match."
    ));
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let harness = empty_harness();

    let result = harness
        .service
        .register(registration("alice", "not-an-email"))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, .. }))
            if field == "email"
    ));
}

#[tokio::test]
async fn test_register_rejects_duplicate_username() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("secret-123"),
    )]);

    let result = harness
        .service
        .register(registration("alice", "alice2@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, ref message }))
            if field == "username" && message == "A user with this username already exists."
    ));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("secret-123"),
    )]);

    let result = harness
        .service
        .register(registration("bob", "alice@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, ref message }))
            if field == "email" && message == "A user with this email already exists."
    ));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile_changes_fields() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("secret-123"),
    )]);

    let updated = harness
        .service
        .update_profile(
            "user-1",
            ProfileUpdate {
                email: "alice@new.example.com".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "alice@new.example.com");
    assert_eq!(updated.first_name, "Alice");
    assert_eq!(updated.last_name, "Smith");
}

#[tokio::test]
async fn test_update_profile_rejects_email_taken_by_another_user() {
    let harness = harness_with_users(vec![
        (
            create_test_user("user-1", "alice", "alice@example.com"),
            hash_for("secret-123"),
        ),
        (
            create_test_user("user-2", "bob", "bob@example.com"),
            hash_for("secret-123"),
        ),
    ]);

    let result = harness
        .service
        .update_profile(
            "user-1",
            ProfileUpdate {
                email: "bob@example.com".to_string(),
                first_name: String::new(),
                last_name: String::new(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, .. }))
            if field == "email"
    ));
}

#[tokio::test]
async fn test_update_profile_allows_keeping_own_email() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("secret-123"),
    )]);

    let updated = harness
        .service
        .update_profile(
            "user-1",
            ProfileUpdate {
                email: "alice@example.com".to_string(),
                first_name: "Alice".to_string(),
                last_name: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "alice@example.com");
}

// ============================================================================
// Password Tests
// ============================================================================

#[tokio::test]
async fn test_change_password_rejects_wrong_old_password() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("old-secret"),
    )]);

    let result = harness
        .service
        .change_password(
            "user-1",
            ChangePassword {
                old_password: "wrong-guess".to_string(),
                new_password: "new-secret".to_string(),
                new_password_confirm: "new-secret".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, ref message }))
            if field == "old_password" && message == "Old password is incorrect."
    ));
}

#[tokio::test]
async fn test_change_password_requires_matching_confirmation() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("old-secret"),
    )]);

    let result = harness
        .service
        .change_password(
            "user-1",
            ChangePassword {
                old_password: "old-secret".to_string(),
                new_password: "new-secret".to_string(),
                new_password_confirm: "different".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidField { ref field, .. }))
            if field == "new_password"
    ));
}

#[tokio::test]
async fn test_change_password_replaces_stored_hash() {
    let harness = harness_with_users(vec![(
        create_test_user("user-1", "alice", "alice@example.com"),
        hash_for("old-secret"),
    )]);

    harness
        .service
        .change_password(
            "user-1",
            ChangePassword {
                old_password: "old-secret".to_string(),
                new_password: "new-secret".to_string(),
                new_password_confirm: "new-secret".to_string(),
            },
        )
        .await
        .unwrap();

    let stored_hash = harness
        .user_repository
        .get_password_hash("user-1")
        .unwrap();
    let parsed = PasswordHash::new(&stored_hash).unwrap();
    assert!(Argon2::default()
        .verify_password(b"new-secret", &parsed)
        .is_ok());
}
