use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::users_model::{ProfileUpdate, User, UserDB, UserRegistration};
use super::users_traits::UserRepositoryTrait;
use crate::constants::TIMESTAMP_FORMAT;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::users;
use crate::schema::users::dsl::*;

/// Repository for managing user rows
pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn now() -> String {
        chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, registration: UserRegistration, hash: String) -> Result<User> {
        let now = Self::now();
        let user_db = UserDB {
            id: uuid::Uuid::new_v4().to_string(),
            username: registration.username.trim().to_string(),
            email: registration.email.trim().to_string(),
            password_hash: hash,
            first_name: registration.first_name.trim().to_string(),
            last_name: registration.last_name.trim().to_string(),
            created_at: now.clone(),
            updated_at: now,
        };

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(users::table)
            .values(&user_db)
            .execute(&mut conn)?;

        Ok(user_db.into())
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user = users
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("User with id {} not found", user_id))
                }
                _ => e.into(),
            })?;

        Ok(user.into())
    }

    fn find_by_username(&self, candidate: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user = users
            .filter(username.eq(candidate))
            .first::<UserDB>(&mut conn)
            .optional()?;

        Ok(user.map(User::from))
    }

    fn find_by_email(&self, candidate: &str, exclude_user_id: Option<&str>) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = users.filter(email.eq(candidate)).into_boxed();
        if let Some(exclude) = exclude_user_id {
            query = query.filter(id.ne(exclude));
        }

        let user = query.first::<UserDB>(&mut conn).optional()?;

        Ok(user.map(User::from))
    }

    fn get_password_hash(&self, user_id: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;

        users
            .find(user_id)
            .select(password_hash)
            .first::<String>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("User with id {} not found", user_id))
                }
                _ => e.into(),
            })
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(users.find(user_id))
            .set((
                email.eq(update.email.trim().to_string()),
                first_name.eq(update.first_name.trim().to_string()),
                last_name.eq(update.last_name.trim().to_string()),
                updated_at.eq(Self::now()),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        self.get_by_id(user_id)
    }

    async fn set_password_hash(&self, user_id: &str, new_hash: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(users.find(user_id))
            .set((password_hash.eq(new_hash), updated_at.eq(Self::now())))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        Ok(())
    }
}
