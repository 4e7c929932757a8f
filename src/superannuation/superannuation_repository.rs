use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::superannuation_model::{
    NewSuperAccount, NewSuperSnapshot, SuperAccount, SuperAccountDB, SuperSnapshot,
    SuperSnapshotDB,
};
use super::superannuation_traits::SuperannuationRepositoryTrait;
use crate::constants::{DATE_FORMAT, DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbConnection, DbPool};
use crate::errors::{Error, Result, ValidationError};
use crate::schema::{super_accounts, super_snapshots};

/// Repository for superannuation accounts and their snapshots
pub struct SuperannuationRepository {
    pool: Arc<DbPool>,
}

impl SuperannuationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn now() -> String {
        chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    /// Confirms the account exists and belongs to the user.
    fn ensure_account(&self, conn: &mut DbConnection, owner_id: &str, account_id: &str) -> Result<()> {
        super_accounts::table
            .find(account_id)
            .filter(super_accounts::user_id.eq(owner_id))
            .select(super_accounts::id)
            .first::<String>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::NotFound(format!(
                    "Superannuation account with id {} not found",
                    account_id
                )),
                _ => e.into(),
            })?;
        Ok(())
    }

    fn map_unique_date(e: diesel::result::Error) -> Error {
        match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Error::Validation(ValidationError::field(
                "snapshot_date",
                "A snapshot for this date already exists.",
            )),
            _ => e.into(),
        }
    }
}

#[async_trait]
impl SuperannuationRepositoryTrait for SuperannuationRepository {
    async fn create_account(
        &self,
        owner_id: &str,
        new_account: NewSuperAccount,
    ) -> Result<SuperAccount> {
        new_account.validate()?;

        let now = Self::now();
        let account_db = SuperAccountDB {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner_id.to_string(),
            fund_name: new_account.fund_name.trim().to_string(),
            account_name: new_account.account_name,
            member_number: new_account.member_number,
            balance: new_account.balance.round_dp(DECIMAL_PRECISION).to_string(),
            employer_contribution: new_account
                .employer_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            personal_contribution: new_account
                .personal_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            investment_option: new_account.investment_option,
            notes: new_account.notes,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(super_accounts::table)
            .values(&account_db)
            .execute(&mut conn)?;

        Ok(account_db.into())
    }

    async fn update_account(
        &self,
        owner_id: &str,
        account_id: &str,
        update: NewSuperAccount,
    ) -> Result<SuperAccount> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            super_accounts::table
                .find(account_id)
                .filter(super_accounts::user_id.eq(owner_id)),
        )
        .set((
            super_accounts::fund_name.eq(update.fund_name.trim().to_string()),
            super_accounts::account_name.eq(update.account_name),
            super_accounts::member_number.eq(update.member_number),
            super_accounts::balance.eq(update.balance.round_dp(DECIMAL_PRECISION).to_string()),
            super_accounts::employer_contribution.eq(update
                .employer_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string()),
            super_accounts::personal_contribution.eq(update
                .personal_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string()),
            super_accounts::investment_option.eq(update.investment_option),
            super_accounts::notes.eq(update.notes),
            super_accounts::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Superannuation account with id {} not found",
                account_id
            )));
        }

        self.get_account(owner_id, account_id)
    }

    async fn delete_account(&self, owner_id: &str, account_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            super_accounts::table
                .find(account_id)
                .filter(super_accounts::user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Superannuation account with id {} not found",
                account_id
            )));
        }

        Ok(affected)
    }

    fn get_account(&self, owner_id: &str, account_id: &str) -> Result<SuperAccount> {
        let mut conn = get_connection(&self.pool)?;

        let account = super_accounts::table
            .find(account_id)
            .filter(super_accounts::user_id.eq(owner_id))
            .first::<SuperAccountDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::NotFound(format!(
                    "Superannuation account with id {} not found",
                    account_id
                )),
                _ => e.into(),
            })?;

        Ok(account.into())
    }

    fn list_accounts(&self, owner_id: &str) -> Result<Vec<SuperAccount>> {
        let mut conn = get_connection(&self.pool)?;

        super_accounts::table
            .filter(super_accounts::user_id.eq(owner_id))
            .order(super_accounts::created_at.asc())
            .load::<SuperAccountDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(SuperAccount::from).collect())
    }

    async fn create_snapshot(
        &self,
        owner_id: &str,
        account_id: &str,
        new_snapshot: NewSuperSnapshot,
    ) -> Result<SuperSnapshot> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_account(&mut conn, owner_id, account_id)?;

        let mut snapshot_db: SuperSnapshotDB = new_snapshot.into();
        snapshot_db.id = uuid::Uuid::new_v4().to_string();
        snapshot_db.account_id = account_id.to_string();

        diesel::insert_into(super_snapshots::table)
            .values(&snapshot_db)
            .execute(&mut conn)
            .map_err(Self::map_unique_date)?;

        Ok(snapshot_db.into())
    }

    async fn update_snapshot(
        &self,
        owner_id: &str,
        account_id: &str,
        snapshot_id: &str,
        update: NewSuperSnapshot,
    ) -> Result<SuperSnapshot> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_account(&mut conn, owner_id, account_id)?;

        let affected = diesel::update(
            super_snapshots::table
                .find(snapshot_id)
                .filter(super_snapshots::account_id.eq(account_id)),
        )
        .set((
            super_snapshots::snapshot_date
                .eq(update.snapshot_date.format(DATE_FORMAT).to_string()),
            super_snapshots::balance.eq(update.balance.round_dp(DECIMAL_PRECISION).to_string()),
            super_snapshots::employer_contribution.eq(update
                .employer_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string()),
            super_snapshots::personal_contribution.eq(update
                .personal_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string()),
            super_snapshots::notes.eq(update.notes),
        ))
        .execute(&mut conn)
        .map_err(Self::map_unique_date)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Snapshot with id {} not found",
                snapshot_id
            )));
        }

        let snapshot = super_snapshots::table
            .find(snapshot_id)
            .first::<SuperSnapshotDB>(&mut conn)?;

        Ok(snapshot.into())
    }

    async fn delete_snapshot(
        &self,
        owner_id: &str,
        account_id: &str,
        snapshot_id: &str,
    ) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_account(&mut conn, owner_id, account_id)?;

        let affected = diesel::delete(
            super_snapshots::table
                .find(snapshot_id)
                .filter(super_snapshots::account_id.eq(account_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Snapshot with id {} not found",
                snapshot_id
            )));
        }

        Ok(affected)
    }

    fn list_snapshots(&self, owner_id: &str, account_id: &str) -> Result<Vec<SuperSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_account(&mut conn, owner_id, account_id)?;

        super_snapshots::table
            .filter(super_snapshots::account_id.eq(account_id))
            .order(super_snapshots::snapshot_date.desc())
            .load::<SuperSnapshotDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(SuperSnapshot::from).collect())
    }
}
