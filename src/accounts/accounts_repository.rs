use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::accounts_model::{BankAccount, BankAccountDB, NewBankAccount};
use super::accounts_traits::BankAccountRepositoryTrait;
use crate::constants::{DECIMAL_PRECISION, PRICE_DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::bank_accounts;
use crate::schema::bank_accounts::dsl::*;

/// Repository for managing bank account rows
pub struct BankAccountRepository {
    pool: Arc<DbPool>,
}

impl BankAccountRepository {
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
impl BankAccountRepositoryTrait for BankAccountRepository {
    async fn create(&self, owner_id: &str, new_account: NewBankAccount) -> Result<BankAccount> {
        new_account.validate()?;

        let now = Self::now();
        let account_db = BankAccountDB {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner_id.to_string(),
            name: new_account.name.trim().to_string(),
            bank_name: new_account.bank_name.trim().to_string(),
            account_type: new_account.account_type,
            balance: new_account.balance.round_dp(DECIMAL_PRECISION).to_string(),
            interest_rate: new_account
                .interest_rate
                .map(|r: Decimal| r.round_dp(PRICE_DECIMAL_PRECISION).to_string()),
            notes: new_account.notes,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(bank_accounts::table)
            .values(&account_db)
            .execute(&mut conn)?;

        Ok(account_db.into())
    }

    async fn update(
        &self,
        owner_id: &str,
        account_id: &str,
        update: NewBankAccount,
    ) -> Result<BankAccount> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            bank_accounts
                .find(account_id)
                .filter(user_id.eq(owner_id)),
        )
        .set((
            name.eq(update.name.trim().to_string()),
            bank_name.eq(update.bank_name.trim().to_string()),
            account_type.eq(update.account_type),
            balance.eq(update.balance.round_dp(DECIMAL_PRECISION).to_string()),
            interest_rate.eq(update
                .interest_rate
                .map(|r| r.round_dp(PRICE_DECIMAL_PRECISION).to_string())),
            notes.eq(update.notes),
            updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Bank account with id {} not found",
                account_id
            )));
        }

        self.get_by_id(owner_id, account_id)
    }

    async fn delete(&self, owner_id: &str, account_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            bank_accounts
                .find(account_id)
                .filter(user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Bank account with id {} not found",
                account_id
            )));
        }

        Ok(affected)
    }

    fn get_by_id(&self, owner_id: &str, account_id: &str) -> Result<BankAccount> {
        let mut conn = get_connection(&self.pool)?;

        let account = bank_accounts
            .find(account_id)
            .filter(user_id.eq(owner_id))
            .first::<BankAccountDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("Bank account with id {} not found", account_id))
                }
                _ => e.into(),
            })?;

        Ok(account.into())
    }

    fn list(&self, owner_id: &str) -> Result<Vec<BankAccount>> {
        let mut conn = get_connection(&self.pool)?;

        bank_accounts
            .filter(user_id.eq(owner_id))
            .order(created_at.asc())
            .load::<BankAccountDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(BankAccount::from).collect())
    }
}
