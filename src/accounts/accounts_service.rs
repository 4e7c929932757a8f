//! Bank account CRUD service.

use std::sync::Arc;

use super::accounts_model::{BankAccount, NewBankAccount};
use super::accounts_traits::BankAccountRepositoryTrait;
use crate::errors::Result;

/// Service for managing a user's bank accounts
pub struct BankAccountService {
    repository: Arc<dyn BankAccountRepositoryTrait>,
}

impl BankAccountService {
    pub fn new(repository: Arc<dyn BankAccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    pub async fn create_account(
        &self,
        user_id: &str,
        new_account: NewBankAccount,
    ) -> Result<BankAccount> {
        self.repository.create(user_id, new_account).await
    }

    pub async fn update_account(
        &self,
        user_id: &str,
        account_id: &str,
        update: NewBankAccount,
    ) -> Result<BankAccount> {
        self.repository.update(user_id, account_id, update).await
    }

    pub async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        self.repository.delete(user_id, account_id).await?;
        Ok(())
    }

    pub fn get_account(&self, user_id: &str, account_id: &str) -> Result<BankAccount> {
        self.repository.get_by_id(user_id, account_id)
    }

    pub fn list_accounts(&self, user_id: &str) -> Result<Vec<BankAccount>> {
        self.repository.list(user_id)
    }
}
