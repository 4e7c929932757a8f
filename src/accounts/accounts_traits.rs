//! Bank account repository trait.

use async_trait::async_trait;

use super::accounts_model::{BankAccount, NewBankAccount};
use crate::errors::Result;

/// Trait defining the contract for bank account persistence.
///
/// Every method takes the owning user's id; rows belonging to other users
/// are invisible to all operations.
#[async_trait]
pub trait BankAccountRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_account: NewBankAccount) -> Result<BankAccount>;

    async fn update(
        &self,
        user_id: &str,
        account_id: &str,
        update: NewBankAccount,
    ) -> Result<BankAccount>;

    async fn delete(&self, user_id: &str, account_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, account_id: &str) -> Result<BankAccount>;

    fn list(&self, user_id: &str) -> Result<Vec<BankAccount>>;
}
