//! Bank accounts module.

mod accounts_constants;
mod accounts_model;
mod accounts_repository;
mod accounts_service;
mod accounts_traits;

pub use accounts_constants::*;
pub use accounts_model::{BankAccount, BankAccountDB, NewBankAccount};
pub use accounts_repository::BankAccountRepository;
pub use accounts_service::BankAccountService;
pub use accounts_traits::BankAccountRepositoryTrait;
