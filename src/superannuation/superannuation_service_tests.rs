//! Unit tests for superannuation accounts and derived investment gains.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

const TEST_USER: &str = "user-1";
const OTHER_USER: &str = "user-2";

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockSuperannuationRepository {
    accounts: Mutex<Vec<SuperAccount>>,
    snapshots: Mutex<Vec<SuperSnapshot>>,
}

impl MockSuperannuationRepository {
    fn owns_account(&self, user_id: &str, account_id: &str) -> bool {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.id == account_id && a.user_id == user_id)
    }
}

#[async_trait]
impl SuperannuationRepositoryTrait for MockSuperannuationRepository {
    async fn create_account(
        &self,
        user_id: &str,
        new_account: NewSuperAccount,
    ) -> Result<SuperAccount> {
        new_account.validate()?;
        let now = Utc::now().naive_utc();
        let account = SuperAccount {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            fund_name: new_account.fund_name,
            account_name: new_account.account_name,
            member_number: new_account.member_number,
            balance: new_account.balance,
            employer_contribution: new_account.employer_contribution,
            personal_contribution: new_account.personal_contribution,
            investment_option: new_account.investment_option,
            notes: new_account.notes,
            created_at: now,
            updated_at: now,
        };
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn update_account(
        &self,
        user_id: &str,
        account_id: &str,
        update: NewSuperAccount,
    ) -> Result<SuperAccount> {
        update.validate()?;
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == account_id && a.user_id == user_id)
            .ok_or_else(|| {
                Error::NotFound(format!("Super account with id {} not found", account_id))
            })?;
        account.fund_name = update.fund_name;
        account.account_name = update.account_name;
        account.member_number = update.member_number;
        account.balance = update.balance;
        account.employer_contribution = update.employer_contribution;
        account.personal_contribution = update.personal_contribution;
        account.investment_option = update.investment_option;
        account.notes = update.notes;
        Ok(account.clone())
    }

    async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<usize> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| !(a.id == account_id && a.user_id == user_id));
        if accounts.len() == before {
            return Err(Error::NotFound(format!(
                "Super account with id {} not found",
                account_id
            )));
        }
        self.snapshots
            .lock()
            .unwrap()
            .retain(|s| s.account_id != account_id);
        Ok(1)
    }

    fn get_account(&self, user_id: &str, account_id: &str) -> Result<SuperAccount> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == account_id && a.user_id == user_id)
            .cloned()
            .ok_or_else(|| {
                Error::NotFound(format!("Super account with id {} not found", account_id))
            })
    }

    fn list_accounts(&self, user_id: &str) -> Result<Vec<SuperAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        new_snapshot: NewSuperSnapshot,
    ) -> Result<SuperSnapshot> {
        if !self.owns_account(user_id, account_id) {
            return Err(Error::NotFound(format!(
                "Super account with id {} not found",
                account_id
            )));
        }
        let snapshot = SuperSnapshot {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            snapshot_date: new_snapshot.snapshot_date,
            balance: new_snapshot.balance,
            employer_contribution: new_snapshot.employer_contribution,
            personal_contribution: new_snapshot.personal_contribution,
            investment_gain: Decimal::ZERO,
            notes: new_snapshot.notes,
            created_at: Utc::now().naive_utc(),
        };
        self.snapshots.lock().unwrap().push(snapshot.clone());
        Ok(snapshot)
    }

    async fn update_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
        update: NewSuperSnapshot,
    ) -> Result<SuperSnapshot> {
        if !self.owns_account(user_id, account_id) {
            return Err(Error::NotFound(format!(
                "Snapshot with id {} not found",
                snapshot_id
            )));
        }
        let mut snapshots = self.snapshots.lock().unwrap();
        let snapshot = snapshots
            .iter_mut()
            .find(|s| s.id == snapshot_id && s.account_id == account_id)
            .ok_or_else(|| Error::NotFound(format!("Snapshot with id {} not found", snapshot_id)))?;
        snapshot.snapshot_date = update.snapshot_date;
        snapshot.balance = update.balance;
        snapshot.employer_contribution = update.employer_contribution;
        snapshot.personal_contribution = update.personal_contribution;
        snapshot.notes = update.notes;
        Ok(snapshot.clone())
    }

    async fn delete_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
    ) -> Result<usize> {
        if !self.owns_account(user_id, account_id) {
            return Err(Error::NotFound(format!(
                "Snapshot with id {} not found",
                snapshot_id
            )));
        }
        let mut snapshots = self.snapshots.lock().unwrap();
        let before = snapshots.len();
        snapshots.retain(|s| !(s.id == snapshot_id && s.account_id == account_id));
        if snapshots.len() == before {
            return Err(Error::NotFound(format!(
                "Snapshot with id {} not found",
                snapshot_id
            )));
        }
        Ok(1)
    }

    fn list_snapshots(&self, user_id: &str, account_id: &str) -> Result<Vec<SuperSnapshot>> {
        if !self.owns_account(user_id, account_id) {
            return Err(Error::NotFound(format!(
                "Superannuation account with id {} not found",
                account_id
            )));
        }
        let mut snapshots: Vec<SuperSnapshot> = self
            .snapshots
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.account_id == account_id)
            .cloned()
            .collect();
        snapshots.sort_by(|a, b| b.snapshot_date.cmp(&a.snapshot_date));
        Ok(snapshots)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_account(fund_name: &str) -> NewSuperAccount {
    NewSuperAccount {
        fund_name: fund_name.to_string(),
        account_name: "Accumulation".to_string(),
        member_number: "12345678".to_string(),
        balance: dec!(50000),
        employer_contribution: Decimal::ZERO,
        personal_contribution: Decimal::ZERO,
        investment_option: "Balanced".to_string(),
        notes: String::new(),
    }
}

fn create_test_account(id: &str, user_id: &str, fund_name: &str) -> SuperAccount {
    let now = Utc::now().naive_utc();
    SuperAccount {
        id: id.to_string(),
        user_id: user_id.to_string(),
        fund_name: fund_name.to_string(),
        account_name: "Accumulation".to_string(),
        member_number: "12345678".to_string(),
        balance: dec!(50000),
        employer_contribution: Decimal::ZERO,
        personal_contribution: Decimal::ZERO,
        investment_option: "Balanced".to_string(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn create_test_snapshot(
    id: &str,
    account_id: &str,
    date: NaiveDate,
    balance: Decimal,
    employer: Decimal,
    personal: Decimal,
) -> SuperSnapshot {
    SuperSnapshot {
        id: id.to_string(),
        account_id: account_id.to_string(),
        snapshot_date: date,
        balance,
        employer_contribution: employer,
        personal_contribution: personal,
        investment_gain: Decimal::ZERO,
        notes: String::new(),
        created_at: Utc::now().naive_utc(),
    }
}

fn new_snapshot(
    date: NaiveDate,
    balance: Decimal,
    employer: Decimal,
    personal: Decimal,
) -> NewSuperSnapshot {
    NewSuperSnapshot {
        snapshot_date: date,
        balance,
        employer_contribution: employer,
        personal_contribution: personal,
        notes: String::new(),
    }
}

fn service_with(
    accounts: Vec<SuperAccount>,
    snapshots: Vec<SuperSnapshot>,
) -> SuperannuationService {
    SuperannuationService::new(Arc::new(MockSuperannuationRepository {
        accounts: Mutex::new(accounts),
        snapshots: Mutex::new(snapshots),
    }))
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_create_account() {
    let service = service_with(vec![], vec![]);

    let account = service
        .create_account(TEST_USER, new_account("AustralianSuper"))
        .await
        .unwrap();

    assert!(!account.id.is_empty());
    assert_eq!(account.user_id, TEST_USER);
    assert_eq!(account.fund_name, "AustralianSuper");
    assert_eq!(account.balance, dec!(50000));
}

#[tokio::test]
async fn test_create_account_requires_fund_name() {
    let service = service_with(vec![], vec![]);
    let mut request = new_account("AustralianSuper");
    request.fund_name = "  ".to_string();

    let result = service.create_account(TEST_USER, request).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingField(ref field)))
            if field == "fund_name"
    ));
}

#[tokio::test]
async fn test_list_accounts_scoped_to_user() {
    let service = service_with(
        vec![
            create_test_account("super-1", TEST_USER, "AustralianSuper"),
            create_test_account("super-2", OTHER_USER, "Hostplus"),
        ],
        vec![],
    );

    let accounts = service.list_accounts(TEST_USER).unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "super-1");
}

#[tokio::test]
async fn test_get_account_not_found() {
    let service = service_with(vec![], vec![]);

    let result = service.get_account(TEST_USER, "missing");

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_delete_account() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![],
    );

    service.delete_account(TEST_USER, "super-1").await.unwrap();

    assert!(matches!(
        service.get_account(TEST_USER, "super-1"),
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_account_scoped_to_user() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![],
    );

    let result = service
        .update_account(OTHER_USER, "super-1", new_account("Hostplus"))
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));
}

// ============================================================================
// Snapshot Gain Tests
// ============================================================================

#[tokio::test]
async fn test_first_snapshot_has_zero_investment_gain() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![],
    );

    let snapshot = service
        .create_snapshot(
            TEST_USER,
            "super-1",
            new_snapshot(test_date(2026, 1, 31), dec!(50000), dec!(500), dec!(0)),
        )
        .await
        .unwrap();

    assert_eq!(snapshot.investment_gain, Decimal::ZERO);
}

#[tokio::test]
async fn test_investment_gain_nets_out_contributions() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![create_test_snapshot(
            "snap-jan",
            "super-1",
            test_date(2026, 1, 31),
            dec!(50000),
            dec!(0),
            dec!(0),
        )],
    );

    let snapshot = service
        .create_snapshot(
            TEST_USER,
            "super-1",
            new_snapshot(test_date(2026, 2, 28), dec!(52000), dec!(500), dec!(200)),
        )
        .await
        .unwrap();

    // (52000 - 50000) - (500 + 200) = 1300
    assert_eq!(snapshot.investment_gain, dec!(1300.00));
}

#[tokio::test]
async fn test_investment_gain_negative_when_market_falls() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![create_test_snapshot(
            "snap-jan",
            "super-1",
            test_date(2026, 1, 31),
            dec!(50000),
            dec!(0),
            dec!(0),
        )],
    );

    let snapshot = service
        .create_snapshot(
            TEST_USER,
            "super-1",
            new_snapshot(test_date(2026, 2, 28), dec!(49000), dec!(1000), dec!(0)),
        )
        .await
        .unwrap();

    // (49000 - 50000) - 1000 = -2000
    assert_eq!(snapshot.investment_gain, dec!(-2000.00));
}

#[tokio::test]
async fn test_list_snapshots_newest_first_with_gains() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![
            create_test_snapshot(
                "snap-jan",
                "super-1",
                test_date(2026, 1, 31),
                dec!(50000),
                dec!(0),
                dec!(0),
            ),
            create_test_snapshot(
                "snap-mar",
                "super-1",
                test_date(2026, 3, 31),
                dec!(53000),
                dec!(500),
                dec!(0),
            ),
            create_test_snapshot(
                "snap-feb",
                "super-1",
                test_date(2026, 2, 28),
                dec!(52000),
                dec!(500),
                dec!(200),
            ),
        ],
    );

    let snapshots = service.list_snapshots(TEST_USER, "super-1").unwrap();

    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].id, "snap-mar");
    assert_eq!(snapshots[0].investment_gain, dec!(500.00));
    assert_eq!(snapshots[1].id, "snap-feb");
    assert_eq!(snapshots[1].investment_gain, dec!(1300.00));
    assert_eq!(snapshots[2].id, "snap-jan");
    assert_eq!(snapshots[2].investment_gain, Decimal::ZERO);
}

#[tokio::test]
async fn test_update_snapshot_recomputes_gain() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![
            create_test_snapshot(
                "snap-jan",
                "super-1",
                test_date(2026, 1, 31),
                dec!(50000),
                dec!(0),
                dec!(0),
            ),
            create_test_snapshot(
                "snap-feb",
                "super-1",
                test_date(2026, 2, 28),
                dec!(52000),
                dec!(500),
                dec!(200),
            ),
        ],
    );

    let updated = service
        .update_snapshot(
            TEST_USER,
            "super-1",
            "snap-feb",
            new_snapshot(test_date(2026, 2, 28), dec!(51000), dec!(500), dec!(200)),
        )
        .await
        .unwrap();

    // (51000 - 50000) - 700 = 300
    assert_eq!(updated.investment_gain, dec!(300.00));
}

#[tokio::test]
async fn test_delete_snapshot() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![
            create_test_snapshot(
                "snap-jan",
                "super-1",
                test_date(2026, 1, 31),
                dec!(50000),
                dec!(0),
                dec!(0),
            ),
            create_test_snapshot(
                "snap-feb",
                "super-1",
                test_date(2026, 2, 28),
                dec!(52000),
                dec!(0),
                dec!(0),
            ),
        ],
    );

    service
        .delete_snapshot(TEST_USER, "super-1", "snap-feb")
        .await
        .unwrap();

    let snapshots = service.list_snapshots(TEST_USER, "super-1").unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].id, "snap-jan");
}

#[tokio::test]
async fn test_snapshots_hidden_from_other_users() {
    let service = service_with(
        vec![create_test_account("super-1", TEST_USER, "AustralianSuper")],
        vec![create_test_snapshot(
            "snap-jan",
            "super-1",
            test_date(2026, 1, 31),
            dec!(50000),
            dec!(0),
            dec!(0),
        )],
    );

    let result = service.list_snapshots(OTHER_USER, "super-1");
    assert!(matches!(result, Err(Error::NotFound(_))));

    let result = service
        .create_snapshot(
            OTHER_USER,
            "super-1",
            new_snapshot(test_date(2026, 2, 28), dec!(1000), dec!(0), dec!(0)),
        )
        .await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}
