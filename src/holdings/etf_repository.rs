use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::etf_model::{
    EtfHolding, EtfHoldingDB, EtfTransaction, EtfTransactionDB, NewEtfHolding, NewEtfTransaction,
};
use super::holdings_traits::EtfHoldingRepositoryTrait;
use crate::constants::{PRICE_DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbConnection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::{etf_holdings, etf_transactions};

/// Repository for ETF holdings and their transactions
pub struct EtfHoldingRepository {
    pool: Arc<DbPool>,
}

impl EtfHoldingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn now() -> String {
        chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    /// Confirms the holding exists and belongs to the user.
    fn ensure_holding(&self, conn: &mut DbConnection, owner_id: &str, holding_id: &str) -> Result<()> {
        etf_holdings::table
            .find(holding_id)
            .filter(etf_holdings::user_id.eq(owner_id))
            .select(etf_holdings::id)
            .first::<String>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("ETF holding with id {} not found", holding_id))
                }
                _ => e.into(),
            })?;
        Ok(())
    }
}

#[async_trait]
impl EtfHoldingRepositoryTrait for EtfHoldingRepository {
    async fn create(&self, owner_id: &str, new_holding: NewEtfHolding) -> Result<EtfHolding> {
        new_holding.validate()?;

        let mut holding_db: EtfHoldingDB = new_holding.into();
        holding_db.id = uuid::Uuid::new_v4().to_string();
        holding_db.user_id = owner_id.to_string();

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(etf_holdings::table)
            .values(&holding_db)
            .execute(&mut conn)?;

        Ok(holding_db.into())
    }

    async fn update(
        &self,
        owner_id: &str,
        holding_id: &str,
        update: NewEtfHolding,
    ) -> Result<EtfHolding> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let holding_db: EtfHoldingDB = update.into();

        let affected = diesel::update(
            etf_holdings::table
                .find(holding_id)
                .filter(etf_holdings::user_id.eq(owner_id)),
        )
        .set((
            etf_holdings::symbol.eq(holding_db.symbol),
            etf_holdings::name.eq(holding_db.name),
            etf_holdings::exchange.eq(holding_db.exchange),
            etf_holdings::units.eq(holding_db.units),
            etf_holdings::average_price.eq(holding_db.average_price),
            etf_holdings::current_price.eq(holding_db.current_price),
            etf_holdings::notes.eq(holding_db.notes),
            etf_holdings::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "ETF holding with id {} not found",
                holding_id
            )));
        }

        self.get_by_id(owner_id, holding_id)
    }

    async fn delete(&self, owner_id: &str, holding_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            etf_holdings::table
                .find(holding_id)
                .filter(etf_holdings::user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "ETF holding with id {} not found",
                holding_id
            )));
        }

        Ok(affected)
    }

    fn get_by_id(&self, owner_id: &str, holding_id: &str) -> Result<EtfHolding> {
        let mut conn = get_connection(&self.pool)?;

        let holding = etf_holdings::table
            .find(holding_id)
            .filter(etf_holdings::user_id.eq(owner_id))
            .first::<EtfHoldingDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("ETF holding with id {} not found", holding_id))
                }
                _ => e.into(),
            })?;

        Ok(holding.into())
    }

    fn list(&self, owner_id: &str) -> Result<Vec<EtfHolding>> {
        let mut conn = get_connection(&self.pool)?;

        etf_holdings::table
            .filter(etf_holdings::user_id.eq(owner_id))
            .order(etf_holdings::symbol.asc())
            .load::<EtfHoldingDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(EtfHolding::from).collect())
    }

    async fn update_price(&self, owner_id: &str, holding_id: &str, price: Decimal) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            etf_holdings::table
                .find(holding_id)
                .filter(etf_holdings::user_id.eq(owner_id)),
        )
        .set((
            etf_holdings::current_price
                .eq(price.round_dp(PRICE_DECIMAL_PRECISION).to_string()),
            etf_holdings::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "ETF holding with id {} not found",
                holding_id
            )));
        }

        Ok(())
    }

    async fn add_transaction(
        &self,
        owner_id: &str,
        holding_id: &str,
        new_transaction: NewEtfTransaction,
    ) -> Result<EtfTransaction> {
        new_transaction.validate()?;

        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        let mut transaction_db: EtfTransactionDB = new_transaction.into();
        transaction_db.id = uuid::Uuid::new_v4().to_string();
        transaction_db.holding_id = holding_id.to_string();

        diesel::insert_into(etf_transactions::table)
            .values(&transaction_db)
            .execute(&mut conn)?;

        Ok(transaction_db.into())
    }

    fn list_transactions(&self, owner_id: &str, holding_id: &str) -> Result<Vec<EtfTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        etf_transactions::table
            .filter(etf_transactions::holding_id.eq(holding_id))
            .order(etf_transactions::transaction_date.desc())
            .load::<EtfTransactionDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(EtfTransaction::from).collect())
    }

    async fn delete_transaction(
        &self,
        owner_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        let affected = diesel::delete(
            etf_transactions::table
                .find(transaction_id)
                .filter(etf_transactions::holding_id.eq(holding_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Transaction with id {} not found",
                transaction_id
            )));
        }

        Ok(affected)
    }

    fn list_all_transactions(&self, owner_id: &str) -> Result<Vec<EtfTransaction>> {
        let mut conn = get_connection(&self.pool)?;

        etf_transactions::table
            .inner_join(etf_holdings::table)
            .filter(etf_holdings::user_id.eq(owner_id))
            .select(EtfTransactionDB::as_select())
            .load::<EtfTransactionDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(EtfTransaction::from).collect())
    }
}
