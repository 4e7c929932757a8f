use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::crypto_model::{
    CryptoHolding, CryptoHoldingDB, CryptoTransaction, CryptoTransactionDB, NewCryptoHolding,
    NewCryptoTransaction,
};
use super::holdings_traits::CryptoHoldingRepositoryTrait;
use crate::constants::{PRICE_DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbConnection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::{crypto_holdings, crypto_transactions};

/// Repository for crypto holdings and their transactions
pub struct CryptoHoldingRepository {
    pool: Arc<DbPool>,
}

impl CryptoHoldingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn now() -> String {
        chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    fn ensure_holding(&self, conn: &mut DbConnection, owner_id: &str, holding_id: &str) -> Result<()> {
        crypto_holdings::table
            .find(holding_id)
            .filter(crypto_holdings::user_id.eq(owner_id))
            .select(crypto_holdings::id)
            .first::<String>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("Crypto holding with id {} not found", holding_id))
                }
                _ => e.into(),
            })?;
        Ok(())
    }
}

#[async_trait]
impl CryptoHoldingRepositoryTrait for CryptoHoldingRepository {
    async fn create(&self, owner_id: &str, new_holding: NewCryptoHolding) -> Result<CryptoHolding> {
        new_holding.validate()?;

        let mut holding_db: CryptoHoldingDB = new_holding.into();
        holding_db.id = uuid::Uuid::new_v4().to_string();
        holding_db.user_id = owner_id.to_string();

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(crypto_holdings::table)
            .values(&holding_db)
            .execute(&mut conn)?;

        Ok(holding_db.into())
    }

    async fn update(
        &self,
        owner_id: &str,
        holding_id: &str,
        update: NewCryptoHolding,
    ) -> Result<CryptoHolding> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let holding_db: CryptoHoldingDB = update.into();

        let affected = diesel::update(
            crypto_holdings::table
                .find(holding_id)
                .filter(crypto_holdings::user_id.eq(owner_id)),
        )
        .set((
            crypto_holdings::symbol.eq(holding_db.symbol),
            crypto_holdings::name.eq(holding_db.name),
            crypto_holdings::coingecko_id.eq(holding_db.coingecko_id),
            crypto_holdings::quantity.eq(holding_db.quantity),
            crypto_holdings::average_price.eq(holding_db.average_price),
            crypto_holdings::current_price.eq(holding_db.current_price),
            crypto_holdings::wallet_address.eq(holding_db.wallet_address),
            crypto_holdings::exchange.eq(holding_db.exchange),
            crypto_holdings::notes.eq(holding_db.notes),
            crypto_holdings::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Crypto holding with id {} not found",
                holding_id
            )));
        }

        self.get_by_id(owner_id, holding_id)
    }

    async fn delete(&self, owner_id: &str, holding_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            crypto_holdings::table
                .find(holding_id)
                .filter(crypto_holdings::user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Crypto holding with id {} not found",
                holding_id
            )));
        }

        Ok(affected)
    }

    fn get_by_id(&self, owner_id: &str, holding_id: &str) -> Result<CryptoHolding> {
        let mut conn = get_connection(&self.pool)?;

        let holding = crypto_holdings::table
            .find(holding_id)
            .filter(crypto_holdings::user_id.eq(owner_id))
            .first::<CryptoHoldingDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("Crypto holding with id {} not found", holding_id))
                }
                _ => e.into(),
            })?;

        Ok(holding.into())
    }

    fn list(&self, owner_id: &str) -> Result<Vec<CryptoHolding>> {
        let mut conn = get_connection(&self.pool)?;

        crypto_holdings::table
            .filter(crypto_holdings::user_id.eq(owner_id))
            .order(crypto_holdings::symbol.asc())
            .load::<CryptoHoldingDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(CryptoHolding::from).collect())
    }

    async fn update_price(&self, owner_id: &str, holding_id: &str, price: Decimal) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            crypto_holdings::table
                .find(holding_id)
                .filter(crypto_holdings::user_id.eq(owner_id)),
        )
        .set((
            crypto_holdings::current_price
                .eq(price.round_dp(PRICE_DECIMAL_PRECISION).to_string()),
            crypto_holdings::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Crypto holding with id {} not found",
                holding_id
            )));
        }

        Ok(())
    }

    async fn add_transaction(
        &self,
        owner_id: &str,
        holding_id: &str,
        new_transaction: NewCryptoTransaction,
    ) -> Result<CryptoTransaction> {
        new_transaction.validate()?;

        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        let mut transaction_db: CryptoTransactionDB = new_transaction.into();
        transaction_db.id = uuid::Uuid::new_v4().to_string();
        transaction_db.holding_id = holding_id.to_string();

        diesel::insert_into(crypto_transactions::table)
            .values(&transaction_db)
            .execute(&mut conn)?;

        Ok(transaction_db.into())
    }

    fn list_transactions(
        &self,
        owner_id: &str,
        holding_id: &str,
    ) -> Result<Vec<CryptoTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        crypto_transactions::table
            .filter(crypto_transactions::holding_id.eq(holding_id))
            .order(crypto_transactions::transaction_date.desc())
            .load::<CryptoTransactionDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(CryptoTransaction::from).collect())
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
            crypto_transactions::table
                .find(transaction_id)
                .filter(crypto_transactions::holding_id.eq(holding_id)),
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
}
