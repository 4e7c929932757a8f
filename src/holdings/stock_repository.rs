use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::holdings_traits::StockHoldingRepositoryTrait;
use super::stock_model::{
    NewStockHolding, NewStockTransaction, StockHolding, StockHoldingDB, StockTransaction,
    StockTransactionDB,
};
use crate::constants::{PRICE_DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbConnection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::{stock_holdings, stock_transactions};

/// Repository for stock holdings and their transactions
pub struct StockHoldingRepository {
    pool: Arc<DbPool>,
}

impl StockHoldingRepository {
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
        stock_holdings::table
            .find(holding_id)
            .filter(stock_holdings::user_id.eq(owner_id))
            .select(stock_holdings::id)
            .first::<String>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("Stock holding with id {} not found", holding_id))
                }
                _ => e.into(),
            })?;
        Ok(())
    }
}

#[async_trait]
impl StockHoldingRepositoryTrait for StockHoldingRepository {
    async fn create(&self, owner_id: &str, new_holding: NewStockHolding) -> Result<StockHolding> {
        new_holding.validate()?;

        let mut holding_db: StockHoldingDB = new_holding.into();
        holding_db.id = uuid::Uuid::new_v4().to_string();
        holding_db.user_id = owner_id.to_string();

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(stock_holdings::table)
            .values(&holding_db)
            .execute(&mut conn)?;

        Ok(holding_db.into())
    }

    async fn update(
        &self,
        owner_id: &str,
        holding_id: &str,
        update: NewStockHolding,
    ) -> Result<StockHolding> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let holding_db: StockHoldingDB = update.into();

        let affected = diesel::update(
            stock_holdings::table
                .find(holding_id)
                .filter(stock_holdings::user_id.eq(owner_id)),
        )
        .set((
            stock_holdings::symbol.eq(holding_db.symbol),
            stock_holdings::name.eq(holding_db.name),
            stock_holdings::exchange.eq(holding_db.exchange),
            stock_holdings::units.eq(holding_db.units),
            stock_holdings::average_price.eq(holding_db.average_price),
            stock_holdings::current_price.eq(holding_db.current_price),
            stock_holdings::notes.eq(holding_db.notes),
            stock_holdings::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Stock holding with id {} not found",
                holding_id
            )));
        }

        self.get_by_id(owner_id, holding_id)
    }

    async fn delete(&self, owner_id: &str, holding_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            stock_holdings::table
                .find(holding_id)
                .filter(stock_holdings::user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Stock holding with id {} not found",
                holding_id
            )));
        }

        Ok(affected)
    }

    fn get_by_id(&self, owner_id: &str, holding_id: &str) -> Result<StockHolding> {
        let mut conn = get_connection(&self.pool)?;

        let holding = stock_holdings::table
            .find(holding_id)
            .filter(stock_holdings::user_id.eq(owner_id))
            .first::<StockHoldingDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("Stock holding with id {} not found", holding_id))
                }
                _ => e.into(),
            })?;

        Ok(holding.into())
    }

    fn list(&self, owner_id: &str) -> Result<Vec<StockHolding>> {
        let mut conn = get_connection(&self.pool)?;

        stock_holdings::table
            .filter(stock_holdings::user_id.eq(owner_id))
            .order(stock_holdings::symbol.asc())
            .load::<StockHoldingDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(StockHolding::from).collect())
    }

    async fn update_price(&self, owner_id: &str, holding_id: &str, price: Decimal) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            stock_holdings::table
                .find(holding_id)
                .filter(stock_holdings::user_id.eq(owner_id)),
        )
        .set((
            stock_holdings::current_price
                .eq(price.round_dp(PRICE_DECIMAL_PRECISION).to_string()),
            stock_holdings::updated_at.eq(Self::now()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Stock holding with id {} not found",
                holding_id
            )));
        }

        Ok(())
    }

    async fn add_transaction(
        &self,
        owner_id: &str,
        holding_id: &str,
        new_transaction: NewStockTransaction,
    ) -> Result<StockTransaction> {
        new_transaction.validate()?;

        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        let mut transaction_db: StockTransactionDB = new_transaction.into();
        transaction_db.id = uuid::Uuid::new_v4().to_string();
        transaction_db.holding_id = holding_id.to_string();

        diesel::insert_into(stock_transactions::table)
            .values(&transaction_db)
            .execute(&mut conn)?;

        Ok(transaction_db.into())
    }

    fn list_transactions(&self, owner_id: &str, holding_id: &str) -> Result<Vec<StockTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        self.ensure_holding(&mut conn, owner_id, holding_id)?;

        stock_transactions::table
            .filter(stock_transactions::holding_id.eq(holding_id))
            .order(stock_transactions::transaction_date.desc())
            .load::<StockTransactionDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(StockTransaction::from).collect())
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
            stock_transactions::table
                .find(transaction_id)
                .filter(stock_transactions::holding_id.eq(holding_id)),
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

    fn list_all_transactions(&self, owner_id: &str) -> Result<Vec<StockTransaction>> {
        let mut conn = get_connection(&self.pool)?;

        stock_transactions::table
            .inner_join(stock_holdings::table)
            .filter(stock_holdings::user_id.eq(owner_id))
            .select(StockTransactionDB::as_select())
            .load::<StockTransactionDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(StockTransaction::from).collect())
    }
}
