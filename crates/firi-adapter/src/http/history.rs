/*
[INPUT]:  Optional pagination count and period path parameters
[OUTPUT]: Account history (transactions, trades, orders)
[POS]:    HTTP layer - history endpoints (require access token)
[UPDATE]: When adding new history endpoints or changing the count policy
*/

use crate::http::{FiriClient, Result};
use serde_json::Value;

impl FiriClient {
    /// Get history over all transactions.
    ///
    /// GET /v2/history/transactions?count={count}
    ///
    /// `count` defaults to [`FiriClient::DEFAULT_COUNT`]; values above
    /// [`FiriClient::MAX_COUNT`] are still sent but logged as a warning.
    pub async fn history_transactions(&self, count: Option<i64>) -> Result<Value> {
        let count = Self::effective_count(count)?;
        self.get_with_query(
            "/v2/history/transactions",
            &[("count", Some(count.to_string()))],
        )
        .await
    }

    /// Get history over transactions for a year
    ///
    /// GET /v2/history/transactions/{year}
    pub async fn history_transactions_year(&self, year: &str) -> Result<Value> {
        let year = Self::path_segment("year", year)?;
        self.get(&format!("/v2/history/transactions/{year}")).await
    }

    /// Get history over transactions for a month in a year
    ///
    /// GET /v2/history/transactions/{month}/{year}
    pub async fn history_transactions_month_year(&self, month: &str, year: &str) -> Result<Value> {
        let month = Self::path_segment("month", month)?;
        let year = Self::path_segment("year", year)?;
        self.get(&format!("/v2/history/transactions/{month}/{year}"))
            .await
    }

    /// Get history over all trades
    ///
    /// GET /v2/history/trades
    pub async fn history_trades(&self) -> Result<Value> {
        self.get("/v2/history/trades").await
    }

    /// Get history over trades for a year
    ///
    /// GET /v2/history/trades/{year}
    pub async fn history_trades_year(&self, year: &str) -> Result<Value> {
        let year = Self::path_segment("year", year)?;
        self.get(&format!("/v2/history/trades/{year}")).await
    }

    /// Get history over trades for a month in a year
    ///
    /// GET /v2/history/trades/{month}/{year}
    pub async fn history_trades_month_year(&self, month: &str, year: &str) -> Result<Value> {
        let month = Self::path_segment("month", month)?;
        let year = Self::path_segment("year", year)?;
        self.get(&format!("/v2/history/trades/{month}/{year}"))
            .await
    }

    /// Get history over all orders
    ///
    /// GET /v2/history/orders
    pub async fn history_orders(&self) -> Result<Value> {
        self.get("/v2/history/orders").await
    }

    /// Get history over orders for a market
    ///
    /// GET /v2/history/orders/{market}
    pub async fn history_orders_market(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/history/orders/{market}")).await
    }
}
