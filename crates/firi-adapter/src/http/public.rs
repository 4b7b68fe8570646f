/*
[INPUT]:  Market identifiers
[OUTPUT]: Public market data (markets, tickers, depth, trade history)
[POS]:    HTTP layer - public endpoints (no account data)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{FiriClient, Result};
use serde_json::Value;

impl FiriClient {
    /// Get the current time from the Firi API
    ///
    /// GET /time
    pub async fn time(&self) -> Result<Value> {
        self.get("/time").await
    }

    /// Get available markets
    ///
    /// GET /v2/markets
    pub async fn markets(&self) -> Result<Value> {
        self.get("/v2/markets").await
    }

    /// Get info about a specific market
    ///
    /// GET /v2/markets/{market}
    pub async fn market(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/markets/{market}")).await
    }

    /// Get the ticker for a specific market
    ///
    /// GET /v2/markets/{market}/ticker
    pub async fn market_ticker(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/markets/{market}/ticker")).await
    }

    /// Get tickers for all markets
    ///
    /// GET /v2/markets/tickers
    pub async fn tickers(&self) -> Result<Value> {
        self.get("/v2/markets/tickers").await
    }

    /// Get the order book for a market
    ///
    /// GET /v2/markets/{market}/depth
    pub async fn market_depth(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/markets/{market}/depth")).await
    }

    /// Get public trade history for a market
    ///
    /// GET /v2/markets/{market}/history
    pub async fn market_history(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/markets/{market}/history")).await
    }
}
