/*
[INPUT]:  Coin symbols and optional pagination count
[OUTPUT]: Wallet data (deposit addresses, pending withdraws, balances)
[POS]:    HTTP layer - wallet endpoints (require access token)
[UPDATE]: When Firi lists new coins or changes wallet endpoints
*/

use crate::http::{FiriClient, Result};
use serde_json::Value;
use tracing::warn;

impl FiriClient {
    /// Get the deposit address for a coin.
    ///
    /// GET /v2/{SYMBOL}/address
    ///
    /// Generic form behind the per-coin aliases; the symbol is upper-cased
    /// before interpolation.
    pub async fn coin_address(&self, symbol: &str) -> Result<Value> {
        let symbol = Self::path_segment("symbol", symbol)?.to_uppercase();
        self.get(&format!("/v2/{symbol}/address")).await
    }

    /// Get pending withdraws for a coin.
    ///
    /// GET /v2/{SYMBOL}/withdraw/pending
    pub async fn coin_withdraw_pending(&self, symbol: &str) -> Result<Value> {
        let symbol = Self::path_segment("symbol", symbol)?.to_uppercase();
        self.get(&format!("/v2/{symbol}/withdraw/pending")).await
    }

    // --- Per-coin aliases -------------------------------------------------

    /// Get the user's BTC address
    pub async fn btc_address(&self) -> Result<Value> {
        self.coin_address("BTC").await
    }

    /// Get the user's ETH address
    pub async fn eth_address(&self) -> Result<Value> {
        self.coin_address("ETH").await
    }

    /// Get the user's LTC address
    pub async fn ltc_address(&self) -> Result<Value> {
        self.coin_address("LTC").await
    }

    /// Get the user's XRP address
    pub async fn xrp_address(&self) -> Result<Value> {
        self.coin_address("XRP").await
    }

    /// Get the user's DAI address
    pub async fn dai_address(&self) -> Result<Value> {
        self.coin_address("DAI").await
    }

    /// Get the user's DOT address
    pub async fn dot_address(&self) -> Result<Value> {
        self.coin_address("DOT").await
    }

    /// Get the user's ADA address
    pub async fn ada_address(&self) -> Result<Value> {
        self.coin_address("ADA").await
    }

    /// Get the user's pending BTC withdraws
    pub async fn btc_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("BTC").await
    }

    /// Get the user's pending ETH withdraws
    pub async fn eth_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("ETH").await
    }

    /// Get the user's pending LTC withdraws
    pub async fn ltc_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("LTC").await
    }

    /// Get the user's pending XRP withdraws
    pub async fn xrp_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("XRP").await
    }

    /// Get the user's pending DAI withdraws
    pub async fn dai_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("DAI").await
    }

    /// Get the user's pending DOT withdraws
    pub async fn dot_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("DOT").await
    }

    /// Get the user's pending ADA withdraws
    pub async fn ada_withdraw_pending(&self) -> Result<Value> {
        self.coin_withdraw_pending("ADA").await
    }

    // --- Legacy names -----------------------------------------------------

    /// Get the user's XRP address (legacy name)
    #[deprecated(note = "use xrp_address")]
    pub async fn xrp_withdraw_address(&self) -> Result<Value> {
        warn!("xrp_withdraw_address is deprecated; use xrp_address");
        self.xrp_address().await
    }

    /// Get the user's LTC address (legacy name)
    #[deprecated(note = "use ltc_address")]
    pub async fn ltc_withdraw_address(&self) -> Result<Value> {
        warn!("ltc_withdraw_address is deprecated; use ltc_address");
        self.ltc_address().await
    }

    // --- Fiat deposits and balances ---------------------------------------

    /// Get the user's deposit history.
    ///
    /// GET /v2/deposit/history?count={count}
    ///
    /// Follows the same count policy as the history endpoints.
    pub async fn deposit_history(&self, count: Option<i64>) -> Result<Value> {
        let count = Self::effective_count(count)?;
        self.get_with_query("/v2/deposit/history", &[("count", Some(count.to_string()))])
            .await
    }

    /// Get the user's deposit address
    ///
    /// GET /v2/deposit/address
    pub async fn deposit_address(&self) -> Result<Value> {
        self.get("/v2/deposit/address").await
    }

    /// Check the balances for the user's wallets
    ///
    /// GET /v2/balances
    pub async fn balances(&self) -> Result<Value> {
        self.get("/v2/balances").await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, FiriClient};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> FiriClient {
        let config = ClientConfig {
            base_url: server.uri(),
            rate_limit: Duration::ZERO,
            ..ClientConfig::default()
        };
        FiriClient::with_config("test-token", config).expect("client init")
    }

    #[tokio::test]
    async fn test_coin_address_uppercases_symbol() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/v2/BTC/address"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": "bc1q..."})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let response = client.coin_address("btc").await.expect("coin_address failed");
        assert_eq!(response["address"], "bc1q...");
    }

    #[tokio::test]
    async fn test_alias_hits_generic_path() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/v2/ETH/withdraw/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        client
            .eth_withdraw_pending()
            .await
            .expect("eth_withdraw_pending failed");
    }

    #[tokio::test]
    async fn test_balances() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/v2/balances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"currency": "NOK", "balance": "100.00", "hold": "0.00", "available": "100.00"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let response = client.balances().await.expect("balances failed");
        assert_eq!(response[0]["currency"], "NOK");
    }
}
