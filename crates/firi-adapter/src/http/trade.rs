/*
[INPUT]:  Order parameters (market, side, price, amount) and order ids
[OUTPUT]: Active orders, order history, placement and cancellation results
[POS]:    HTTP layer - trading endpoints (require access token)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{FiriClient, FiriError, Result};
use crate::types::OrderSide;
use serde_json::{Value, json};
use tracing::warn;

impl FiriClient {
    /// Get active orders
    ///
    /// GET /v2/orders
    pub async fn orders(&self) -> Result<Value> {
        self.get("/v2/orders").await
    }

    /// Get active orders for a specific market
    ///
    /// GET /v2/orders/{market}
    pub async fn orders_market(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/orders/{market}")).await
    }

    /// Get filled and closed orders for a specific market
    ///
    /// GET /v2/orders/{market}/history
    pub async fn orders_market_history(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.get(&format!("/v2/orders/{market}/history")).await
    }

    /// Get all filled and closed orders
    ///
    /// GET /v2/orders/history
    pub async fn orders_history(&self) -> Result<Value> {
        self.get("/v2/orders/history").await
    }

    /// Get an order by id
    ///
    /// GET /v2/order/{order_id}
    pub async fn order_by_id(&self, order_id: &str) -> Result<Value> {
        let order_id = Self::path_segment("order id", order_id)?;
        self.get(&format!("/v2/order/{order_id}")).await
    }

    /// Create an order.
    ///
    /// POST /v2/orders with body `{"market", "type", "price", "amount"}`
    ///
    /// Price and amount are passed as strings, exactly as the API expects
    /// them; the adapter does not parse or round them.
    pub async fn create_order(
        &self,
        market: &str,
        side: OrderSide,
        price: &str,
        amount: &str,
    ) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        if price.trim().is_empty() {
            return Err(FiriError::Validation("price must not be empty".to_string()));
        }
        if amount.trim().is_empty() {
            return Err(FiriError::Validation(
                "amount must not be empty".to_string(),
            ));
        }
        let body = json!({
            "market": market,
            "type": side.as_str(),
            "price": price,
            "amount": amount,
        });
        self.post("/v2/orders", &body).await
    }

    /// Delete all the user's orders
    ///
    /// DELETE /v2/orders
    pub async fn delete_orders(&self) -> Result<Value> {
        self.delete("/v2/orders").await
    }

    /// Delete an order by id, returning the matched amount of the cancelled
    /// order
    ///
    /// DELETE /v2/orders/{order_id}/detailed
    pub async fn delete_order_detailed(&self, order_id: &str) -> Result<Value> {
        let order_id = Self::path_segment("order id", order_id)?;
        self.delete(&format!("/v2/orders/{order_id}/detailed")).await
    }

    /// Delete an order by id and market, returning the matched amount of the
    /// cancelled order
    ///
    /// DELETE /v2/orders/{order_id}/{market}/detailed
    pub async fn delete_order_market_detailed(&self, order_id: &str, market: &str) -> Result<Value> {
        let order_id = Self::path_segment("order id", order_id)?;
        let market = Self::path_segment("market", market)?;
        self.delete(&format!("/v2/orders/{order_id}/{market}/detailed"))
            .await
    }

    /// Delete the user's orders for a market
    ///
    /// DELETE /v2/orders/{market}
    pub async fn delete_orders_for_market(&self, market: &str) -> Result<Value> {
        let market = Self::path_segment("market", market)?;
        self.delete(&format!("/v2/orders/{market}")).await
    }

    /// Delete the user's orders for a market (legacy name)
    #[deprecated(note = "use delete_orders_for_market")]
    pub async fn delete_orders_marketormarketsid(&self, market: &str) -> Result<Value> {
        warn!("delete_orders_marketormarketsid is deprecated; use delete_orders_for_market");
        self.delete_orders_for_market(market).await
    }
}
