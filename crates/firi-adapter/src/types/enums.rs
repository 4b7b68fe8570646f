/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use crate::http::FiriError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of an order book an order is placed on.
///
/// Firi calls this the order `type`: `bid` buys, `ask` sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Bid,
    Ask,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Bid => "bid",
            OrderSide::Ask => "ask",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = FiriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bid" => Ok(OrderSide::Bid),
            "ask" => Ok(OrderSide::Ask),
            other => Err(FiriError::Validation(format!(
                "invalid order side '{other}', expected 'bid' or 'ask'"
            ))),
        }
    }
}
