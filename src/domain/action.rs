//! Trade actions: one record per observed on-chain order lifecycle event.
//!
//! A `TradeAction` is produced upstream (history fetcher), is immutable, and
//! is consumed by exactly one formatter call. The engine holds no state
//! across records.

use crate::domain::market::MarketInfo;
use crate::domain::numeric::{
    serde_opt_i256_dec, serde_opt_u256_dec, serde_u256_dec,
};
use crate::domain::primitives::{TokenAddress, TxRef};
use crate::domain::token::{Token, TokenPrice};
use alloy_primitives::{I256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// On-chain order category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    MarketSwap,
    LimitSwap,
    MarketIncrease,
    LimitIncrease,
    StopIncrease,
    MarketDecrease,
    LimitDecrease,
    StopLossDecrease,
    Liquidation,
}

impl OrderType {
    /// True for the swap order categories.
    pub fn is_swap(&self) -> bool {
        matches!(self, OrderType::MarketSwap | OrderType::LimitSwap)
    }

    /// True for categories that grow a position.
    pub fn is_increase(&self) -> bool {
        matches!(
            self,
            OrderType::MarketIncrease | OrderType::LimitIncrease | OrderType::StopIncrease
        )
    }

    /// True for categories that shrink a position (liquidation included).
    pub fn is_decrease(&self) -> bool {
        matches!(
            self,
            OrderType::MarketDecrease
                | OrderType::LimitDecrease
                | OrderType::StopLossDecrease
                | OrderType::Liquidation
        )
    }

    /// True for the conditional (limit/stop) categories.
    pub fn is_limit_family(&self) -> bool {
        matches!(
            self,
            OrderType::LimitSwap
                | OrderType::LimitIncrease
                | OrderType::StopIncrease
                | OrderType::LimitDecrease
                | OrderType::StopLossDecrease
        )
    }
}

/// Lifecycle event carried by a trade action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderCreated,
    OrderUpdated,
    OrderCancelled,
    OrderExecuted,
    OrderFrozen,
}

impl std::fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderEvent::OrderCreated => "OrderCreated",
            OrderEvent::OrderUpdated => "OrderUpdated",
            OrderEvent::OrderCancelled => "OrderCancelled",
            OrderEvent::OrderExecuted => "OrderExecuted",
            OrderEvent::OrderFrozen => "OrderFrozen",
        };
        write!(f, "{}", s)
    }
}

/// Collapse the raw chain acceptable price to its meaningful form.
///
/// The chain encodes "no acceptable price" as either 0 or the maximum
/// representable integer. Both collapse to None here so the formatting core
/// never re-derives meaningfulness from magic numbers.
pub fn parse_acceptable_price(raw: U256) -> Option<U256> {
    if raw.is_zero() || raw == U256::MAX {
        None
    } else {
        Some(raw)
    }
}

/// Serde for acceptable price: decimal string in, sentinel collapsed on read.
mod serde_acceptable_price {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
        serde_opt_u256_dec::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        let raw = serde_opt_u256_dec::deserialize(deserializer)?;
        Ok(raw.and_then(parse_acceptable_price))
    }
}

/// Serde for revert reason bytes as an optional 0x-prefixed hex string.
mod serde_reason_bytes {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&format!("0x{}", hex::encode(bytes))),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => hex::decode(s.trim_start_matches("0x"))
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// A position-order lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionTradeAction {
    pub order_type: OrderType,
    pub event: OrderEvent,
    pub transaction: TxRef,
    /// Set when this action is one part of a TWAP order.
    #[serde(default)]
    pub is_twap: bool,
    pub market_info: MarketInfo,
    pub index_token: Token,
    pub initial_collateral_token: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_collateral_token: Option<Token>,
    pub is_long: bool,
    /// Notional size change magnitude, 30-decimal USD scale. Direction is
    /// carried by the order category (increase vs decrease).
    #[serde(with = "serde_u256_dec")]
    pub size_delta_usd: U256,
    /// Collateral change, scaled by the collateral token's decimals.
    #[serde(with = "serde_u256_dec")]
    pub initial_collateral_delta_amount: U256,
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<U256>,
    /// Already sentinel-collapsed: None means "not meaningful".
    #[serde(default, with = "serde_acceptable_price", skip_serializing_if = "Option::is_none")]
    pub acceptable_price: Option<U256>,
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub execution_price: Option<U256>,
    #[serde(default, with = "serde_opt_i256_dec", skip_serializing_if = "Option::is_none")]
    pub price_impact_usd: Option<I256>,
    #[serde(default, with = "serde_opt_i256_dec", skip_serializing_if = "Option::is_none")]
    pub pnl_usd: Option<I256>,
    #[serde(default, with = "serde_opt_i256_dec", skip_serializing_if = "Option::is_none")]
    pub base_pnl_usd: Option<I256>,
    /// Fee amounts, scaled by the collateral token's decimals.
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub borrowing_fee_amount: Option<U256>,
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub funding_fee_amount: Option<U256>,
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub position_fee_amount: Option<U256>,
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub liquidation_fee_amount: Option<U256>,
    pub collateral_token_price: TokenPrice,
    pub index_token_price: TokenPrice,
    /// ABI-encoded revert payload from a cancelled/frozen execution.
    #[serde(default, with = "serde_reason_bytes", skip_serializing_if = "Option::is_none")]
    pub reason_bytes: Option<Vec<u8>>,
}

/// A swap-order lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTradeAction {
    pub order_type: OrderType,
    pub event: OrderEvent,
    pub transaction: TxRef,
    #[serde(default)]
    pub is_twap: bool,
    /// Token paid in.
    pub initial_collateral_token: Token,
    /// Token received out.
    pub target_collateral_token: Token,
    /// Ordered market addresses the swap routes through.
    pub swap_path: Vec<TokenAddress>,
    /// Amount in, scaled by the in-token's decimals.
    #[serde(with = "serde_u256_dec")]
    pub initial_collateral_delta_amount: U256,
    /// Guaranteed minimum out, scaled by the out-token's decimals.
    #[serde(with = "serde_u256_dec")]
    pub min_output_amount: U256,
    #[serde(default, with = "serde_opt_u256_dec", skip_serializing_if = "Option::is_none")]
    pub execution_amount_out: Option<U256>,
    #[serde(default, with = "serde_reason_bytes", skip_serializing_if = "Option::is_none")]
    pub reason_bytes: Option<Vec<u8>>,
}

/// Tagged union over the two trade-action shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TradeAction {
    Position(PositionTradeAction),
    Swap(SwapTradeAction),
}

impl TradeAction {
    pub fn order_type(&self) -> OrderType {
        match self {
            TradeAction::Position(a) => a.order_type,
            TradeAction::Swap(a) => a.order_type,
        }
    }

    pub fn event(&self) -> OrderEvent {
        match self {
            TradeAction::Position(a) => a.event,
            TradeAction::Swap(a) => a.event,
        }
    }

    pub fn transaction(&self) -> &TxRef {
        match self {
            TradeAction::Position(a) => &a.transaction,
            TradeAction::Swap(a) => &a.transaction,
        }
    }
}
