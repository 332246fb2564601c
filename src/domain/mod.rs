//! Domain types for on-chain trade history records.
//!
//! This module provides:
//! - Fixed-point arithmetic helpers over 30-decimal chain integers
//! - Token, price and market metadata
//! - The TradeAction tagged union (position vs swap lifecycle events)
//! - Sentinel collapsing for "no acceptable price" at the parse boundary

pub mod action;
pub mod market;
pub mod numeric;
pub mod primitives;
pub mod token;

pub use action::{
    parse_acceptable_price, OrderEvent, OrderType, PositionTradeAction, SwapTradeAction,
    TradeAction,
};
pub use market::{MarketInfo, MarketsInfoData};
pub use primitives::{TimeSec, TokenAddress, TxRef};
pub use token::{Token, TokenPrice};
