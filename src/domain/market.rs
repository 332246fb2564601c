//! Market metadata used to resolve names, pools and swap hops.

use crate::domain::numeric::serde_u256_dec;
use crate::domain::primitives::TokenAddress;
use crate::domain::token::Token;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static description of a single market (one index, one long/short pool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    /// Address of the market token identifying this market on-chain.
    pub market_token_address: TokenAddress,
    /// Index display name, e.g. "AVAX/USD".
    pub index_name: String,
    /// Pool display name, e.g. "AVAX-USDC".
    pub pool_name: String,
    /// Token whose price the market tracks.
    pub index_token: Token,
    /// Long-side collateral token of the pool.
    pub long_token: Token,
    /// Short-side collateral token of the pool.
    pub short_token: Token,
    /// Protocol min-collateral factor, 30-decimal scale.
    /// Max leverage is `10^30 / min_collateral_factor`.
    #[serde(with = "serde_u256_dec")]
    pub min_collateral_factor: U256,
}

impl MarketInfo {
    /// Given the token held entering this pool, return the token held after
    /// swapping through it, or None if the held token is not in the pool.
    pub fn opposite_token(&self, held: &TokenAddress) -> Option<&Token> {
        if &self.long_token.address == held {
            Some(&self.short_token)
        } else if &self.short_token.address == held {
            Some(&self.long_token)
        } else {
            None
        }
    }
}

/// Lookup table of markets keyed by market token address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketsInfoData {
    markets: HashMap<String, MarketInfo>,
}

impl MarketsInfoData {
    pub fn new(markets: impl IntoIterator<Item = MarketInfo>) -> Self {
        MarketsInfoData {
            markets: markets
                .into_iter()
                .map(|m| (m.market_token_address.as_str().to_string(), m))
                .collect(),
        }
    }

    pub fn get(&self, address: &TokenAddress) -> Option<&MarketInfo> {
        self.markets.get(address.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
