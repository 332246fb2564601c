//! Token metadata and chain price pairs.

use crate::domain::numeric::serde_u256_dec;
use crate::domain::primitives::TokenAddress;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Static metadata for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// On-chain token address.
    pub address: TokenAddress,
    /// Display symbol (e.g. "AVAX", "USDC").
    pub symbol: String,
    /// ERC-20 decimals of the token amount scale.
    pub decimals: u32,
    /// Display multiplier for very-small-denomination tokens
    /// (e.g. 1000 renders the price per thousand tokens).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_multiplier: Option<u32>,
}

impl Token {
    /// Decimals of scale carried by this token's raw chain price.
    ///
    /// Saturates at zero for tokens declaring more than 30 decimals, so
    /// malformed metadata cannot panic the formatter.
    pub fn price_decimals(&self) -> u32 {
        crate::domain::numeric::USD_DECIMALS.saturating_sub(self.decimals)
    }
}

/// Min/max oracle price pair for a token at some block.
///
/// Raw prices carry `30 - token_decimals` decimals so that
/// `amount * price` is USD-scaled (see `domain::numeric`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPrice {
    #[serde(with = "serde_u256_dec")]
    pub min: U256,
    #[serde(with = "serde_u256_dec")]
    pub max: U256,
}

impl TokenPrice {
    pub fn new(min: U256, max: U256) -> Self {
        TokenPrice { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::numeric::expand_decimals;

    fn avax() -> Token {
        Token {
            address: TokenAddress::new("0xavax"),
            symbol: "AVAX".to_string(),
            decimals: 18,
            visual_multiplier: None,
        }
    }

    #[test]
    fn test_price_decimals_complements_token_decimals() {
        assert_eq!(avax().price_decimals(), 12);
    }

    #[test]
    fn test_price_decimals_saturates_for_oversized_decimals() {
        let mut weird = avax();
        weird.decimals = 36;
        assert_eq!(weird.price_decimals(), 0);
    }

    #[test]
    fn test_token_price_serde_round_trip() {
        let price = TokenPrice::new(expand_decimals(9, 12), expand_decimals(10, 12));
        let json = serde_json::to_string(&price).unwrap();
        let back: TokenPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(price, back);
    }
}
