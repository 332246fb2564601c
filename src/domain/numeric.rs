//! Fixed-point arithmetic on chain-scaled integers.
//!
//! All USD quantities in this crate are 256-bit integers carrying 30 decimals
//! of scale. Token amounts carry the token's own decimals, and token prices
//! carry `30 - token_decimals` decimals so that `amount * price` is already
//! USD-scaled. No floating point is involved until final display formatting.

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Deserializer, Serializer};

/// Decimals of scale carried by every USD quantity.
pub const USD_DECIMALS: u32 = 30;

/// 10^n as a U256.
pub fn exp10(n: u32) -> U256 {
    U256::from(10u8).pow(U256::from(n))
}

/// The 1.0 unit of the 30-decimal USD scale (10^30).
pub fn precision() -> U256 {
    exp10(USD_DECIMALS)
}

/// `n * 10^decimals`, for building scaled constants.
pub fn expand_decimals(n: u64, decimals: u32) -> U256 {
    U256::from(n) * exp10(decimals)
}

/// `value * numerator / denominator`, saturating on overflow.
///
/// A zero denominator yields zero rather than panicking; the formatting
/// engine must stay total over malformed chain data.
pub fn mul_div(value: U256, numerator: U256, denominator: U256) -> U256 {
    if denominator.is_zero() {
        return U256::ZERO;
    }
    match value.checked_mul(numerator) {
        Some(product) => product / denominator,
        None => U256::MAX / denominator,
    }
}

/// Apply a 30-decimal factor to a value: `value * factor / 10^30`.
pub fn apply_factor(value: U256, factor: U256) -> U256 {
    mul_div(value, factor, precision())
}

/// Convert a token amount to USD using a raw chain price.
///
/// Relies on the price-scale convention above: the raw product is USD-scaled.
pub fn convert_token_to_usd(amount: U256, price: U256) -> U256 {
    amount.checked_mul(price).unwrap_or(U256::MAX)
}

/// Widen an unsigned quantity into the signed domain, saturating at I256::MAX.
pub fn signed(value: U256) -> I256 {
    I256::try_from(value).unwrap_or(I256::MAX)
}

/// Magnitude of a signed quantity as U256.
pub fn unsigned_abs(value: I256) -> U256 {
    value.unsigned_abs()
}

/// Clamp a signed quantity at zero from below.
pub fn clamp_min_zero(value: I256) -> I256 {
    if value.is_negative() {
        I256::ZERO
    } else {
        value
    }
}

/// Serde for U256 as a decimal string (chain quantities exceed JSON numbers).
pub mod serde_u256_dec {
    use super::*;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<U256>().map_err(serde::de::Error::custom)
    }
}

/// Serde for I256 as a decimal string.
pub mod serde_i256_dec {
    use super::*;

    pub fn serialize<S: Serializer>(value: &I256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<I256, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<I256>().map_err(serde::de::Error::custom)
    }
}

/// Serde for Option<U256> as an optional decimal string.
pub mod serde_opt_u256_dec {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => s
                .parse::<U256>()
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Serde for Option<I256> as an optional decimal string.
pub mod serde_opt_i256_dec {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<I256>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<I256>, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => s
                .parse::<I256>()
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
