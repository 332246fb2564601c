//! Display formatting for chain-scaled integers.
//!
//! All functions take fixed-point integers (see `domain::numeric`) and only
//! here do values become strings: thousands separators, round-half-up at the
//! display precision, and a display-decimal heuristic driven by price
//! magnitude. No floating point anywhere.

use crate::domain::numeric::{exp10, USD_DECIMALS};
use crate::domain::token::Token;
use alloy_primitives::{I256, U256};

/// Default display decimals for USD figures.
pub const USD_DISPLAY_DECIMALS: u32 = 2;

/// Default display decimals for token amounts.
pub const TOKEN_DISPLAY_DECIMALS: u32 = 4;

/// Insert `,` separators into an unsigned integer digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an unsigned scaled integer with the given display decimals.
///
/// Rounds half-up at the display precision and groups the integer part.
pub fn format_amount(value: U256, decimals: u32, display_decimals: u32) -> String {
    let rounded = if display_decimals < decimals {
        let divisor = exp10(decimals - display_decimals);
        (value + divisor / U256::from(2u8)) / divisor
    } else {
        value * exp10(display_decimals - decimals)
    };

    let digits = rounded.to_string();
    let width = (display_decimals as usize) + 1;
    let padded = if digits.len() < width {
        format!("{}{}", "0".repeat(width - digits.len()), digits)
    } else {
        digits
    };

    let split = padded.len() - display_decimals as usize;
    let int_part = group_thousands(&padded[..split]);
    if display_decimals == 0 {
        int_part
    } else {
        format!("{}.{}", int_part, &padded[split..])
    }
}

/// Format a signed scaled integer; negative values get a leading `-`.
pub fn format_amount_signed(value: I256, decimals: u32, display_decimals: u32) -> String {
    let magnitude = format_amount(value.unsigned_abs(), decimals, display_decimals);
    if value.is_negative() {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Format an unsigned 30-decimal USD quantity, e.g. `$1,054.88`.
pub fn format_usd(value: U256) -> String {
    format!("${}", format_amount(value, USD_DECIMALS, USD_DISPLAY_DECIMALS))
}

/// Format a signed 30-decimal USD quantity, e.g. `-$7.50`.
pub fn format_usd_signed(value: I256) -> String {
    let magnitude = format_usd(value.unsigned_abs());
    if value.is_negative() {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Format a signed USD delta with an explicit `+`/`-` prefix.
///
/// The direction is supplied by the caller (increase vs decrease), not
/// derived from the magnitude.
pub fn format_delta_usd(magnitude: U256, positive: bool) -> String {
    let sign = if positive { "+" } else { "-" };
    format!("{}{}", sign, format_usd(magnitude))
}

/// Format a token amount with its symbol, e.g. `1.5000 AVAX`.
pub fn format_token_amount(amount: U256, token: &Token) -> String {
    format!(
        "{} {}",
        format_amount(amount, token.decimals, TOKEN_DISPLAY_DECIMALS),
        token.symbol
    )
}

/// Format a token delta with an explicit sign, e.g. `+10.0000 USDC`.
pub fn format_delta_token_amount(amount: U256, token: &Token, positive: bool) -> String {
    let sign = if positive { "+" } else { "-" };
    format!("{}{}", sign, format_token_amount(amount, token))
}

/// Display decimals for a price, derived from its whole-unit magnitude.
///
/// Large prices read fine at cents precision; small-denomination prices need
/// more fractional digits to be distinguishable.
pub fn price_display_decimals(price: U256, price_decimals: u32) -> u32 {
    let unit = exp10(price_decimals);
    if price >= unit * U256::from(1000u32) {
        2
    } else if price >= unit {
        4
    } else if price * U256::from(10_000u32) >= unit {
        6
    } else {
        8
    }
}

/// Format a raw chain price of the given token as USD.
///
/// Applies the token's visual multiplier when present, so tiny-denomination
/// tokens render a per-N price instead of a dust figure.
pub fn format_usd_price(price: U256, token: &Token) -> String {
    let multiplier = U256::from(token.visual_multiplier.unwrap_or(1));
    let shown = price.checked_mul(multiplier).unwrap_or(U256::MAX);
    let decimals = token.price_decimals();
    let display = price_display_decimals(shown, decimals);
    format!("${}", format_amount(shown, decimals, display))
}

/// Format a 30-decimal exchange ratio as `N LARGEST / SMALLEST`.
pub fn format_ratio(ratio: U256, largest: &Token, smallest: &Token) -> String {
    let display = price_display_decimals(ratio, USD_DECIMALS);
    format!(
        "{} {} / {}",
        format_amount(ratio, USD_DECIMALS, display),
        largest.symbol,
        smallest.symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::numeric::expand_decimals;
    use crate::domain::primitives::TokenAddress;

    fn token(symbol: &str, decimals: u32) -> Token {
        Token {
            address: TokenAddress::new(format!("0x{}", symbol.to_lowercase())),
            symbol: symbol.to_string(),
            decimals,
            visual_multiplier: None,
        }
    }

    #[test]
    fn test_format_amount_grouping() {
        let v = expand_decimals(1_234_567, 30);
        assert_eq!(format_amount(v, 30, 2), "1,234,567.00");
    }

    #[test]
    fn test_format_amount_small_value_pads_zero() {
        // 0.05 at 30 decimals
        let v = expand_decimals(5, 28);
        assert_eq!(format_amount(v, 30, 2), "0.05");
    }

    #[test]
    fn test_format_amount_rounds_half_up() {
        // 1.005 displayed at 2 decimals -> 1.01
        let v = expand_decimals(1005, 27);
        assert_eq!(format_amount(v, 30, 2), "1.01");
    }

    #[test]
    fn test_format_usd_golden() {
        // 1054.88 at 30 decimals
        let v = expand_decimals(105_488, 28);
        assert_eq!(format_usd(v), "$1,054.88");
    }

    #[test]
    fn test_format_usd_signed_negative() {
        let v = -crate::domain::numeric::signed(expand_decimals(750, 28));
        assert_eq!(format_usd_signed(v), "-$7.50");
    }

    #[test]
    fn test_format_delta_usd() {
        let v = expand_decimals(105_488, 28);
        assert_eq!(format_delta_usd(v, true), "+$1,054.88");
        assert_eq!(format_delta_usd(v, false), "-$1,054.88");
    }

    #[test]
    fn test_format_token_amount() {
        let avax = token("AVAX", 18);
        let amount = expand_decimals(15, 17); // 1.5
        assert_eq!(format_token_amount(amount, &avax), "1.5000 AVAX");
    }

    #[test]
    fn test_price_display_decimals_magnitudes() {
        let scale = 12;
        assert_eq!(price_display_decimals(expand_decimals(50_000, 12), scale), 2);
        assert_eq!(price_display_decimals(expand_decimals(9, 12), scale), 4);
        assert_eq!(price_display_decimals(expand_decimals(5, 10), scale), 6);
        assert_eq!(price_display_decimals(expand_decimals(5, 6), scale), 8);
    }

    #[test]
    fn test_format_usd_price_visual_multiplier() {
        let mut pepe = token("PEPE", 18);
        pepe.visual_multiplier = Some(1000);
        // price 0.00001 -> shown per-1000 as 0.01
        let price = expand_decimals(1, 7); // 1e7 at scale 12 = 0.00001
        let text = format_usd_price(price, &pepe);
        assert_eq!(text, "$0.010000");
    }

    #[test]
    fn test_format_ratio() {
        let usdc = token("USDC", 6);
        let avax = token("AVAX", 18);
        let ratio = expand_decimals(25, 30);
        assert_eq!(format_ratio(ratio, &usdc, &avax), "25.0000 USDC / AVAX");
    }
}
