//! Best-effort decoding of on-chain revert payloads.
//!
//! Cancelled and frozen orders carry the ABI-encoded custom error that made
//! execution fail. Decoding is a consumed capability behind `RevertDecoder`;
//! the default implementation recognizes the exchange's custom errors by
//! selector. Failure to decode is never an error condition for formatting —
//! the caller simply omits the diagnostic line.

use alloy_primitives::U256;
use alloy_sol_types::{sol, SolError};

sol! {
    error OrderNotFulfillableAtAcceptablePrice(uint256 price, uint256 acceptablePrice);
    error InsufficientSwapOutputAmount(uint256 outputAmount, uint256 minOutputAmount);
    error InsufficientOutputAmount(uint256 outputAmount, uint256 minOutputAmount);
    error NegativeExecutionPrice(int256 executionPrice, uint256 price, uint256 positionSizeInUsd, int256 priceImpactUsd, uint256 sizeDeltaUsd);
    error InsufficientReserve(uint256 reservedUsd, uint256 maxReservedUsd);
    error UsdDeltaExceedsPoolValue(int256 usdDelta, uint256 poolUsd);
}

/// One decoded argument, rendered as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertArg {
    pub name: String,
    pub value: String,
}

/// A decoded custom error: its name plus its arguments in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRevert {
    pub name: String,
    pub args: Vec<RevertArg>,
    execution_price: Option<U256>,
    output_amount: Option<U256>,
}

impl DecodedRevert {
    fn new(name: &str, args: Vec<RevertArg>) -> Self {
        DecodedRevert {
            name: name.to_string(),
            args,
            execution_price: None,
            output_amount: None,
        }
    }

    fn with_execution_price(mut self, price: U256) -> Self {
        self.execution_price = Some(price);
        self
    }

    fn with_output_amount(mut self, amount: U256) -> Self {
        self.output_amount = Some(amount);
        self
    }

    /// Execution price carried by the error, if it has one.
    pub fn execution_price(&self) -> Option<U256> {
        self.execution_price
    }

    /// Actual output amount carried by the error, if it has one.
    pub fn output_amount(&self) -> Option<U256> {
        self.output_amount
    }
}

/// Capability consumed by the formatters to decode revert reason bytes.
pub trait RevertDecoder: Send + Sync {
    /// Decode an ABI-encoded revert payload; None when unrecognized.
    fn decode(&self, bytes: &[u8]) -> Option<DecodedRevert>;
}

/// Default decoder for the exchange's custom errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeErrorDecoder;

fn arg(name: &str, value: impl ToString) -> RevertArg {
    RevertArg {
        name: name.to_string(),
        value: value.to_string(),
    }
}

impl RevertDecoder for ExchangeErrorDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<DecodedRevert> {
        if bytes.len() < 4 {
            return None;
        }
        let (selector, data) = bytes.split_at(4);

        if selector == OrderNotFulfillableAtAcceptablePrice::SELECTOR {
            let e = OrderNotFulfillableAtAcceptablePrice::abi_decode_raw(data, true).ok()?;
            return Some(
                DecodedRevert::new(
                    "OrderNotFulfillableAtAcceptablePrice",
                    vec![arg("price", e.price), arg("acceptablePrice", e.acceptablePrice)],
                )
                .with_execution_price(e.price),
            );
        }
        if selector == InsufficientSwapOutputAmount::SELECTOR {
            let e = InsufficientSwapOutputAmount::abi_decode_raw(data, true).ok()?;
            return Some(
                DecodedRevert::new(
                    "InsufficientSwapOutputAmount",
                    vec![
                        arg("outputAmount", e.outputAmount),
                        arg("minOutputAmount", e.minOutputAmount),
                    ],
                )
                .with_output_amount(e.outputAmount),
            );
        }
        if selector == InsufficientOutputAmount::SELECTOR {
            let e = InsufficientOutputAmount::abi_decode_raw(data, true).ok()?;
            return Some(
                DecodedRevert::new(
                    "InsufficientOutputAmount",
                    vec![
                        arg("outputAmount", e.outputAmount),
                        arg("minOutputAmount", e.minOutputAmount),
                    ],
                )
                .with_output_amount(e.outputAmount),
            );
        }
        if selector == NegativeExecutionPrice::SELECTOR {
            let e = NegativeExecutionPrice::abi_decode_raw(data, true).ok()?;
            return Some(DecodedRevert::new(
                "NegativeExecutionPrice",
                vec![
                    arg("executionPrice", e.executionPrice),
                    arg("price", e.price),
                    arg("positionSizeInUsd", e.positionSizeInUsd),
                    arg("priceImpactUsd", e.priceImpactUsd),
                    arg("sizeDeltaUsd", e.sizeDeltaUsd),
                ],
            ));
        }
        if selector == InsufficientReserve::SELECTOR {
            let e = InsufficientReserve::abi_decode_raw(data, true).ok()?;
            return Some(DecodedRevert::new(
                "InsufficientReserve",
                vec![
                    arg("reservedUsd", e.reservedUsd),
                    arg("maxReservedUsd", e.maxReservedUsd),
                ],
            ));
        }
        if selector == UsdDeltaExceedsPoolValue::SELECTOR {
            let e = UsdDeltaExceedsPoolValue::abi_decode_raw(data, true).ok()?;
            return Some(DecodedRevert::new(
                "UsdDeltaExceedsPoolValue",
                vec![arg("usdDelta", e.usdDelta), arg("poolUsd", e.poolUsd)],
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolError;

    #[test]
    fn test_decode_acceptable_price_error() {
        let payload = OrderNotFulfillableAtAcceptablePrice {
            price: U256::from(1000u32),
            acceptablePrice: U256::from(990u32),
        }
        .abi_encode();

        let decoded = ExchangeErrorDecoder.decode(&payload).unwrap();
        assert_eq!(decoded.name, "OrderNotFulfillableAtAcceptablePrice");
        assert_eq!(decoded.execution_price(), Some(U256::from(1000u32)));
        assert_eq!(decoded.args[1].value, "990");
    }

    #[test]
    fn test_decode_swap_output_error() {
        let payload = InsufficientSwapOutputAmount {
            outputAmount: U256::from(42u32),
            minOutputAmount: U256::from(50u32),
        }
        .abi_encode();

        let decoded = ExchangeErrorDecoder.decode(&payload).unwrap();
        assert_eq!(decoded.name, "InsufficientSwapOutputAmount");
        assert_eq!(decoded.output_amount(), Some(U256::from(42u32)));
    }

    #[test]
    fn test_unknown_selector_is_none() {
        assert!(ExchangeErrorDecoder.decode(&[0xde, 0xad, 0xbe, 0xef, 0, 0]).is_none());
    }

    #[test]
    fn test_short_payload_is_none() {
        assert!(ExchangeErrorDecoder.decode(&[0x01]).is_none());
        assert!(ExchangeErrorDecoder.decode(&[]).is_none());
    }

    #[test]
    fn test_truncated_arguments_is_none() {
        let mut payload = InsufficientSwapOutputAmount {
            outputAmount: U256::from(42u32),
            minOutputAmount: U256::from(50u32),
        }
        .abi_encode();
        payload.truncate(20);
        assert!(ExchangeErrorDecoder.decode(&payload).is_none());
    }
}
