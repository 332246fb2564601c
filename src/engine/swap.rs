//! Swap-order decision table.
//!
//! Resolves the human-readable hop path from the swap route, computes
//! execution and acceptable exchange ratios from scaled amounts, and picks
//! the inequality sign from the ratio's larger-magnitude token. Total over
//! its input; unknown combinations degrade to the common fields.

use crate::decode::RevertDecoder;
use crate::domain::numeric::{exp10, mul_div, precision, USD_DECIMALS};
use crate::domain::{MarketsInfoData, OrderEvent, OrderType, SwapTradeAction, Token};
use crate::engine::title::{resolve_title, TitleCategory};
use crate::engine::{MarketName, RowDetails};
use crate::format::numbers::{format_ratio, format_token_amount};
use crate::format::tooltip::{build_lines, Line, LineState};
use crate::format::{format_timestamp, format_timestamp_iso};
use crate::i18n::Localizer;
use alloy_primitives::U256;

/// Exchange ratio between two tokens, 30-decimal scale.
///
/// The ratio is `larger / smaller` of the decimal-adjusted amounts, so it is
/// always >= 1 and reads as "N LARGEST per SMALLEST".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensRatio {
    pub ratio: U256,
    /// True when the larger-magnitude side is the output token.
    pub largest_is_out: bool,
}

/// Compute the exchange ratio for amounts of the in/out tokens.
pub fn tokens_ratio_by_amounts(
    token_in: &Token,
    token_out: &Token,
    amount_in: U256,
    amount_out: U256,
) -> TokensRatio {
    let adjusted_in = amount_in
        .checked_mul(exp10(USD_DECIMALS.saturating_sub(token_in.decimals)))
        .unwrap_or(U256::MAX);
    let adjusted_out = amount_out
        .checked_mul(exp10(USD_DECIMALS.saturating_sub(token_out.decimals)))
        .unwrap_or(U256::MAX);

    if adjusted_in > adjusted_out {
        TokensRatio {
            ratio: mul_div(adjusted_in, precision(), adjusted_out),
            largest_is_out: false,
        }
    } else {
        TokensRatio {
            ratio: mul_div(adjusted_out, precision(), adjusted_in),
            largest_is_out: true,
        }
    }
}

/// Inequality prefix for a bound ratio.
///
/// Table-driven per observed behavior: `"<  "` exactly when the ratio's
/// larger-magnitude token is the output token, `">  "` otherwise.
fn ratio_inequality(ratio: &TokensRatio) -> &'static str {
    if ratio.largest_is_out {
        "<"
    } else {
        ">"
    }
}

fn ratio_text(ratio: &TokensRatio, token_in: &Token, token_out: &Token) -> String {
    let (largest, smallest) = if ratio.largest_is_out {
        (token_out, token_in)
    } else {
        (token_in, token_out)
    };
    format_ratio(ratio.ratio, largest, smallest)
}

/// Formats swap-order trade actions into row records.
pub struct SwapFormatter<'a> {
    localizer: &'a dyn Localizer,
    decoder: &'a dyn RevertDecoder,
}

impl<'a> SwapFormatter<'a> {
    pub fn new(localizer: &'a dyn Localizer, decoder: &'a dyn RevertDecoder) -> Self {
        SwapFormatter { localizer, decoder }
    }

    fn t(&self, text: &str) -> String {
        self.localizer.translate(text)
    }

    /// Format one swap action. `markets` may be absent; path and market
    /// fields then render as an explicit "..." placeholder.
    pub fn format(
        &self,
        action: &SwapTradeAction,
        markets: Option<&MarketsInfoData>,
        relative_timestamp: bool,
    ) -> RowDetails {
        let token_in = &action.initial_collateral_token;
        let token_out = &action.target_collateral_token;

        let acceptable_ratio = tokens_ratio_by_amounts(
            token_in,
            token_out,
            action.initial_collateral_delta_amount,
            action.min_output_amount,
        );
        let execution_ratio = action.execution_amount_out.map(|amount_out| {
            tokens_ratio_by_amounts(
                token_in,
                token_out,
                action.initial_collateral_delta_amount,
                amount_out,
            )
        });

        let mut row = self.base_row(action, markets, relative_timestamp);
        let acceptable_text = ratio_text(&acceptable_ratio, token_in, token_out);
        let bounded_acceptable = format!(
            "{}  {}",
            ratio_inequality(&acceptable_ratio),
            acceptable_text
        );
        row.acceptable_price = Some(bounded_acceptable.clone());

        use OrderEvent::*;
        use OrderType::*;
        match (action.order_type, action.event) {
            (MarketSwap | LimitSwap, OrderCreated) | (LimitSwap, OrderUpdated) => {
                row.price = bounded_acceptable;
                row.price_comment = Some(build_lines(vec![Some(Line::text(self.t(&format!(
                    "You will receive at least {} if this order is executed.",
                    format_token_amount(action.min_output_amount, token_out)
                ))))]));
            }
            (MarketSwap | LimitSwap, OrderCancelled) => {
                row.price = bounded_acceptable;
                row.price_comment = Some(build_lines(vec![Some(Line::text(self.t(&format!(
                    "You would have received at least {} if this order had been executed.",
                    format_token_amount(action.min_output_amount, token_out)
                ))))]));
            }
            (MarketSwap | LimitSwap, OrderExecuted) => {
                if let Some(execution_ratio) = &execution_ratio {
                    row.price = ratio_text(execution_ratio, token_in, token_out);
                    row.execution_price = Some(row.price.clone());
                }
                row.price_comment = Some(build_lines(vec![Some(Line::key_value(
                    self.t("Order Acceptable Price"),
                    bounded_acceptable,
                ))]));
            }
            (LimitSwap, OrderFrozen) => {
                self.render_frozen(action, &bounded_acceptable, &mut row);
            }
            (order_type, event) => {
                tracing::warn!(
                    ?order_type,
                    %event,
                    tx = %action.transaction.hash,
                    "unhandled swap order/event combination"
                );
            }
        }

        row
    }

    fn base_row(
        &self,
        action: &SwapTradeAction,
        markets: Option<&MarketsInfoData>,
        relative_timestamp: bool,
    ) -> RowDetails {
        let (market, hop_names) = self.resolve_path(action, markets);
        let amount_out = action
            .execution_amount_out
            .unwrap_or(action.min_output_amount);

        RowDetails {
            action: resolve_title(
                TitleCategory::from_order(action.order_type, action.is_twap),
                action.event,
                self.localizer,
            ),
            full_market: hop_names.is_some().then(|| market.clone()),
            full_market_names: hop_names,
            market,
            timestamp: format_timestamp(action.transaction.timestamp, relative_timestamp),
            timestamp_iso: format_timestamp_iso(action.transaction.timestamp),
            size: format!(
                "{} {} {}",
                format_token_amount(
                    action.initial_collateral_delta_amount,
                    &action.initial_collateral_token
                ),
                self.t("to"),
                format_token_amount(amount_out, &action.target_collateral_token)
            ),
            ..RowDetails::default()
        }
    }

    /// Walk the swap path: at each pool, the held token swaps for whichever
    /// of the pool's two tokens it is not. Unknown markets or a missing
    /// markets table render the explicit "..." placeholder.
    fn resolve_path(
        &self,
        action: &SwapTradeAction,
        markets: Option<&MarketsInfoData>,
    ) -> (String, Option<Vec<MarketName>>) {
        const PLACEHOLDER: &str = "...";

        let Some(markets) = markets else {
            return (PLACEHOLDER.to_string(), None);
        };

        let mut held = action.initial_collateral_token.clone();
        let mut symbols = vec![held.symbol.clone()];
        let mut hops = Vec::with_capacity(action.swap_path.len());

        for market_address in &action.swap_path {
            let Some(market) = markets.get(market_address) else {
                return (PLACEHOLDER.to_string(), None);
            };
            let Some(next) = market.opposite_token(&held.address) else {
                return (PLACEHOLDER.to_string(), None);
            };
            hops.push(MarketName {
                index_name: market.index_name.clone(),
                pool_name: market.pool_name.clone(),
            });
            held = next.clone();
            symbols.push(held.symbol.clone());
        }

        (symbols.join(" → "), Some(hops))
    }

    /// Frozen limit swap: the revert payload carries the actual output
    /// amount; the primary price is the realized ratio recomputed from it,
    /// not the guaranteed minimum.
    fn render_frozen(
        &self,
        action: &SwapTradeAction,
        bounded_acceptable: &str,
        row: &mut RowDetails,
    ) {
        row.is_action_error = true;

        let decoded = action
            .reason_bytes
            .as_deref()
            .and_then(|bytes| self.decoder.decode(bytes));

        let token_in = &action.initial_collateral_token;
        let token_out = &action.target_collateral_token;

        let error_line = decoded.as_ref().map(|decoded| {
            Line::span(
                self.t(&format!("Order execution failed: {}.", decoded.name)),
                Some(LineState::Error),
            )
        });

        row.price = match decoded.as_ref().and_then(|d| d.output_amount()) {
            Some(actual_out) => {
                let realized = tokens_ratio_by_amounts(
                    token_in,
                    token_out,
                    action.initial_collateral_delta_amount,
                    actual_out,
                );
                ratio_text(&realized, token_in, token_out)
            }
            None => bounded_acceptable.to_string(),
        };

        row.price_comment = Some(build_lines(vec![
            error_line.clone(),
            error_line.is_some().then_some(Line::Blank),
            Some(Line::key_value(
                self.t("Order Acceptable Price"),
                bounded_acceptable.to_string(),
            )),
        ]));
    }
}
