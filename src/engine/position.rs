//! Position-order decision table.
//!
//! One terminal render per (order type, lifecycle event) combination. The
//! inequality directions and the mark-price side are pure table lookups;
//! the liquidation branch computes the full fee waterfall. The formatter is
//! total: unknown combinations degrade to the common fields and are logged.

use crate::decode::RevertDecoder;
use crate::domain::numeric::{
    apply_factor, clamp_min_zero, convert_token_to_usd, precision, signed, unsigned_abs,
};
use crate::domain::{OrderEvent, OrderType, PositionTradeAction};
use crate::engine::title::{resolve_title, TitleCategory};
use crate::engine::{MarketName, RowDetails};
use crate::format::numbers::{
    format_delta_token_amount, format_delta_usd, format_usd, format_usd_price, format_usd_signed,
};
use crate::format::tooltip::{build_lines, classify_by_sign, Line, LineState};
use crate::format::{format_timestamp, format_timestamp_iso};
use crate::i18n::Localizer;
use alloy_primitives::{I256, U256};

/// Acceptable-price inequality direction.
///
/// Exhaustive over the four (increase, long) cases: an increase improves
/// with a lower fill for longs, a decrease with a higher one.
fn acceptable_price_inequality(is_increase: bool, is_long: bool) -> &'static str {
    match (is_increase, is_long) {
        (true, true) => "<",
        (true, false) => ">",
        (false, true) => ">",
        (false, false) => "<",
    }
}

fn invert(inequality: &'static str) -> &'static str {
    if inequality == "<" {
        ">"
    } else {
        "<"
    }
}

/// Trigger-price inequality direction, additionally keyed by sub-type:
/// stop orders trigger on the far side of where limit orders do.
fn trigger_price_inequality(order_type: OrderType, is_long: bool) -> &'static str {
    match order_type {
        OrderType::LimitIncrease => acceptable_price_inequality(true, is_long),
        OrderType::StopIncrease => invert(acceptable_price_inequality(true, is_long)),
        OrderType::LimitDecrease => acceptable_price_inequality(false, is_long),
        OrderType::StopLossDecrease => invert(acceptable_price_inequality(false, is_long)),
        _ => acceptable_price_inequality(order_type.is_increase(), is_long),
    }
}

/// Common display fields shared by every branch.
struct CommonFields {
    market_price_text: String,
    acceptable_ineq: &'static str,
    trigger_ineq: &'static str,
    acceptable_price_text: Option<String>,
    trigger_price_text: Option<String>,
    execution_price_text: Option<String>,
    price_impact_text: Option<String>,
}

/// Formats position-order trade actions into row records.
pub struct PositionFormatter<'a> {
    localizer: &'a dyn Localizer,
    decoder: &'a dyn RevertDecoder,
}

impl<'a> PositionFormatter<'a> {
    pub fn new(localizer: &'a dyn Localizer, decoder: &'a dyn RevertDecoder) -> Self {
        PositionFormatter { localizer, decoder }
    }

    fn t(&self, text: &str) -> String {
        self.localizer.translate(text)
    }

    /// Format one position action. Total over its input: absent optional
    /// numerics propagate as absent output fields, never as a panic.
    pub fn format(
        &self,
        action: &PositionTradeAction,
        min_collateral_usd: U256,
        relative_timestamp: bool,
    ) -> RowDetails {
        let common = self.common_fields(action);
        let mut row = self.base_row(action, &common, relative_timestamp);

        use OrderEvent::*;
        use OrderType::*;
        match (action.order_type, action.event) {
            (MarketIncrease, OrderCreated) | (MarketDecrease, OrderCreated) => {
                self.render_market_request(action, &common, &mut row);
            }
            (MarketIncrease, OrderExecuted) | (MarketDecrease, OrderExecuted) => {
                self.render_market_executed(action, &common, &mut row);
            }
            (MarketIncrease, OrderCancelled) | (MarketDecrease, OrderCancelled) => {
                self.render_market_cancelled(action, &common, &mut row);
            }
            (
                LimitIncrease | StopIncrease | LimitDecrease | StopLossDecrease,
                OrderCreated | OrderUpdated | OrderCancelled,
            ) => {
                self.render_pending_order(action, &common, &mut row);
            }
            (LimitIncrease | StopIncrease | LimitDecrease | StopLossDecrease, OrderExecuted) => {
                self.render_order_executed(action, &common, &mut row, false);
            }
            (LimitIncrease | StopIncrease | LimitDecrease | StopLossDecrease, OrderFrozen) => {
                self.render_order_executed(action, &common, &mut row, true);
            }
            (Liquidation, OrderExecuted) => {
                self.render_liquidation(action, &common, min_collateral_usd, &mut row);
            }
            (order_type, event) => {
                // Silent degradation: common fields only. Observable in logs.
                tracing::warn!(
                    ?order_type,
                    %event,
                    tx = %action.transaction.hash,
                    "unhandled position order/event combination"
                );
            }
        }

        row
    }

    fn common_fields(&self, action: &PositionTradeAction) -> CommonFields {
        let is_increase = action.order_type.is_increase();
        let index_token = &action.index_token;

        // Mark price side: longs pay the max on the way in, shorts on the
        // way out.
        let use_max = (is_increase && action.is_long) || (!is_increase && !action.is_long);
        let market_price = if use_max {
            action.index_token_price.max
        } else {
            action.index_token_price.min
        };

        CommonFields {
            market_price_text: format_usd_price(market_price, index_token),
            acceptable_ineq: acceptable_price_inequality(is_increase, action.is_long),
            trigger_ineq: trigger_price_inequality(action.order_type, action.is_long),
            acceptable_price_text: action
                .acceptable_price
                .map(|p| format_usd_price(p, index_token)),
            trigger_price_text: action
                .trigger_price
                .map(|p| format_usd_price(p, index_token)),
            execution_price_text: action
                .execution_price
                .map(|p| format_usd_price(p, index_token)),
            price_impact_text: action.price_impact_usd.map(format_usd_signed),
        }
    }

    fn base_row(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        relative_timestamp: bool,
    ) -> RowDetails {
        let direction = if action.is_long {
            self.t("Long")
        } else {
            self.t("Short")
        };
        let market_info = &action.market_info;

        let size = if action.size_delta_usd.is_zero() {
            format_delta_token_amount(
                action.initial_collateral_delta_amount,
                &action.initial_collateral_token,
                action.order_type.is_increase(),
            )
        } else {
            format_delta_usd(action.size_delta_usd, action.order_type.is_increase())
        };

        RowDetails {
            action: resolve_title(self.title_category(action), action.event, self.localizer),
            market: format!("{} {}", direction, market_info.index_name),
            timestamp: format_timestamp(action.transaction.timestamp, relative_timestamp),
            timestamp_iso: format_timestamp_iso(action.transaction.timestamp),
            size,
            price: common.market_price_text.clone(),
            execution_price: common.execution_price_text.clone(),
            acceptable_price: common.acceptable_price_text.clone(),
            trigger_price: common.trigger_price_text.clone(),
            price_impact: common.price_impact_text.clone(),
            pnl: action.pnl_usd.map(format_usd_signed),
            pnl_state: classify_by_sign(action.pnl_usd),
            full_market: Some(format!(
                "{} [{}]",
                market_info.index_name, market_info.pool_name
            )),
            full_market_names: Some(vec![MarketName {
                index_name: market_info.index_name.clone(),
                pool_name: market_info.pool_name.clone(),
            }]),
            ..RowDetails::default()
        }
    }

    /// Deposit/Withdraw relabeling for zero-size market orders.
    fn title_category(&self, action: &PositionTradeAction) -> TitleCategory {
        if action.size_delta_usd.is_zero() {
            match action.order_type {
                OrderType::MarketIncrease => return TitleCategory::Deposit,
                OrderType::MarketDecrease => return TitleCategory::Withdraw,
                _ => {}
            }
        }
        TitleCategory::from_order(action.order_type, action.is_twap)
    }

    fn acceptable_price_row(&self, common: &CommonFields) -> Option<Line> {
        common.acceptable_price_text.as_ref().map(|text| {
            Line::key_value(
                self.t("Order Acceptable Price"),
                format!("{}  {}", common.acceptable_ineq, text),
            )
        })
    }

    fn render_market_request(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        row: &mut RowDetails,
    ) {
        // A market request has no fill yet: the bound shown is the
        // acceptable price.
        if let Some(text) = &common.acceptable_price_text {
            row.price = format!("{}  {}", common.acceptable_ineq, text);
            row.price_comment = Some(build_lines(vec![Some(Line::text(
                self.t("Acceptable price for the order."),
            ))]));
        } else {
            row.price = String::new();
        }
        if action.size_delta_usd.is_zero() {
            // Deposit/Withdraw request: collateral movement only.
            row.price = String::new();
            row.price_comment = None;
            row.pnl = None;
            row.pnl_state = None;
        }
    }

    fn render_market_executed(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        row: &mut RowDetails,
    ) {
        if action.size_delta_usd.is_zero() {
            // Deposit/Withdraw: collateral movement only, no price story.
            row.pnl = None;
            row.pnl_state = None;
            return;
        }
        row.price_comment = Some(build_lines(vec![
            Some(Line::text(self.t("Mark price for the order."))),
            Some(Line::Blank),
            self.acceptable_price_row(common),
            common.execution_price_text.as_ref().map(|text| {
                Line::key_value(self.t("Order Execution Price"), text.clone())
            }),
            common.price_impact_text.as_ref().map(|text| {
                Line::key_value_state(
                    self.t("Price Impact"),
                    text.clone(),
                    classify_by_sign(action.price_impact_usd),
                )
            }),
            Some(Line::Blank),
            Some(Line::text(self.t(
                "Order execution price takes into account price impact.",
            ))),
        ]));
    }

    fn render_market_cancelled(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        row: &mut RowDetails,
    ) {
        row.is_action_error = true;
        if action.size_delta_usd.is_zero() {
            row.pnl = None;
            row.pnl_state = None;
        }

        let decoded = action
            .reason_bytes
            .as_deref()
            .and_then(|bytes| self.decoder.decode(bytes));

        let Some(decoded) = decoded else {
            // Decode failure is not an error for the formatter; the tooltip
            // simply has no diagnostic line.
            return;
        };

        let decoded_price_row = decoded.execution_price().map(|price| {
            Line::key_value(
                self.t("Order Execution Price"),
                format_usd_price(price, &action.index_token),
            )
        });
        row.price_comment = Some(build_lines(vec![
            Some(Line::span(
                self.t(&format!("Order execution failed: {}.", decoded.name)),
                Some(LineState::Error),
            )),
            decoded_price_row.is_some().then_some(Line::Blank),
            decoded_price_row,
        ]));
    }

    /// Created/Updated/Cancelled for the conditional (limit/stop) orders:
    /// the trigger price is the primary price.
    fn render_pending_order(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        row: &mut RowDetails,
    ) {
        row.price = match &common.trigger_price_text {
            Some(text) => format!("{}  {}", common.trigger_ineq, text),
            None => String::new(),
        };

        let acceptable_row = match action.order_type {
            // Take-profit orders always carry a real acceptable price; the
            // row is rendered unconditionally.
            OrderType::LimitDecrease => Some(Line::key_value(
                self.t("Order Acceptable Price"),
                match &common.acceptable_price_text {
                    Some(text) => format!("{}  {}", common.acceptable_ineq, text),
                    None => self.t("N/A"),
                },
            )),
            // Everywhere else (stop-loss included) the row simply drops when
            // the price is absent; the scalar field is already unset.
            _ => self.acceptable_price_row(common),
        };

        row.price_comment = Some(build_lines(vec![
            Some(Line::text(self.t("Trigger price for the order."))),
            acceptable_row.is_some().then_some(Line::Blank),
            acceptable_row,
        ]));
    }

    /// Executed (and frozen, which renders the same shape plus an error
    /// line) for the conditional orders.
    fn render_order_executed(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        row: &mut RowDetails,
        frozen: bool,
    ) {
        let mut error_line = None;
        if frozen {
            row.is_action_error = true;
            if let Some(decoded) = action
                .reason_bytes
                .as_deref()
                .and_then(|bytes| self.decoder.decode(bytes))
            {
                error_line = Some(Line::span(
                    self.t(&format!("Order execution failed: {}.", decoded.name)),
                    Some(LineState::Error),
                ));
            }
        }

        let trigger_row = common.trigger_price_text.as_ref().map(|text| {
            Line::key_value(
                self.t("Order Trigger Price"),
                format!("{}  {}", common.trigger_ineq, text),
            )
        });
        let acceptable_row = self.acceptable_price_row(common);
        let execution_row = common
            .execution_price_text
            .as_ref()
            .map(|text| Line::key_value(self.t("Order Execution Price"), text.clone()));
        let impact_row = common.price_impact_text.as_ref().map(|text| {
            Line::key_value_state(
                self.t("Price Impact"),
                text.clone(),
                classify_by_sign(action.price_impact_usd),
            )
        });

        row.price_comment = Some(build_lines(vec![
            error_line.clone(),
            error_line.is_some().then_some(Line::Blank),
            Some(Line::text(self.t("Mark price for the order."))),
            Some(Line::Blank),
            trigger_row,
            acceptable_row,
            execution_row,
            impact_row,
        ]));
    }

    /// Liquidation fee waterfall (all USD-scaled, computed in order).
    fn render_liquidation(
        &self,
        action: &PositionTradeAction,
        common: &CommonFields,
        min_collateral_usd: U256,
        row: &mut RowDetails,
    ) {
        row.is_action_error = true;

        let collateral_price = action.collateral_token_price.min;
        let to_usd = |amount: Option<U256>| {
            convert_token_to_usd(amount.unwrap_or(U256::ZERO), collateral_price)
        };

        let min_collateral_factor = action.market_info.min_collateral_factor;
        let max_leverage = if min_collateral_factor.is_zero() {
            U256::ZERO
        } else {
            precision() / min_collateral_factor
        };

        let initial_collateral_usd = convert_token_to_usd(
            action.initial_collateral_delta_amount,
            collateral_price,
        );
        let borrowing_fee_usd = to_usd(action.borrowing_fee_amount);
        let funding_fee_usd = to_usd(action.funding_fee_amount);
        let position_fee_usd = to_usd(action.position_fee_amount);
        let liquidation_fee_usd = to_usd(action.liquidation_fee_amount);

        let required_collateral_usd =
            apply_factor(action.size_delta_usd, min_collateral_factor).max(min_collateral_usd);

        let base_pnl_usd = action.base_pnl_usd.unwrap_or(I256::ZERO);
        let price_impact_usd = action.price_impact_usd.unwrap_or(I256::ZERO);

        let leftover_collateral_usd = signed(initial_collateral_usd) + base_pnl_usd
            - signed(borrowing_fee_usd)
            - signed(funding_fee_usd)
            - signed(position_fee_usd);

        let returned_collateral_usd = clamp_min_zero(
            leftover_collateral_usd - signed(liquidation_fee_usd) + price_impact_usd,
        );

        // Fees render negated: they left the position.
        let fee_row = |label: &str, fee_usd: U256| {
            let negated = -signed(fee_usd);
            Some(Line::key_value_state(
                self.t(label),
                format_usd_signed(negated),
                classify_by_sign(Some(negated)),
            ))
        };

        row.price_comment = Some(build_lines(vec![
            Some(Line::text(self.t(&format!(
                "This position was liquidated as the max. leverage of {}x was exceeded.",
                max_leverage
            )))),
            Some(Line::Blank),
            common
                .execution_price_text
                .as_ref()
                .map(|text| Line::key_value(self.t("Order Execution Price"), text.clone())),
            Some(Line::Blank),
            Some(Line::key_value(
                self.t("Initial Collateral"),
                format_usd(initial_collateral_usd),
            )),
            Some(Line::key_value_state(
                self.t("PnL"),
                format_usd_signed(base_pnl_usd),
                classify_by_sign(Some(base_pnl_usd)),
            )),
            fee_row("Borrow Fee", borrowing_fee_usd),
            fee_row("Funding Fee", funding_fee_usd),
            fee_row("Position Fee", position_fee_usd),
            Some(Line::Blank),
            Some(Line::key_value(
                self.t("Min. Required Collateral"),
                format_usd(required_collateral_usd),
            )),
            Some(Line::key_value(
                self.t("Collateral at Liquidation"),
                format_usd_signed(leftover_collateral_usd),
            )),
            Some(Line::Blank),
            Some(Line::key_value_state(
                self.t("Price Impact"),
                format_usd_signed(price_impact_usd),
                classify_by_sign(Some(price_impact_usd)),
            )),
            fee_row("Liquidation Fee", liquidation_fee_usd),
            Some(Line::Blank),
            Some(Line::key_value(
                self.t("Returned Collateral"),
                format_usd(unsigned_abs(returned_collateral_usd)),
            )),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptable_price_inequality_table() {
        assert_eq!(acceptable_price_inequality(true, true), "<");
        assert_eq!(acceptable_price_inequality(true, false), ">");
        assert_eq!(acceptable_price_inequality(false, true), ">");
        assert_eq!(acceptable_price_inequality(false, false), "<");
    }

    #[test]
    fn test_trigger_price_inequality_inverts_for_stops() {
        // Long: limit increase waits below, stop increase above.
        assert_eq!(trigger_price_inequality(OrderType::LimitIncrease, true), "<");
        assert_eq!(trigger_price_inequality(OrderType::StopIncrease, true), ">");
        // Long: take-profit waits above, stop-loss below.
        assert_eq!(trigger_price_inequality(OrderType::LimitDecrease, true), ">");
        assert_eq!(trigger_price_inequality(OrderType::StopLossDecrease, true), "<");
        // Short mirrors.
        assert_eq!(trigger_price_inequality(OrderType::LimitDecrease, false), "<");
        assert_eq!(trigger_price_inequality(OrderType::StopLossDecrease, false), ">");
    }
}
