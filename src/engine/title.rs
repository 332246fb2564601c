//! Action title resolution.
//!
//! Maps an order category (plus the TWAP flag and the synthetic
//! deposit/withdraw relabeling) and a lifecycle event to a localized action
//! title. Every reachable pair is listed in the static table; anything else
//! takes the documented generic fallback, which is logged because it loses
//! category-specific wording.

use crate::domain::{OrderEvent, OrderType};
use crate::i18n::Localizer;

/// Title category: order categories plus the synthetic relabelings.
///
/// `Deposit`/`Withdraw` apply when a position increase/decrease carries a
/// zero size delta; `Twap`/`TwapSwap` apply when the action is one part of
/// a TWAP order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleCategory {
    MarketSwap,
    LimitSwap,
    TwapSwap,
    Twap,
    MarketIncrease,
    LimitIncrease,
    StopIncrease,
    MarketDecrease,
    LimitDecrease,
    StopLossDecrease,
    Liquidation,
    Deposit,
    Withdraw,
}

impl TitleCategory {
    /// Derive the title category from an order type and its TWAP flag.
    pub fn from_order(order_type: OrderType, is_twap: bool) -> Self {
        if is_twap {
            return if order_type.is_swap() {
                TitleCategory::TwapSwap
            } else {
                TitleCategory::Twap
            };
        }
        match order_type {
            OrderType::MarketSwap => TitleCategory::MarketSwap,
            OrderType::LimitSwap => TitleCategory::LimitSwap,
            OrderType::MarketIncrease => TitleCategory::MarketIncrease,
            OrderType::LimitIncrease => TitleCategory::LimitIncrease,
            OrderType::StopIncrease => TitleCategory::StopIncrease,
            OrderType::MarketDecrease => TitleCategory::MarketDecrease,
            OrderType::LimitDecrease => TitleCategory::LimitDecrease,
            OrderType::StopLossDecrease => TitleCategory::StopLossDecrease,
            OrderType::Liquidation => TitleCategory::Liquidation,
        }
    }

    /// Generic category wording used by the fallback path.
    ///
    /// Limit-family categories collapse to plain "Limit".
    fn generic_name(&self) -> &'static str {
        match self {
            TitleCategory::LimitSwap
            | TitleCategory::LimitIncrease
            | TitleCategory::StopIncrease
            | TitleCategory::LimitDecrease
            | TitleCategory::StopLossDecrease => "Limit",
            TitleCategory::MarketSwap => "Market Swap",
            TitleCategory::TwapSwap => "TWAP Swap",
            TitleCategory::Twap => "TWAP Order",
            TitleCategory::MarketIncrease => "Market Increase",
            TitleCategory::MarketDecrease => "Market Decrease",
            TitleCategory::Liquidation => "Liquidation",
            TitleCategory::Deposit => "Deposit",
            TitleCategory::Withdraw => "Withdraw",
        }
    }
}

/// Generic verb for the fallback title.
fn generic_verb(event: OrderEvent) -> &'static str {
    match event {
        OrderEvent::OrderCreated => "Create",
        OrderEvent::OrderUpdated => "Update",
        OrderEvent::OrderCancelled => "Cancel",
        OrderEvent::OrderExecuted => "Execute",
        OrderEvent::OrderFrozen => "Freeze",
    }
}

/// The static title table over every reachable (category, event) pair.
fn table_title(category: TitleCategory, event: OrderEvent) -> Option<&'static str> {
    use OrderEvent::*;
    use TitleCategory::*;

    Some(match (category, event) {
        (MarketSwap, OrderCreated) => "Request Market Swap",
        (MarketSwap, OrderExecuted) => "Execute Market Swap",
        (MarketSwap, OrderCancelled) => "Failed Market Swap",

        (LimitSwap, OrderCreated) => "Create Limit Swap Order",
        (LimitSwap, OrderUpdated) => "Update Limit Swap Order",
        (LimitSwap, OrderCancelled) => "Cancel Limit Swap Order",
        (LimitSwap, OrderExecuted) => "Execute Limit Swap Order",
        (LimitSwap, OrderFrozen) => "Failed Limit Swap Order",

        (TwapSwap, OrderCreated) => "Request TWAP Swap",
        (TwapSwap, OrderUpdated) => "Update TWAP Swap",
        (TwapSwap, OrderCancelled) => "Cancel TWAP Swap",
        (TwapSwap, OrderExecuted) => "Execute TWAP Swap Part",
        (TwapSwap, OrderFrozen) => "Failed TWAP Swap Part",

        (Twap, OrderCreated) => "Request TWAP Order",
        (Twap, OrderUpdated) => "Update TWAP Order",
        (Twap, OrderCancelled) => "Cancel TWAP Order",
        (Twap, OrderExecuted) => "Execute TWAP Part",
        (Twap, OrderFrozen) => "Failed TWAP Part",

        (MarketIncrease, OrderCreated) => "Request Market Increase",
        (MarketIncrease, OrderExecuted) => "Market Increase",
        (MarketIncrease, OrderCancelled) => "Failed Market Increase",

        (LimitIncrease, OrderCreated) => "Create Limit Order",
        (LimitIncrease, OrderUpdated) => "Update Limit Order",
        (LimitIncrease, OrderCancelled) => "Cancel Limit Order",
        (LimitIncrease, OrderExecuted) => "Execute Limit Order",
        (LimitIncrease, OrderFrozen) => "Failed Limit Order",

        (StopIncrease, OrderCreated) => "Create Stop Market Order",
        (StopIncrease, OrderUpdated) => "Update Stop Market Order",
        (StopIncrease, OrderCancelled) => "Cancel Stop Market Order",
        (StopIncrease, OrderExecuted) => "Execute Stop Market Order",
        (StopIncrease, OrderFrozen) => "Failed Stop Market Order",

        (MarketDecrease, OrderCreated) => "Request Market Decrease",
        (MarketDecrease, OrderExecuted) => "Market Decrease",
        (MarketDecrease, OrderCancelled) => "Failed Market Decrease",

        (LimitDecrease, OrderCreated) => "Create Take-Profit Order",
        (LimitDecrease, OrderUpdated) => "Update Take-Profit Order",
        (LimitDecrease, OrderCancelled) => "Cancel Take-Profit Order",
        (LimitDecrease, OrderExecuted) => "Execute Take-Profit Order",
        (LimitDecrease, OrderFrozen) => "Failed Take-Profit Order",

        (StopLossDecrease, OrderCreated) => "Create Stop-Loss Order",
        (StopLossDecrease, OrderUpdated) => "Update Stop-Loss Order",
        (StopLossDecrease, OrderCancelled) => "Cancel Stop-Loss Order",
        (StopLossDecrease, OrderExecuted) => "Execute Stop-Loss Order",
        (StopLossDecrease, OrderFrozen) => "Failed Stop-Loss Order",

        (Liquidation, OrderExecuted) => "Liquidated",

        (Deposit, OrderCreated) => "Request Deposit",
        (Deposit, OrderExecuted) => "Deposit",
        (Deposit, OrderCancelled) => "Failed Deposit",

        (Withdraw, OrderCreated) => "Request Withdraw",
        (Withdraw, OrderExecuted) => "Withdraw",
        (Withdraw, OrderCancelled) => "Failed Withdraw",

        _ => return None,
    })
}

/// Resolve the localized action title for a (category, event) pair.
///
/// A pair missing from the table never fails: it renders as
/// "{generic verb} {generic category}". That path loses specific wording,
/// so it is logged as a warning.
pub fn resolve_title(
    category: TitleCategory,
    event: OrderEvent,
    localizer: &dyn Localizer,
) -> String {
    match table_title(category, event) {
        Some(title) => localizer.translate(title),
        None => {
            tracing::warn!(?category, %event, "no action title for pair, using generic fallback");
            localizer.translate(&format!(
                "{} {}",
                generic_verb(event),
                category.generic_name()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishLocalizer;

    #[test]
    fn test_market_increase_created_golden() {
        let title = resolve_title(
            TitleCategory::from_order(OrderType::MarketIncrease, false),
            OrderEvent::OrderCreated,
            &EnglishLocalizer,
        );
        assert_eq!(title, "Request Market Increase");
    }

    #[test]
    fn test_twap_categories() {
        assert_eq!(
            TitleCategory::from_order(OrderType::MarketIncrease, true),
            TitleCategory::Twap
        );
        assert_eq!(
            TitleCategory::from_order(OrderType::LimitSwap, true),
            TitleCategory::TwapSwap
        );
        let title = resolve_title(
            TitleCategory::TwapSwap,
            OrderEvent::OrderExecuted,
            &EnglishLocalizer,
        );
        assert_eq!(title, "Execute TWAP Swap Part");
    }

    #[test]
    fn test_liquidation_executed() {
        let title = resolve_title(
            TitleCategory::Liquidation,
            OrderEvent::OrderExecuted,
            &EnglishLocalizer,
        );
        assert_eq!(title, "Liquidated");
    }

    #[test]
    fn test_fallback_uses_generic_verb_and_name() {
        // Liquidation has no Created entry in the table.
        let title = resolve_title(
            TitleCategory::Liquidation,
            OrderEvent::OrderCreated,
            &EnglishLocalizer,
        );
        assert_eq!(title, "Create Liquidation");

        // Market increase orders cannot be frozen; pair is absent.
        let title = resolve_title(
            TitleCategory::MarketIncrease,
            OrderEvent::OrderFrozen,
            &EnglishLocalizer,
        );
        assert_eq!(title, "Freeze Market Increase");
    }

    #[test]
    fn test_fallback_limit_family_collapses_to_limit() {
        // Force the fallback for a limit-family category by probing a pair
        // the table covers for real orders but not for this synthetic check.
        assert_eq!(TitleCategory::StopIncrease.generic_name(), "Limit");
        assert_eq!(TitleCategory::LimitSwap.generic_name(), "Limit");
    }

    #[test]
    fn test_every_lifecycle_covered_for_limit_orders() {
        for event in [
            OrderEvent::OrderCreated,
            OrderEvent::OrderUpdated,
            OrderEvent::OrderCancelled,
            OrderEvent::OrderExecuted,
            OrderEvent::OrderFrozen,
        ] {
            assert!(table_title(TitleCategory::LimitIncrease, event).is_some());
            assert!(table_title(TitleCategory::StopLossDecrease, event).is_some());
            assert!(table_title(TitleCategory::LimitSwap, event).is_some());
        }
    }
}
