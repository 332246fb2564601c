//! Trade action formatting engine.
//!
//! Turns raw on-chain order lifecycle events into display-ready row
//! records. Pure over its inputs: no I/O, no shared state, one formatter
//! call per action. See `position` and `swap` for the two decision tables.

pub mod position;
pub mod swap;
pub mod title;

pub use position::PositionFormatter;
pub use swap::SwapFormatter;
pub use title::{resolve_title, TitleCategory};

use crate::decode::RevertDecoder;
use crate::domain::{MarketsInfoData, TradeAction};
use crate::format::tooltip::{LineState, TooltipContent};
use crate::i18n::Localizer;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Per-hop market naming for swap tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketName {
    pub index_name: String,
    pub pool_name: String,
}

/// Display-ready record for one trade action.
///
/// Scalar string fields feed the table renderer and the CSV exporter;
/// `price_comment` carries the structured tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDetails {
    pub action: String,
    pub market: String,
    pub timestamp: String,
    #[serde(rename = "timestampISO")]
    pub timestamp_iso: String,
    pub size: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_comment: Option<TooltipContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptable_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnl_state: Option<LineState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_market_names: Option<Vec<MarketName>>,
    #[serde(default)]
    pub is_action_error: bool,
}

/// Entry point selecting the position or swap decision table per action.
pub struct TradeActionFormatter<'a> {
    localizer: &'a dyn Localizer,
    decoder: &'a dyn RevertDecoder,
}

impl<'a> TradeActionFormatter<'a> {
    pub fn new(localizer: &'a dyn Localizer, decoder: &'a dyn RevertDecoder) -> Self {
        TradeActionFormatter { localizer, decoder }
    }

    /// Format one trade action into its row record.
    ///
    /// `min_collateral_usd` feeds the liquidation waterfall; `markets` is
    /// only consulted for swap-path naming and may be absent.
    pub fn format(
        &self,
        action: &TradeAction,
        min_collateral_usd: U256,
        markets: Option<&MarketsInfoData>,
        relative_timestamp: bool,
    ) -> RowDetails {
        match action {
            TradeAction::Position(a) => PositionFormatter::new(self.localizer, self.decoder)
                .format(a, min_collateral_usd, relative_timestamp),
            TradeAction::Swap(a) => SwapFormatter::new(self.localizer, self.decoder)
                .format(a, markets, relative_timestamp),
        }
    }
}
