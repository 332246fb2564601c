//! CSV export of formatted rows.
//!
//! The column set and header labels are a compatibility surface consumed by
//! downstream tooling; the tooltip content is flattened out and only the
//! scalar fields survive.

use crate::engine::RowDetails;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One flattened CSV record. Field names are part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvTradeRow {
    pub timestamp: String,
    pub action: String,
    pub market: String,
    pub size: String,
    #[serde(rename = "marketPrice")]
    pub market_price: String,
    #[serde(rename = "acceptablePrice")]
    pub acceptable_price: String,
    #[serde(rename = "executionPrice")]
    pub execution_price: String,
    #[serde(rename = "triggerPrice")]
    pub trigger_price: String,
    #[serde(rename = "priceImpact")]
    pub price_impact: String,
    pub pnl: String,
    #[serde(rename = "explorerUrl")]
    pub explorer_url: String,
}

impl CsvTradeRow {
    /// Flatten a row record; `tx_hash` is appended to the explorer base URL.
    pub fn from_row(row: &RowDetails, explorer_base: &str, tx_hash: &str) -> Self {
        CsvTradeRow {
            timestamp: row.timestamp_iso.clone(),
            action: row.action.clone(),
            market: row.market.clone(),
            size: row.size.clone(),
            market_price: row.price.clone(),
            acceptable_price: row.acceptable_price.clone().unwrap_or_default(),
            execution_price: row.execution_price.clone().unwrap_or_default(),
            trigger_price: row.trigger_price.clone().unwrap_or_default(),
            price_impact: row.price_impact.clone().unwrap_or_default(),
            pnl: row.pnl.clone().unwrap_or_default(),
            explorer_url: format!("{}{}", explorer_base, tx_hash),
        }
    }
}

/// Write records with headers to any writer.
pub fn write_csv<W: Write>(
    writer: W,
    rows: impl IntoIterator<Item = CsvTradeRow>,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
