//! End-to-end CSV export: format actions, flatten rows, write, read back.

use std::fs::File;
use tempfile::TempDir;
use tradescribe::decode::ExchangeErrorDecoder;
use tradescribe::domain::numeric::expand_decimals;
use tradescribe::domain::{
    MarketInfo, OrderEvent, OrderType, PositionTradeAction, TimeSec, Token, TokenAddress,
    TokenPrice, TradeAction, TxRef,
};
use tradescribe::engine::TradeActionFormatter;
use tradescribe::export::{write_csv, CsvTradeRow};
use tradescribe::i18n::EnglishLocalizer;

fn token(symbol: &str, decimals: u32) -> Token {
    Token {
        address: TokenAddress::new(format!("0x{}", symbol.to_lowercase())),
        symbol: symbol.to_string(),
        decimals,
        visual_multiplier: None,
    }
}

fn action() -> TradeAction {
    TradeAction::Position(PositionTradeAction {
        order_type: OrderType::MarketIncrease,
        event: OrderEvent::OrderCreated,
        transaction: TxRef::new("0xabc123", TimeSec::new(1_700_000_000)),
        is_twap: false,
        market_info: MarketInfo {
            market_token_address: TokenAddress::new("0xmarket-avax"),
            index_name: "AVAX/USD".to_string(),
            pool_name: "AVAX-USDC".to_string(),
            index_token: token("AVAX", 18),
            long_token: token("AVAX", 18),
            short_token: token("USDC", 6),
            min_collateral_factor: expand_decimals(1, 28),
        },
        index_token: token("AVAX", 18),
        initial_collateral_token: token("USDC", 6),
        target_collateral_token: None,
        is_long: false,
        size_delta_usd: expand_decimals(105_488, 28),
        initial_collateral_delta_amount: expand_decimals(100, 6),
        trigger_price: None,
        acceptable_price: Some(expand_decimals(93, 11)),
        execution_price: None,
        price_impact_usd: None,
        pnl_usd: None,
        base_pnl_usd: None,
        borrowing_fee_amount: None,
        funding_fee_amount: None,
        position_fee_amount: None,
        liquidation_fee_amount: None,
        collateral_token_price: TokenPrice::new(expand_decimals(1, 24), expand_decimals(1, 24)),
        index_token_price: TokenPrice::new(expand_decimals(9, 12), expand_decimals(95, 11)),
        reason_bytes: None,
    })
}

#[test]
fn formats_and_exports_round_trip() {
    let localizer = EnglishLocalizer;
    let decoder = ExchangeErrorDecoder;
    let formatter = TradeActionFormatter::new(&localizer, &decoder);
    let action = action();

    let row = formatter.format(&action, expand_decimals(1, 30), None, false);
    let record = CsvTradeRow::from_row(
        &row,
        "https://arbiscan.io/tx/",
        &action.transaction().hash,
    );

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("history.csv");
    write_csv(File::create(&path).unwrap(), [record]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert_eq!(
        header,
        "timestamp,action,market,size,marketPrice,acceptablePrice,\
         executionPrice,triggerPrice,priceImpact,pnl,explorerUrl"
    );

    let data = lines.next().unwrap();
    assert!(data.contains("Request Market Increase"));
    assert!(data.contains("2023-11-14T22:13:20Z"));
    assert!(data.contains("https://arbiscan.io/tx/0xabc123"));
    // Quoted because the size text contains a comma.
    assert!(data.contains("+$1,054.88"));
}

#[test]
fn csv_reader_round_trips_field_values() {
    let localizer = EnglishLocalizer;
    let decoder = ExchangeErrorDecoder;
    let formatter = TradeActionFormatter::new(&localizer, &decoder);
    let action = action();

    let row = formatter.format(&action, expand_decimals(1, 30), None, false);
    let record = CsvTradeRow::from_row(&row, "https://arbiscan.io/tx/", "0xabc123");

    let mut out = Vec::new();
    write_csv(&mut out, [record.clone()]).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let mut records = reader.records();
    let parsed = records.next().unwrap().unwrap();
    assert_eq!(&parsed[0], record.timestamp.as_str());
    assert_eq!(&parsed[1], record.action.as_str());
    assert_eq!(&parsed[3], record.size.as_str());
    assert_eq!(&parsed[10], record.explorer_url.as_str());
}
