use serde::Deserialize;
use tradescribe::engine::TradeActionFormatter;
use tradescribe::export::{write_csv, CsvTradeRow};
use tradescribe::{
    config::{Config, OutputMode},
    AppError, EnglishLocalizer, ExchangeErrorDecoder, MarketInfo, MarketsInfoData, TradeAction,
};

/// One page of history as produced by the (external) fetcher.
#[derive(Debug, Deserialize)]
struct HistoryPage {
    actions: Vec<TradeAction>,
    #[serde(default)]
    markets: Vec<MarketInfo>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&config.input_path)?;
    let page: HistoryPage = serde_json::from_str(&raw)?;

    let markets = (!page.markets.is_empty()).then(|| MarketsInfoData::new(page.markets.clone()));
    let localizer = EnglishLocalizer;
    let decoder = ExchangeErrorDecoder;
    let formatter = TradeActionFormatter::new(&localizer, &decoder);

    tracing::info!(actions = page.actions.len(), "formatting history page");

    // Each row is independent of every other (pure per-action function).
    let rows: Vec<_> = page
        .actions
        .iter()
        .map(|action| {
            let row = formatter.format(
                action,
                config.min_collateral_usd,
                markets.as_ref(),
                config.relative_timestamps,
            );
            (row, action.transaction().hash.clone())
        })
        .collect();

    match config.output {
        OutputMode::Table => {
            for (row, _) in &rows {
                println!(
                    "{:<20} {:<28} {:<24} {:<24} {}",
                    row.timestamp, row.action, row.market, row.size, row.price
                );
            }
        }
        OutputMode::Csv => {
            let records = rows
                .iter()
                .map(|(row, hash)| CsvTradeRow::from_row(row, &config.explorer_url, hash));
            write_csv(std::io::stdout().lock(), records).map_err(AppError::Export)?;
        }
    }

    Ok(())
}
