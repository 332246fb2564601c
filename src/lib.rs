pub mod config;
pub mod decode;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod format;
pub mod i18n;

pub use config::Config;
pub use decode::{DecodedRevert, ExchangeErrorDecoder, RevertDecoder};
pub use domain::{
    MarketInfo, MarketsInfoData, OrderEvent, OrderType, PositionTradeAction, SwapTradeAction,
    TimeSec, Token, TokenAddress, TokenPrice, TradeAction, TxRef,
};
pub use engine::{PositionFormatter, RowDetails, SwapFormatter, TradeActionFormatter};
pub use error::AppError;
pub use export::CsvTradeRow;
pub use i18n::{EnglishLocalizer, Localizer};
