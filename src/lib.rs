// 公开导出的模块，供外部使用
pub mod models;
pub mod normalize;
pub mod errors;

// 为了支持主程序和 HTTP 服务，暂时保持这些模块公开
// 但在库使用场景中，这些应该是内部模块
#[doc(hidden)]
pub mod scrapers;
#[doc(hidden)]
pub mod services;
#[doc(hidden)]
pub mod server;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use models::raw_quote::RawQuote;
pub use models::resolved::ResolvedValue;
pub use models::summary::{QuoteSummary, OUTPUT_KEYS, SENTINEL, TICKER_NOT_FOUND};
pub use normalize::normalize_quote;
pub use services::quote_service::QuoteService;
pub use errors::{Result, SnapshotError};
