//! Field resolver: pulls each logical quantity out of a [`RawQuote`].
//!
//! Every lookup degrades to [`ResolvedValue::Unavailable`] on a missing field or a
//! type mismatch, so this stage cannot fail.

use crate::models::raw_quote::RawQuote;
use crate::models::resolved::ResolvedValue;

/// 价格回退顺序：实时成交价、基金净值、常规市场价、昨收
pub const PRICE_SOURCES: [&str; 4] = ["currentPrice", "navPrice", "regularMarketPrice", "previousClose"];

pub const NAME_FIELD: &str = "longName";
pub const PREVIOUS_CLOSE_FIELD: &str = "previousClose";
pub const MARKET_CAP_FIELD: &str = "marketCap";
pub const BETA_FIELD: &str = "beta";
pub const VOLUME_FIELD: &str = "volume";
pub const AVERAGE_VOLUME_FIELD: &str = "averageVolume";
pub const YEAR_LOW_FIELD: &str = "fiftyTwoWeekLow";
pub const YEAR_HIGH_FIELD: &str = "fiftyTwoWeekHigh";
pub const TRAILING_PE_FIELD: &str = "trailingPE";
pub const FORWARD_PE_FIELD: &str = "forwardPE";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFields {
    /// 原样保留，“未找到”的替换由组装阶段处理
    pub company_name: Option<String>,
    pub price: ResolvedValue,
    pub previous_close: ResolvedValue,
    pub market_cap: ResolvedValue,
    pub beta: ResolvedValue,
    pub volume: ResolvedValue,
    pub average_volume: ResolvedValue,
    pub year_low: ResolvedValue,
    pub year_high: ResolvedValue,
    pub trailing_pe: ResolvedValue,
    pub forward_pe: ResolvedValue,
}

pub fn resolve(raw: &RawQuote) -> ResolvedFields {
    ResolvedFields {
        company_name: raw.text(NAME_FIELD).map(str::to_string),
        price: first_numeric(raw, &PRICE_SOURCES),
        previous_close: numeric(raw, PREVIOUS_CLOSE_FIELD),
        market_cap: numeric(raw, MARKET_CAP_FIELD),
        beta: numeric(raw, BETA_FIELD),
        volume: numeric(raw, VOLUME_FIELD),
        average_volume: numeric(raw, AVERAGE_VOLUME_FIELD),
        year_low: numeric(raw, YEAR_LOW_FIELD),
        year_high: numeric(raw, YEAR_HIGH_FIELD),
        trailing_pe: numeric(raw, TRAILING_PE_FIELD),
        // 负的预期市盈率视为数据异常
        forward_pe: numeric(raw, FORWARD_PE_FIELD).filter(|pe| pe >= 0.0),
    }
}

fn numeric(raw: &RawQuote, field: &str) -> ResolvedValue {
    ResolvedValue::from(raw.number(field))
}

/// Ordered fallback chain: the first candidate that is present and numeric wins.
fn first_numeric(raw: &RawQuote, candidates: &[&str]) -> ResolvedValue {
    candidates
        .iter()
        .map(|field| numeric(raw, field))
        .fold(ResolvedValue::Unavailable, ResolvedValue::or)
}
