use serde::Serialize;

/// 无法确定的值统一使用的占位符
pub const SENTINEL: &str = "N/A";

/// 公司名称缺失时的提示，用于区分“代码不存在”与“字段缺失”
pub const TICKER_NOT_FOUND: &str = "Ticker not found";

/// Output keys, in serialization order.
pub const OUTPUT_KEYS: [&str; 10] = [
    "company_name",
    "price",
    "daily_change",
    "daily_change_percent",
    "market_cap",
    "volume",
    "beta",
    "year_low",
    "year_high",
    "pe_ratio_total",
];

/// Display-ready quote summary.
///
/// Every key of [`OUTPUT_KEYS`] is always present; values are either formatted
/// strings or [`SENTINEL`]. Fields are private so an assembled summary cannot be
/// altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    company_name: String,
    price: String,
    daily_change: String,
    daily_change_percent: String,
    market_cap: String,
    volume: String,
    beta: String,
    year_low: String,
    year_high: String,
    pe_ratio_total: String,
}

impl QuoteSummary {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        company_name: String,
        price: String,
        daily_change: String,
        daily_change_percent: String,
        market_cap: String,
        volume: String,
        beta: String,
        year_low: String,
        year_high: String,
        pe_ratio_total: String,
    ) -> Self {
        Self {
            company_name,
            price,
            daily_change,
            daily_change_percent,
            market_cap,
            volume,
            beta,
            year_low,
            year_high,
            pe_ratio_total,
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn daily_change(&self) -> &str {
        &self.daily_change
    }

    pub fn daily_change_percent(&self) -> &str {
        &self.daily_change_percent
    }

    pub fn market_cap(&self) -> &str {
        &self.market_cap
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn beta(&self) -> &str {
        &self.beta
    }

    pub fn year_low(&self) -> &str {
        &self.year_low
    }

    pub fn year_high(&self) -> &str {
        &self.year_high
    }

    pub fn pe_ratio_total(&self) -> &str {
        &self.pe_ratio_total
    }

    /// Key/value pairs in [`OUTPUT_KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            (OUTPUT_KEYS[0], self.company_name()),
            (OUTPUT_KEYS[1], self.price()),
            (OUTPUT_KEYS[2], self.daily_change()),
            (OUTPUT_KEYS[3], self.daily_change_percent()),
            (OUTPUT_KEYS[4], self.market_cap()),
            (OUTPUT_KEYS[5], self.volume()),
            (OUTPUT_KEYS[6], self.beta()),
            (OUTPUT_KEYS[7], self.year_low()),
            (OUTPUT_KEYS[8], self.year_high()),
            (OUTPUT_KEYS[9], self.pe_ratio_total()),
        ]
    }

    pub fn to_json_pretty(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
