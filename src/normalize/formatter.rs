//! Unit formatter: turns resolved numbers into display strings.
//!
//! Each [`FormatKind`] owns one rendering rule. `Unavailable` always renders as
//! [`SENTINEL`], so callers never have to special-case missing data.

use crate::models::resolved::ResolvedValue;
use crate::models::summary::SENTINEL;
use crate::normalize::metrics::DerivedMetrics;
use crate::normalize::resolver::ResolvedFields;
use crate::util::{render_integer, render_number, round2};

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// 价格、52周高低点
    Currency,
    /// 带符号的涨跌额
    SignedDelta,
    /// 带符号的涨跌幅，附加 `%`
    Percent,
    MarketCapTier,
    CompactVolume,
    /// 市盈率
    Ratio,
    Beta,
}

/// 市值分级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapTier {
    Mega,
    Large,
    Small,
    Nano,
}

impl CapTier {
    pub fn classify(market_cap: f64) -> Self {
        if market_cap >= TRILLION {
            CapTier::Mega
        } else if market_cap >= BILLION {
            CapTier::Large
        } else if market_cap >= MILLION {
            CapTier::Small
        } else {
            CapTier::Nano
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CapTier::Mega => "Mega Cap",
            CapTier::Large => "Large Cap",
            CapTier::Small => "Small Cap",
            CapTier::Nano => "Nano Cap",
        }
    }

    /// Divisor and unit suffix; nano caps are rendered unscaled.
    fn unit(self) -> Option<(f64, &'static str)> {
        match self {
            CapTier::Mega => Some((TRILLION, "T")),
            CapTier::Large => Some((BILLION, "B")),
            CapTier::Small => Some((MILLION, "M")),
            CapTier::Nano => None,
        }
    }
}

pub fn format(value: ResolvedValue, kind: FormatKind) -> String {
    let x = match value {
        ResolvedValue::Present(x) => x,
        ResolvedValue::Unavailable => return SENTINEL.to_string(),
    };

    match kind {
        FormatKind::Currency | FormatKind::Ratio | FormatKind::Beta => format!("{:.2}", x),
        FormatKind::SignedDelta => signed(x),
        FormatKind::Percent => format!("{}%", signed(x)),
        FormatKind::MarketCapTier => market_cap(x),
        FormatKind::CompactVolume => compact_volume(x),
    }
}

/// Formats both sides with their own rule and joins them with `" / "`.
///
/// Only collapses to the sentinel when neither side is available.
pub fn format_pair(left: ResolvedValue, right: ResolvedValue, kind: FormatKind) -> String {
    if !left.is_present() && !right.is_present() {
        return SENTINEL.to_string();
    }
    format!("{} / {}", format(left, kind), format(right, kind))
}

fn signed(x: f64) -> String {
    let x = round2(x);
    if x >= 0.0 {
        format!("+{:.2}", x)
    } else {
        format!("{:.2}", x)
    }
}

fn market_cap(x: f64) -> String {
    if x <= 0.0 {
        return SENTINEL.to_string();
    }
    let tier = CapTier::classify(x);
    match tier.unit() {
        Some((divisor, suffix)) => {
            format!("{}{} - {}", render_number(round2(x / divisor)), suffix, tier.label())
        }
        None => format!("{} - {}", render_number(x), tier.label()),
    }
}

/// 成交量档位，从小到大；第一档不加后缀，按整数显示
const VOLUME_UNITS: [(f64, &str); 4] = [(1.0, ""), (THOUSAND, "K"), (MILLION, "M"), (BILLION, "B")];

fn compact_volume(x: f64) -> String {
    let mut tier = VOLUME_UNITS
        .iter()
        .rposition(|(divisor, _)| x >= *divisor)
        .unwrap_or(0);

    // 四舍五入后达到 1000 的进到下一档
    while tier + 1 < VOLUME_UNITS.len() && scaled_volume(x, tier) >= THOUSAND {
        tier += 1;
    }

    match VOLUME_UNITS[tier] {
        (_, "") => render_integer(x),
        (divisor, suffix) => format!("{}{}", render_number(round2(x / divisor)), suffix),
    }
}

fn scaled_volume(x: f64, tier: usize) -> f64 {
    match VOLUME_UNITS[tier] {
        (_, "") => x.round(),
        (divisor, _) => round2(x / divisor),
    }
}

/// 所有输出字段的格式化结果（公司名称除外）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedFields {
    pub price: String,
    pub daily_change: String,
    pub daily_change_percent: String,
    pub market_cap: String,
    pub volume: String,
    pub beta: String,
    pub year_low: String,
    pub year_high: String,
    pub pe_ratio_total: String,
}

pub fn format_fields(resolved: &ResolvedFields, derived: &DerivedMetrics) -> FormattedFields {
    FormattedFields {
        price: format(resolved.price, FormatKind::Currency),
        daily_change: format(derived.absolute_change, FormatKind::SignedDelta),
        daily_change_percent: format(derived.percent_change, FormatKind::Percent),
        market_cap: format(resolved.market_cap, FormatKind::MarketCapTier),
        volume: format_pair(resolved.volume, resolved.average_volume, FormatKind::CompactVolume),
        beta: format(resolved.beta, FormatKind::Beta),
        year_low: format(resolved.year_low, FormatKind::Currency),
        year_high: format(resolved.year_high, FormatKind::Currency),
        pe_ratio_total: format_pair(resolved.trailing_pe, resolved.forward_pe, FormatKind::Ratio),
    }
}
