use crate::models::resolved::ResolvedValue;
use crate::util::round2;

/// 由价格和昨收推导出的涨跌数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub absolute_change: ResolvedValue,
    pub percent_change: ResolvedValue,
}

impl DerivedMetrics {
    pub fn unavailable() -> Self {
        Self {
            absolute_change: ResolvedValue::Unavailable,
            percent_change: ResolvedValue::Unavailable,
        }
    }
}

/// Daily change of `price` against `previous_close`.
///
/// Both metrics are unavailable unless both operands are present and the previous
/// close is non-zero. Results are rounded to two decimals with their sign kept.
pub fn derive(price: ResolvedValue, previous_close: ResolvedValue) -> DerivedMetrics {
    let (price, previous_close) = match (price.value(), previous_close.value()) {
        (Some(p), Some(c)) if c != 0.0 => (p, c),
        _ => return DerivedMetrics::unavailable(),
    };

    let change = price - previous_close;
    DerivedMetrics {
        absolute_change: ResolvedValue::from(Some(round2(change))),
        percent_change: ResolvedValue::from(Some(round2(change / previous_close * 100.0))),
    }
}
