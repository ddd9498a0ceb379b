use crate::models::summary::{QuoteSummary, TICKER_NOT_FOUND};
use crate::normalize::formatter::FormattedFields;

/// Merges the company name and formatted fields into the final summary.
///
/// A missing or blank name becomes [`TICKER_NOT_FOUND`] instead of the generic
/// sentinel.
pub fn assemble(company_name: Option<&str>, formatted: FormattedFields) -> QuoteSummary {
    let company_name = match company_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => TICKER_NOT_FOUND.to_string(),
    };

    QuoteSummary::new(
        company_name,
        formatted.price,
        formatted.daily_change,
        formatted.daily_change_percent,
        formatted.market_cap,
        formatted.volume,
        formatted.beta,
        formatted.year_low,
        formatted.year_high,
        formatted.pe_ratio_total,
    )
}
