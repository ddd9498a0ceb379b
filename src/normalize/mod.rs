//! Quote normalization pipeline.
//!
//! `resolver` → `metrics` → `formatter` → `assembler`, each stage pure and
//! synchronous. [`normalize_quote`] runs the whole chain and never fails: anything
//! that cannot be determined ends up as the `"N/A"` sentinel.

pub mod assembler;
pub mod formatter;
pub mod metrics;
pub mod resolver;

use crate::models::raw_quote::RawQuote;
use crate::models::summary::QuoteSummary;

pub fn normalize_quote(raw: &RawQuote) -> QuoteSummary {
    let resolved = resolver::resolve(raw);
    let derived = metrics::derive(resolved.price, resolved.previous_close);
    let formatted = formatter::format_fields(&resolved, &derived);
    assembler::assemble(resolved.company_name.as_deref(), formatted)
}
