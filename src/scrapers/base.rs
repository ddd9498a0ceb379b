use crate::models::raw_quote::RawQuote;
use crate::errors::Result;
use async_trait::async_trait;

/// Base trait for raw quote sources
#[async_trait]
pub trait QuoteScraper {
    /// Name of the upstream provider, used in logs
    fn source_name(&self) -> &'static str;

    /// Fetch the raw quote record for `ticker`.
    ///
    /// An unknown ticker is not an error: sources return an empty record and let
    /// the normalizer report it.
    async fn fetch_raw_quote(&self, ticker: &str) -> Result<RawQuote>;
}
