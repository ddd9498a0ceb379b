use crate::errors::{Result, SnapshotError};
use crate::models::summary::QuoteSummary;
use crate::normalize::normalize_quote;
use crate::scrapers::base::QuoteScraper;
use log::{info, warn};
use std::sync::Arc;

/// 报价服务：抓取原始报价并生成摘要
pub struct QuoteService {
    scraper: Arc<dyn QuoteScraper + Send + Sync>,
}

impl QuoteService {
    /// 创建新的报价服务实例
    pub fn new(scraper: Arc<dyn QuoteScraper + Send + Sync>) -> Self {
        Self { scraper }
    }

    pub fn source_name(&self) -> &'static str {
        self.scraper.source_name()
    }

    /// Fetch and normalize one ticker.
    ///
    /// Only acquisition failures and blank tickers are errors; everything the
    /// upstream record lacks is reported inside the summary.
    pub async fn get_summary(&self, ticker: &str) -> Result<QuoteSummary> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(SnapshotError::InvalidTicker(ticker.to_string()));
        }

        info!("Fetching {} from {}", ticker, self.scraper.source_name());
        let raw = match self.scraper.fetch_raw_quote(ticker).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to fetch {} from {}: {}", ticker, self.scraper.source_name(), e);
                return Err(e);
            }
        };

        Ok(normalize_quote(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw_quote::RawQuote;
    use crate::models::summary::TICKER_NOT_FOUND;
    use crate::scrapers::fixture::FixtureScraper;
    use std::collections::HashMap;

    fn service() -> QuoteService {
        let mut quotes = HashMap::new();
        quotes.insert(
            "VFIAX".to_string(),
            RawQuote::new()
                .with_field("longName", "Vanguard 500 Index Fund Admiral")
                .with_field("navPrice", 45.1),
        );
        QuoteService::new(Arc::new(FixtureScraper::new(quotes)))
    }

    #[tokio::test]
    async fn summarizes_known_ticker() {
        let summary = service().get_summary(" vfiax ").await.unwrap();
        assert_eq!(summary.price(), "45.10");
    }

    #[tokio::test]
    async fn unknown_ticker_is_not_an_error() {
        let summary = service().get_summary("ZZZZ").await.unwrap();
        assert_eq!(summary.company_name(), TICKER_NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_ticker_is_rejected() {
        let err = service().get_summary("   ").await.unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidTicker(_)));
    }
}
