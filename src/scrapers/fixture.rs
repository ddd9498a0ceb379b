use crate::errors::{Result, SnapshotError};
use crate::models::raw_quote::RawQuote;
use crate::scrapers::base::QuoteScraper;
use async_trait::async_trait;
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 离线数据源：从 JSON 文件读取 `{"AAPL": {...}, "VFIAX": {...}}` 形式的原始报价
#[derive(Debug)]
pub struct FixtureScraper {
    quotes: HashMap<String, RawQuote>,
}

impl FixtureScraper {
    pub fn new(quotes: HashMap<String, RawQuote>) -> Self {
        let quotes = quotes
            .into_iter()
            .map(|(ticker, raw)| (ticker.to_uppercase(), raw))
            .collect();
        Self { quotes }
    }

    /// 从文件加载
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SnapshotError::ConfigError(format!(
                "Fixture file not found: {}", path.display()
            )));
        }

        let text = fs::read_to_string(path)?;
        let quotes: HashMap<String, RawQuote> = serde_json::from_str(&text)?;
        info!("Loaded {} fixture quotes from {}", quotes.len(), path.display());
        Ok(Self::new(quotes))
    }

    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.quotes.keys().map(String::as_str).collect();
        tickers.sort_unstable();
        tickers
    }
}

#[async_trait]
impl QuoteScraper for FixtureScraper {
    fn source_name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_raw_quote(&self, ticker: &str) -> Result<RawQuote> {
        Ok(self
            .quotes
            .get(&ticker.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn lookups_are_case_insensitive() {
        let mut quotes = HashMap::new();
        quotes.insert("vfiax".to_string(), RawQuote::new().with_field("navPrice", 45.1));
        let scraper = FixtureScraper::new(quotes);

        let raw = scraper.fetch_raw_quote("VFIAX").await.unwrap();
        assert_eq!(raw.number("navPrice"), Some(45.1));
    }

    #[tokio::test]
    async fn unknown_ticker_is_an_empty_record() {
        let scraper = FixtureScraper::new(HashMap::new());
        let raw = scraper.fetch_raw_quote("NOPE").await.unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn loads_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"aapl": {{"longName": "Apple Inc.", "currentPrice": 189.5}}, "msft": {{}}}}"#).unwrap();

        let scraper = FixtureScraper::load_from_file(file.path()).unwrap();
        assert_eq!(scraper.tickers(), vec!["AAPL", "MSFT"]);
    }

    #[tokio::test]
    async fn bundled_fixtures_cover_fund_and_new_listing() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/quotes.json");
        let scraper = FixtureScraper::load_from_file(&path).unwrap();
        assert_eq!(scraper.tickers(), vec!["AAPL", "NEWCO", "VFIAX"]);

        let fund = scraper.fetch_raw_quote("vfiax").await.unwrap();
        assert!(fund.number("currentPrice").is_none());
        assert_eq!(fund.number("navPrice"), Some(45.1));
    }

    #[test]
    fn missing_fixture_file_is_a_config_error() {
        let err = FixtureScraper::load_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::ConfigError(_)));
    }
}
