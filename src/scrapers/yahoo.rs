use crate::config::{Config, YahooEndpoints};
use crate::errors::{Result, SnapshotError};
use crate::models::raw_quote::RawQuote;
use crate::scrapers::base::QuoteScraper;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

const REFERER: &str = "https://finance.yahoo.com/";

/// quoteSummary 模块，按优先级排列：同名字段以先出现的模块为准
pub const MODULES: [&str; 5] = ["price", "summaryDetail", "financialData", "defaultKeyStatistics", "quoteType"];

/// Yahoo Finance 报价抓取器
pub struct YahooScraper {
    client: Client,
    endpoints: YahooEndpoints,
    crumb: Mutex<Option<String>>,
    last_request: Mutex<Option<Instant>>,
    request_interval: Duration,
}

impl YahooScraper {
    /// 创建新的 Yahoo 抓取器
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()
            .map_err(SnapshotError::RequestError)?;

        Ok(Self {
            client,
            endpoints: config.yahoo.clone(),
            crumb: Mutex::new(None),
            last_request: Mutex::new(None),
            request_interval: Duration::from_millis(config.min_request_interval_ms),
        })
    }

    // 请求限速
    async fn wait_for_rate_limit(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(time) = *last {
            let elapsed = time.elapsed();
            if elapsed < self.request_interval {
                let wait_time = self.request_interval - elapsed;
                debug!("等待 {:?} 以遵守频率限制", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }

    /// 获取 crumb；首次调用时先访问 cookie 地址取得会话 cookie
    async fn crumb(&self) -> Result<String> {
        let mut cached = self.crumb.lock().await;
        if let Some(crumb) = cached.as_ref() {
            return Ok(crumb.clone());
        }

        // fc.yahoo.com 通常返回 404，但会设置 cookie
        if let Err(e) = self.client.get(&self.endpoints.cookie_url).header("Referer", REFERER).send().await {
            debug!("Cookie request failed: {}", e);
        }

        let response = self.client.get(&self.endpoints.crumb_url).header("Referer", REFERER).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SnapshotError::UpstreamError(format!(
                "Crumb request failed: HTTP status {}", status
            )));
        }

        let text = response.text().await?;
        let crumb = text.trim();
        if crumb.is_empty() || crumb.len() > 100 || crumb.contains(' ') || crumb.contains('<') {
            return Err(SnapshotError::UpstreamError("Yahoo returned an invalid crumb".to_string()));
        }

        info!("Obtained Yahoo crumb");
        *cached = Some(crumb.to_string());
        Ok(crumb.to_string())
    }

    async fn invalidate_crumb(&self) {
        *self.crumb.lock().await = None;
    }

    fn quote_summary_url(base: &str, ticker: &str) -> Result<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| SnapshotError::ConfigError(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SnapshotError::ConfigError("quoteSummary URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(ticker);
        Ok(url)
    }
}

#[async_trait]
impl QuoteScraper for YahooScraper {
    fn source_name(&self) -> &'static str {
        "yahoo"
    }

    async fn fetch_raw_quote(&self, ticker: &str) -> Result<RawQuote> {
        debug!("获取 {} 的 quoteSummary", ticker);

        self.wait_for_rate_limit().await;
        let crumb = self.crumb().await?;
        let modules = MODULES.join(",");

        let response = self.client
            .get(Self::quote_summary_url(&self.endpoints.quote_summary_url, ticker)?)
            .query(&[("modules", modules.as_str()), ("crumb", crumb.as_str())])
            .header("Referer", REFERER)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            // crumb 过期，下次请求重新获取
            self.invalidate_crumb().await;
            return Err(SnapshotError::UpstreamError(format!(
                "Yahoo rejected the request: HTTP status {}", status
            )));
        }

        let text = response.text().await?;
        // 未知代码时 Yahoo 返回 404 和错误载荷，交给解析函数处理
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(SnapshotError::UpstreamError(format!(
                "quoteSummary request failed: HTTP status {}", status
            )));
        }

        let raw = parse_quote_summary(&text)?;
        debug!("{} 字段数: {}", ticker, raw.len());
        Ok(raw)
    }
}

/// Parses a quoteSummary response body into a flat [`RawQuote`].
///
/// A "Not Found" error payload or an empty result list yields an empty record.
pub fn parse_quote_summary(body: &str) -> Result<RawQuote> {
    let json: Value = serde_json::from_str(body)?;

    let summary = json
        .get("quoteSummary")
        .ok_or_else(|| SnapshotError::UpstreamError("Missing quoteSummary in response".to_string()))?;

    if let Some(error) = summary.get("error").filter(|e| !e.is_null()) {
        let code = error.get("code").and_then(Value::as_str).unwrap_or_default();
        let description = error.get("description").and_then(Value::as_str).unwrap_or_default();
        if code == "Not Found" {
            return Ok(RawQuote::new());
        }
        return Err(SnapshotError::UpstreamError(format!("{}: {}", code, description)));
    }

    match summary
        .get("result")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
    {
        Some(result) => Ok(flatten_modules(result)),
        None => Ok(RawQuote::new()),
    }
}

/// 合并各模块字段：`{"raw": x, "fmt": "..."}` 取 raw，空对象和 null 丢弃
fn flatten_modules(result: &Value) -> RawQuote {
    let mut raw = RawQuote::new();

    for module in MODULES {
        let fields = match result.get(module).and_then(Value::as_object) {
            Some(fields) => fields,
            None => continue,
        };

        for (name, value) in fields {
            if raw.get(name).is_some() {
                continue;
            }
            if let Some(value) = flatten_value(value) {
                raw.insert(name.clone(), value);
            }
        }
    }

    raw
}

fn flatten_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => map.get("raw").filter(|v| !v.is_null()).cloned(),
        other => Some(other.clone()),
    }
}
