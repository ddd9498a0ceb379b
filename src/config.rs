use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::{Result, SnapshotError};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Yahoo Finance 接口地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahooEndpoints {
    /// 只用于取得会话 cookie
    pub cookie_url: String,
    pub crumb_url: String,
    /// 代码作为最后一个路径段追加
    pub quote_summary_url: String,
}

impl Default for YahooEndpoints {
    fn default() -> Self {
        Self {
            cookie_url: "https://fc.yahoo.com".to_string(),
            crumb_url: "https://query1.finance.yahoo.com/v1/test/getcrumb".to_string(),
            quote_summary_url: "https://query2.finance.yahoo.com/v10/finance/quoteSummary/".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub static_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub min_request_interval_ms: u64,
    pub user_agent: String,
    pub yahoo: YahooEndpoints,
}

impl Config {
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: None,
            allowed_origins: Vec::new(),
            request_timeout_secs: 30,
            min_request_interval_ms: 250,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            yahoo: YahooEndpoints::default(),
        }
    }

    pub fn with_bind_addr(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    pub fn with_static_dir(mut self, dir: &str) -> Self {
        self.static_dir = Some(PathBuf::from(dir));
        self
    }

    pub fn with_allowed_origin(mut self, origin: &str) -> Self {
        self.allowed_origins.push(origin.trim_end_matches('/').to_string());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_min_request_interval_ms(mut self, ms: u64) -> Self {
        self.min_request_interval_ms = ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_yahoo_endpoints(mut self, endpoints: YahooEndpoints) -> Self {
        self.yahoo = endpoints;
        self
    }

    /// 解析监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| SnapshotError::ConfigError(format!("Invalid bind address {}: {}", self.bind_addr, e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
