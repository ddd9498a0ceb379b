use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    // 上游返回非成功状态码或错误载荷
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;

// 用于从字符串创建错误
impl From<String> for SnapshotError {
    fn from(s: String) -> Self {
        SnapshotError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for SnapshotError {
    fn from(s: &str) -> Self {
        SnapshotError::Unknown(s.to_string())
    }
}
