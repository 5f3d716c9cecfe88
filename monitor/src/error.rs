//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 致命的なエラー（メニュー入力不正・URLリスト読み込み失敗）は `main` まで伝播し、
//! エンドポイント単位のエラー（リクエスト失敗・デコード失敗）はランナーで回復する。

use std::path::PathBuf;
use thiserror::Error;

/// monitor error type
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Menu input outside of the offered options
    #[error("Invalid option: {0}")]
    InvalidMenuChoice(String),

    /// URL source file could not be opened or read
    #[error("Error on open {}: {source}", path.display())]
    SourceFileUnavailable {
        /// Path of the URL source file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Transport level failure (DNS, connection refused, malformed URL, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body is not a health record
    #[error("Body decode failed: {0}")]
    BodyDecode(#[source] serde_json::Error),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MonitorError {
    /// プロセス全体を終了させるエラーか
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Request(_) | Self::BodyDecode(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        1
    }
}
