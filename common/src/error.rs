//! エラー型定義
//!
//! 共通レイヤーのエラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Unknown environment name
    #[error("Unknown environment: {0} (expected 'sandbox' or 'production')")]
    UnknownEnvironment(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
