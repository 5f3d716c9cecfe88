//! エンドポイントヘルスプローバー
//!
//! 1 URL につき 1 回だけ GET を送信する。リトライ・認証ヘッダーは付与しない。

use crate::error::MonitorError;
use api_monitor_common::config::MonitorConfig;
use api_monitor_common::types::HealthRecord;
use reqwest::Client;
use std::time::Instant;
use tracing::debug;

/// エンドポイントヘルスプローバー
#[derive(Debug, Clone)]
pub struct HealthProber {
    /// HTTPクライアント
    client: Client,
    /// デコード失敗をエラーにするか
    strict_decode: bool,
}

impl HealthProber {
    /// 設定からプローバーを作成
    ///
    /// タイムアウトは設定されている場合のみ適用する。
    pub fn new(config: &MonitorConfig) -> Result<Self, MonitorError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MonitorError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            strict_decode: config.strict_decode,
        })
    }

    /// 単一URLのヘルスチェック
    ///
    /// 接続エラー・URL不正・ボディ読み込み失敗は `Request` エラーになる。
    /// ボディのデコード失敗は strict モードでのみ `BodyDecode` エラーとなり、
    /// それ以外は `false` として扱う。
    pub async fn probe(&self, url: &str) -> Result<bool, MonitorError> {
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let is_healthy = decode_health(&body, self.strict_decode)?;

        debug!(
            url = %url,
            status = %status,
            latency_ms = start.elapsed().as_millis() as u64,
            is_healthy,
            "Probe completed"
        );
        Ok(is_healthy)
    }
}

/// レスポンスボディから稼働状態を取得
pub fn decode_health(body: &[u8], strict: bool) -> Result<bool, MonitorError> {
    if strict {
        let record: HealthRecord =
            serde_json::from_slice(body).map_err(MonitorError::BodyDecode)?;
        return Ok(record.is_healthy);
    }

    match HealthRecord::from_slice(body) {
        Ok(record) => Ok(record.is_healthy),
        Err(e) => {
            debug!(error = %e, "Body is not a health record, treating as unhealthy");
            Ok(false)
        }
    }
}
