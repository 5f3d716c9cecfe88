//! 監視パス
//!
//! 1 環境分のURLリストを順番にチェックし、結果を出力する。

use crate::error::MonitorError;
use crate::health::HealthProber;
use crate::source;
use api_monitor_common::types::Environment;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// 監視パスの集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// チェックしたURL数
    pub total: usize,
    /// 稼働中
    pub healthy: usize,
    /// 非稼働
    pub unhealthy: usize,
    /// リクエスト・デコード失敗
    pub failed: usize,
}

/// 監視ランナー
#[derive(Debug, Clone)]
pub struct MonitorRunner {
    prober: HealthProber,
    source_dir: PathBuf,
}

impl MonitorRunner {
    /// 新しいランナーを作成
    pub fn new(prober: HealthProber, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            prober,
            source_dir: source_dir.into(),
        }
    }

    /// 1 環境分の監視パスを実行
    ///
    /// URLリストの読み込み失敗は致命的エラーとして返す。
    /// 個々のエンドポイントの失敗はエラー行を出力して次のURLへ進む。
    pub async fn run_pass<W: Write>(
        &self,
        environment: Environment,
        out: &mut W,
    ) -> Result<PassSummary, MonitorError> {
        writeln!(out)?;
        writeln!(out, "-- API MONITOR STARTED --")?;
        writeln!(out)?;

        let urls = source::read_urls(&self.source_dir, environment).await?;

        info!(
            environment = %environment,
            count = urls.len(),
            "Monitoring pass started"
        );

        let mut summary = PassSummary::default();
        for url in &urls {
            summary.total += 1;
            match self.prober.probe(url).await {
                Ok(is_healthy) => {
                    if is_healthy {
                        summary.healthy += 1;
                    } else {
                        summary.unhealthy += 1;
                    }
                    writeln!(out, "{}", format_report(url, is_healthy))?;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    summary.failed += 1;
                    warn!(url = %url, error = %e, "Health check failed");
                    writeln!(out, "Error: {} - {}", url, e)?;
                }
            }
            out.flush()?;
        }

        writeln!(out)?;
        writeln!(out, "-- API MONITOR ENDED --")?;
        writeln!(out)?;
        out.flush()?;

        info!(
            environment = %environment,
            total = summary.total,
            healthy = summary.healthy,
            unhealthy = summary.unhealthy,
            failed = summary.failed,
            "Monitoring pass ended"
        );
        Ok(summary)
    }
}

/// レポート行
pub fn format_report(url: &str, is_healthy: bool) -> String {
    format!("API: {}  - IsHealthy: {}", url, is_healthy)
}
