//! URLリストの読み込み
//!
//! 環境ごとのテキストファイル（1行1URL）から監視対象URLを取得する。

use crate::error::MonitorError;
use api_monitor_common::types::Environment;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 環境に対応するURLリストファイルのパス
pub fn source_path(dir: &Path, environment: Environment) -> PathBuf {
    dir.join(environment.file_name())
}

/// 環境に対応するURLリストを読み込む
///
/// ファイルが開けない場合は `SourceFileUnavailable` を返す。
/// 別環境へのフォールバックやリトライは行わない。
/// UTF-8 として不正な行もそのままURLとして渡し、プローブ側のエラーとする。
pub async fn read_urls(dir: &Path, environment: Environment) -> Result<Vec<String>, MonitorError> {
    let path = source_path(dir, environment);
    let contents = tokio::fs::read(&path).await.map_err(|source| {
        MonitorError::SourceFileUnavailable {
            path: path.clone(),
            source,
        }
    })?;

    let urls = parse_urls(&contents);
    debug!(
        environment = %environment,
        path = %path.display(),
        count = urls.len(),
        "Loaded URL list"
    );
    Ok(urls)
}

/// ファイル内容をURLリストに変換
///
/// 各行の前後の空白を除去し、空行は除外する。重複と順序はそのまま保持する。
/// URLとしての妥当性は検証せず、不正なバイト列は置換文字に変換する。
pub fn parse_urls(contents: &[u8]) -> Vec<String> {
    contents
        .split(|byte| *byte == b'\n')
        .map(String::from_utf8_lossy)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
