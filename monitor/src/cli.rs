//! CLI module for api-monitor
//!
//! Without `--env` the interactive menu is started. With `--env` a single
//! monitoring pass runs and the process exits.

use api_monitor_common::config::MonitorConfig;
use api_monitor_common::error::CommonError;
use api_monitor_common::types::Environment;
use clap::Parser;
use std::path::PathBuf;

/// API Monitor - Health checker for sandbox/production API endpoints
#[derive(Parser, Debug)]
#[command(name = "api-monitor")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    API_MONITOR_SOURCE_DIR       Directory containing sandbox.txt / production.txt (default: .)
    API_MONITOR_TIMEOUT_SECS     Per-request timeout in seconds (default: none)
    API_MONITOR_STRICT_DECODE    Report undecodable bodies as errors (default: false)
    API_MONITOR_LOG_LEVEL        Log level written to stderr (default: warn)
"#)]
pub struct Cli {
    /// Run a single monitoring pass for this environment and exit
    #[arg(short, long, value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Directory containing the URL list files
    #[arg(long, env = "API_MONITOR_SOURCE_DIR", default_value = ".")]
    pub source_dir: PathBuf,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, env = "API_MONITOR_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Treat a response body that is not a health record as an error
    #[arg(long, env = "API_MONITOR_STRICT_DECODE")]
    pub strict_decode: bool,
}

impl Cli {
    /// モニター設定に変換
    pub fn to_config(&self) -> MonitorConfig {
        MonitorConfig {
            source_dir: self.source_dir.clone(),
            request_timeout_secs: self.timeout_secs,
            strict_decode: self.strict_decode,
        }
    }
}

fn parse_environment(value: &str) -> Result<Environment, CommonError> {
    value.parse::<Environment>()
}
