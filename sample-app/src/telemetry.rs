//! 追踪/日志初始化
//!
//! 以 `tracing-subscriber` 的 fmt 订阅者输出结构化日志，过滤规则来自配置
//! （`EnvFilter` 语法）。导出到外部采集器不在此处理。
//!
use crate::config::{AppConfig, LogFormat};
use thiserror::Error;
use tracing::Span;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("subscriber init failed: {0}")]
    Init(String),
}

/// 安装进程级订阅者；重复调用返回 `Init` 错误
pub fn init(config: &AppConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

/// 服务根 span：其下所有 span 与事件都携带服务名与版本
pub fn service_span(config: &AppConfig) -> Span {
    tracing::info_span!(
        "service",
        service.name = %config.service_name,
        service.version = %config.service_version,
    )
}
