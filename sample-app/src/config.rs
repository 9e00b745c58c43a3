//! 应用配置
//!
//! 默认值与原始示例一致，可由带 `SAMPLEAPP_` 前缀的环境变量覆盖：
//! - `SAMPLEAPP_SERVICE_NAME` / `SAMPLEAPP_SERVICE_VERSION`
//! - `SAMPLEAPP_LOG_FILTER`：`EnvFilter` 指令，如 `info,mediator=debug`
//! - `SAMPLEAPP_LOG_FORMAT`：`pretty` 或 `json`
//!
use bon::Builder;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_PREFIX: &str = "SAMPLEAPP_";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    #[serde(alias = "text")]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT".into(),
                value: other.into(),
            }),
        }
    }
}

/// 应用配置；缺省字段取默认值（反序列化与构建器一致）
#[derive(Builder, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[builder(default = String::from("SampleApp"))]
    pub service_name: String,
    #[builder(default = String::from("1.0.0"))]
    pub service_version: String,
    #[builder(default = String::from("info"))]
    pub log_filter: String,
    #[builder(default)]
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// 从键值对覆盖默认配置；未识别的键忽略，已识别键的空值视为非法
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut cfg = Self::default();

        for (key, value) in vars {
            let Some(key) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match key {
                "SERVICE_NAME" => cfg.service_name = non_empty(key, value)?,
                "SERVICE_VERSION" => cfg.service_version = non_empty(key, value)?,
                "LOG_FILTER" => cfg.log_filter = non_empty(key, value)?,
                "LOG_FORMAT" => cfg.log_format = non_empty(key, value)?.parse()?,
                _ => {}
            }
        }

        Ok(cfg)
    }
}

fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.into(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_match_sample_service() {
        let cfg = AppConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(cfg.service_name, "SampleApp");
        assert_eq!(cfg.service_version, "1.0.0");
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn prefixed_vars_override_defaults() {
        let cfg = AppConfig::from_vars(vars(&[
            ("SAMPLEAPP_SERVICE_NAME", "Echo"),
            ("SAMPLEAPP_LOG_FORMAT", "JSON"),
            ("SAMPLEAPP_LOG_FILTER", "debug"),
            ("SERVICE_NAME", "ignored"),
            ("SAMPLEAPP_UNKNOWN", "ignored"),
        ]))
        .unwrap();

        assert_eq!(cfg.service_name, "Echo");
        assert_eq!(cfg.service_version, "1.0.0");
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_vars(vars(&[("SAMPLEAPP_LOG_FORMAT", "xml")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "LOG_FORMAT".into(),
                value: "xml".into()
            }
        );

        let err = AppConfig::from_vars(vars(&[("SAMPLEAPP_SERVICE_NAME", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "SERVICE_NAME"));
    }

    #[test]
    fn empty_unknown_keys_are_ignored() {
        let cfg = AppConfig::from_vars(vars(&[
            ("SAMPLEAPP_FOO", ""),
            ("SAMPLEAPP_LOG_FILTER", "warn"),
        ]))
        .unwrap();
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn builder_fills_unset_fields_with_defaults() {
        let cfg = AppConfig::builder()
            .service_name("Echo".to_string())
            .log_format(LogFormat::Json)
            .build();

        assert_eq!(cfg.service_name, "Echo");
        assert_eq!(cfg.service_version, "1.0.0");
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(AppConfig::builder().build(), AppConfig::default());
    }

    #[test]
    fn deserializes_partial_document() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"service_version":"2.0.0","log_format":"json"}"#).unwrap();

        assert_eq!(cfg.service_name, "SampleApp");
        assert_eq!(cfg.service_version, "2.0.0");
        assert_eq!(cfg.log_format, LogFormat::Json);

        let err = serde_json::from_str::<AppConfig>(r#"{"log_format":"xml"}"#);
        assert!(err.is_err());
    }
}
