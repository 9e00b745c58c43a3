//! 中介者统一错误定义
//!
//! 覆盖启动期的注册配置错误、分发期的路由/类型错误、取消信号以及处理器失败，
//! 管道行为（behavior）只透传这些错误，不吞掉也不改写。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MediatorError {
    // --- 启动期配置 ---
    #[error("handler already registered: request={request}")]
    AlreadyRegistered { request: &'static str },

    #[error("missing handler registration: request={request}")]
    MissingHandler { request: &'static str },

    // --- 分发 ---
    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("request cancelled")]
    Cancelled,

    // --- 序列化 ---
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // --- 处理器 ---
    #[error("validation: {0}")]
    Validation(String),

    #[error("handler failed: request={request}, reason={reason}")]
    Handler {
        request: &'static str,
        reason: String,
    },
}

impl MediatorError {
    /// 处理器失败的便捷构造
    pub fn handler(request: &'static str, reason: impl Into<String>) -> Self {
        Self::Handler {
            request,
            reason: reason.into(),
        }
    }

    /// 是否为启动期（注册配置）错误
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRegistered { .. } | Self::MissingHandler { .. }
        )
    }
}

pub type MediatorResult<T> = Result<T, MediatorError>;
