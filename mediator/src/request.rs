//! 请求（Request）
//!
//! 表达一次“意图”的不可变值对象，由调用方完整构造后提交给中介者，
//! 经管道消费一次后丢弃。命令（Command）是 `Response = ()` 的请求。
//!
use crate::error::MediatorResult;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// 应用层请求
///
/// 关联常量：
/// - `NAME`：请求的稳定名称，用于 span 命名、日志与路由诊断。避免依赖 `type_name::<T>()`。
///
/// 关联类型：
/// - `Response`：处理器返回值；“发出即忘”的命令使用 `()`。
///
/// 通常通过 [`request`](crate::request) 属性宏派生，而不是手写实现。
pub trait Request: Serialize + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;

    type Response: Send + 'static;
}

/// 类型擦除后的请求
///
/// 管道行为对所有请求类型统一生效，只能通过该视图检视请求：名称与序列化表示。
pub trait AnyRequest: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// 请求的 JSON 表示（用于 span 属性与日志）
    fn to_json(&self) -> MediatorResult<String>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<R: Request> AnyRequest for R {
    fn name(&self) -> &'static str {
        R::NAME
    }

    fn to_json(&self) -> MediatorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

impl dyn AnyRequest {
    /// 尝试还原为具体请求类型的引用
    pub fn downcast_ref<R: Request>(&self) -> Option<&R> {
        self.as_any().downcast_ref::<R>()
    }
}

pub type BoxRequest = Box<dyn AnyRequest>;
