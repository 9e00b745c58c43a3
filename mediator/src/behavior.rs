//! 管道行为（Pipeline Behavior）
//!
//! 横切关注点（追踪 span、结构化日志等）以行为的形式包裹处理器执行，
//! 处理器本身对其一无所知：
//! - 行为按注册顺序进入、按相反顺序退出；
//! - 每个行为通过 [`Next`] 调用管道的剩余部分，`Next::run` 消耗自身，最多调用一次；
//! - 不调用 `Next` 即为主动短路，此时行为必须返回替代结果；
//! - 行为持有的资源（span、守卫等）须在所有退出路径上释放，错误原样向外传播。
//!
use crate::{
    context::RequestContext,
    error::{MediatorError, MediatorResult},
    request::BoxRequest,
};
use async_trait::async_trait;
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxResponse = Box<dyn Any + Send>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// 管道中的一个环节：下一个行为，或最内层的处理器
pub(crate) type ChainFn = Arc<
    dyn for<'a> Fn(BoxRequest, &'a RequestContext) -> BoxFuture<'a, MediatorResult<BoxResponse>>
        + Send
        + Sync,
>;

/// 以高阶 trait 约束推断闭包签名，再擦除为 [`ChainFn`]
pub(crate) fn chain_fn<F>(f: F) -> ChainFn
where
    F: for<'a> Fn(BoxRequest, &'a RequestContext) -> BoxFuture<'a, MediatorResult<BoxResponse>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// 管道剩余部分的续体
pub struct Next {
    inner: ChainFn,
}

impl Next {
    pub(crate) fn new(inner: ChainFn) -> Self {
        Self { inner }
    }

    /// 进入下一环节；上下文已取消时直接返回 [`MediatorError::Cancelled`]
    pub async fn run(self, ctx: &RequestContext, request: BoxRequest) -> MediatorResult<BoxResponse> {
        if ctx.is_cancelled() {
            return Err(MediatorError::Cancelled);
        }
        (self.inner)(request, ctx).await
    }
}

/// 对所有请求类型生效的横切行为
#[async_trait]
pub trait PipelineBehavior: Send + Sync {
    /// 行为名称（用于诊断与启动日志）
    fn name(&self) -> &'static str;

    async fn handle(
        &self,
        ctx: &RequestContext,
        request: BoxRequest,
        next: Next,
    ) -> MediatorResult<BoxResponse>;
}
