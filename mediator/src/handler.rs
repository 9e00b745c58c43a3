use crate::{context::RequestContext, error::MediatorResult, request::Request};
use async_trait::async_trait;

/// 请求处理器：每种请求类型有且仅有一个，位于管道最内层
#[async_trait]
pub trait RequestHandler<R>: Send + Sync
where
    R: Request,
{
    async fn handle(&self, ctx: &RequestContext, request: R) -> MediatorResult<R::Response>;
}
