use crate::{context::RequestContext, error::MediatorResult, request::Request};
use async_trait::async_trait;

/// 发送端（Sender）
///
/// - 宿主层（控制器等）只依赖该边界提交请求；
/// - 带有泛型方法，通常以具体实现类型注入使用。
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send<R>(&self, ctx: &RequestContext, request: R) -> MediatorResult<R::Response>
    where
        R: Request;
}
