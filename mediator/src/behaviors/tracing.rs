use crate::{
    behavior::{BoxResponse, Next, PipelineBehavior},
    context::RequestContext,
    error::MediatorResult,
    request::BoxRequest,
};
use async_trait::async_trait;
use tracing::{Instrument, field};

/// 追踪行为
///
/// span 静态名为 `request`，动态名通过 `otel.name` 字段给出（即 `Request::NAME`），
/// 属性 `request` 为请求的 JSON 表示。span 随被包裹的 future 一同释放，
/// 因此无论成功、失败还是被取消，都只关闭一次。
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingBehavior;

#[async_trait]
impl PipelineBehavior for TracingBehavior {
    fn name(&self) -> &'static str {
        "tracing"
    }

    async fn handle(
        &self,
        ctx: &RequestContext,
        request: BoxRequest,
        next: Next,
    ) -> MediatorResult<BoxResponse> {
        let payload = request.to_json()?;
        let span = tracing::info_span!(
            "request",
            otel.name = request.name(),
            request = %payload,
            correlation_id = ctx.correlation_id(),
            otel.status_code = field::Empty,
            error = field::Empty,
        );

        let result = next.run(ctx, request).instrument(span.clone()).await;

        if let Err(err) = &result {
            span.record("otel.status_code", "ERROR");
            span.record("error", field::display(err));
        }
        result
    }
}
