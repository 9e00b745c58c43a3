use crate::{
    behavior::{BoxResponse, Next, PipelineBehavior},
    context::RequestContext,
    error::MediatorResult,
    request::BoxRequest,
};
use async_trait::async_trait;
use std::time::Instant;

/// 日志行为：进入与退出各输出一条结构化日志，失败以 `warn` 级别记录后原样返回
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingBehavior;

#[async_trait]
impl PipelineBehavior for LoggingBehavior {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn handle(
        &self,
        ctx: &RequestContext,
        request: BoxRequest,
        next: Next,
    ) -> MediatorResult<BoxResponse> {
        let name = request.name();
        let started = Instant::now();
        tracing::info!(request = name, "handling request");

        let result = next.run(ctx, request).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(request = name, elapsed_ms, "request handled"),
            Err(err) => tracing::warn!(request = name, elapsed_ms, error = %err, "request failed"),
        }
        result
    }
}
