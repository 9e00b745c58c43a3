use crate::commands::SendEcho;
use async_trait::async_trait;
use mediator::context::RequestContext;
use mediator::error::MediatorResult;
use mediator::handler::RequestHandler;

/// 回显处理器：每次调用打开一个 span 并输出一条日志
pub struct SendEchoHandler;

#[async_trait]
impl RequestHandler<SendEcho> for SendEchoHandler {
    async fn handle(&self, _ctx: &RequestContext, request: SendEcho) -> MediatorResult<()> {
        let span = tracing::info_span!("SendEchoHandler", message = %request.message);

        span.in_scope(|| {
            tracing::info!(
                echo.message = %request.message,
                "Received message: {}",
                request.message
            );
        });
        Ok(())
    }
}
