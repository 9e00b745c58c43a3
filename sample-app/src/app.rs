use crate::commands::SendEcho;
use crate::controllers::{ActionResult, HomeController};
use crate::handlers::SendEchoHandler;
use mediator::behaviors::{LoggingBehavior, TracingBehavior};
use mediator::context::RequestContext;
use mediator::error::MediatorResult;
use mediator::sender::Sender;
use mediator::Mediator;
use std::sync::Arc;

/// 组装应用中介者：追踪行为在外层，日志行为在内层
pub fn build_mediator() -> MediatorResult<Mediator> {
    Mediator::builder()
        .behavior(TracingBehavior)
        .behavior(LoggingBehavior)
        .register::<SendEcho, _>(Arc::new(SendEchoHandler))?
        .require::<SendEcho>()
        .build()
}

/// 依次执行首页控制器的三个动作
pub async fn run_actions<S: Sender>(
    controller: &HomeController<S>,
    ctx: &RequestContext,
) -> MediatorResult<Vec<ActionResult>> {
    let index = controller.index(ctx).await?;
    let privacy = controller.privacy();
    let error = controller.error(ctx);
    Ok(vec![index, privacy, error])
}
