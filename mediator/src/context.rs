use bon::Builder;
use tokio_util::sync::CancellationToken;

/// 请求上下文（Request Context）
///
/// 承载一次分发沿整条管道传递的横切信息：
/// - 取消信号（`CancellationToken`）：任一环节都可观察，取消后不再进入下一环节；
/// - 关联 ID（`correlation_id`）：用于日志与追踪的关联。
///
/// 典型用法：
/// ```rust
/// use mediator::context::RequestContext;
///
/// let ctx = RequestContext::builder()
///     .maybe_correlation_id(Some("cor-123".into()))
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct RequestContext {
    #[builder(default)]
    cancellation: CancellationToken,
    correlation_id: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}
