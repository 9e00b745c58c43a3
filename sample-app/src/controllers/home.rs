//! 首页控制器
//!
//! 只负责构造请求并交给发送端，返回待渲染的视图描述；渲染由宿主层负责。
//!
use crate::commands::SendEcho;
use mediator::context::RequestContext;
use mediator::error::MediatorResult;
use mediator::sender::Sender;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// 错误页模型
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorViewModel {
    pub request_id: Option<String>,
}

impl ErrorViewModel {
    pub fn show_request_id(&self) -> bool {
        self.request_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// 动作结果：视图名、可选模型与缓存策略
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionResult {
    pub view: &'static str,
    pub model: Option<ErrorViewModel>,
    /// 禁止缓存（错误页）
    pub no_store: bool,
}

impl ActionResult {
    pub fn view(view: &'static str) -> Self {
        Self {
            view,
            model: None,
            no_store: false,
        }
    }
}

pub struct HomeController<S> {
    sender: Arc<S>,
}

impl<S: Sender> HomeController<S> {
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    pub async fn index(&self, ctx: &RequestContext) -> MediatorResult<ActionResult> {
        tracing::info_span!("Index", pagename = "index").in_scope(|| {
            tracing::info!(action = "Index", "action invoked");
        });

        let span = tracing::info_span!("Index", pagename = "index after");
        self.sender
            .send(ctx, SendEcho::new("message test"))
            .instrument(span)
            .await?;

        Ok(ActionResult::view("Index"))
    }

    pub fn privacy(&self) -> ActionResult {
        let outer = tracing::info_span!("Privacy", pagename = "privacy");
        let _outer = outer.enter();
        let inner = tracing::info_span!("Privacy", pagename = "privacy after");
        let _inner = inner.enter();

        tracing::info!(action = "Privacy", "action invoked");
        ActionResult::view("Privacy")
    }

    /// 请求标识取上下文关联 id（即本次分发的追踪标识），缺失时新生成 UUID
    pub fn error(&self, ctx: &RequestContext) -> ActionResult {
        let request_id = ctx
            .correlation_id()
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        ActionResult {
            view: "Error",
            model: Some(ErrorViewModel {
                request_id: Some(request_id),
            }),
            no_store: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mediator::error::MediatorError;
    use mediator::request::{AnyRequest, Request};
    use mediator::testing;
    use std::any::Any;
    use std::sync::Mutex;

    // 记录被发送的请求，不经过管道
    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Sender for RecordingSender {
        async fn send<R>(&self, _ctx: &RequestContext, request: R) -> MediatorResult<R::Response>
        where
            R: Request,
        {
            self.sent.lock().unwrap().push(request.to_json()?);
            if self.fail {
                return Err(MediatorError::handler(R::NAME, "unavailable"));
            }
            let unit: Box<dyn Any> = Box::new(());
            unit.downcast::<R::Response>()
                .map(|r| *r)
                .map_err(|_| MediatorError::TypeMismatch {
                    expected: "()",
                    found: "unknown",
                })
        }
    }

    #[tokio::test]
    async fn index_sends_one_echo_inside_second_span() {
        let (captured, _guard) = testing::capture();
        let sender = Arc::new(RecordingSender::default());
        let controller = HomeController::new(sender.clone());

        let result = controller.index(&RequestContext::default()).await.unwrap();

        assert_eq!(result, ActionResult::view("Index"));
        assert_eq!(
            *sender.sent.lock().unwrap(),
            vec![r#"{"message":"message test"}"#.to_string()]
        );
        let spans = captured.spans_named("Index");
        let pages: Vec<_> = spans.iter().filter_map(|s| s.field("pagename")).collect();
        assert_eq!(pages, vec!["index", "index after"]);
        assert!(spans.iter().all(|s| s.closed == 1));
        assert_eq!(captured.events_with_message("action invoked").len(), 1);
    }

    #[tokio::test]
    async fn index_propagates_send_failure() {
        let sender = Arc::new(RecordingSender {
            fail: true,
            ..Default::default()
        });
        let controller = HomeController::new(sender);

        let err = controller.index(&RequestContext::default()).await.unwrap_err();
        assert!(matches!(err, MediatorError::Handler { .. }));
    }

    #[test]
    fn privacy_opens_nested_spans_and_logs_action() {
        let (captured, _guard) = testing::capture();
        let controller = HomeController::new(Arc::new(RecordingSender::default()));

        let result = controller.privacy();

        assert_eq!(result.view, "Privacy");
        let pages: Vec<_> = captured
            .spans_named("Privacy")
            .iter()
            .filter_map(|s| s.field("pagename").map(str::to_owned))
            .collect();
        assert_eq!(pages, vec!["privacy", "privacy after"]);
        let events = captured.events_with_message("action invoked");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("action"), Some("Privacy"));
    }

    #[test]
    fn error_uses_correlation_id() {
        let controller = HomeController::new(Arc::new(RecordingSender::default()));
        let ctx = RequestContext::builder()
            .maybe_correlation_id(Some("cor-9".into()))
            .build();

        let result = controller.error(&ctx);

        assert_eq!(result.view, "Error");
        assert!(result.no_store);
        let model = result.model.unwrap();
        assert_eq!(model.request_id.as_deref(), Some("cor-9"));
        assert!(model.show_request_id());
    }

    #[test]
    fn error_ignores_local_span_ids() {
        let (_captured, _guard) = testing::capture();
        let controller = HomeController::new(Arc::new(RecordingSender::default()));
        let ctx = RequestContext::builder()
            .maybe_correlation_id(Some("cor-7".into()))
            .build();

        let span = tracing::info_span!("Error");
        let result = span.in_scope(|| controller.error(&ctx));

        let model = result.model.unwrap();
        assert_eq!(model.request_id.as_deref(), Some("cor-7"));
    }

    #[test]
    fn error_falls_back_to_generated_id() {
        let controller = HomeController::new(Arc::new(RecordingSender::default()));
        let result = controller.error(&RequestContext::default());
        let id = result.model.and_then(|m| m.request_id).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn empty_request_id_is_hidden() {
        let model = ErrorViewModel {
            request_id: Some(String::new()),
        };
        assert!(!model.show_request_id());
        assert!(!ErrorViewModel { request_id: None }.show_request_id());
    }
}
