//! 测试辅助：捕获 span 与事件
//!
//! 以 `tracing-subscriber` 的 `Layer` 记录 span 的创建/关闭与事件字段，
//! 通过线程局部默认订阅者安装，适合 `current_thread` 运行时下的测试。
//!
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Debug)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub fields: HashMap<String, String>,
    pub closed: usize,
}

impl CapturedSpan {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// 动态 span 名（`otel.name`）优先，否则为静态名称
    pub fn display_name(&self) -> &str {
        self.field("otel.name").unwrap_or(self.name)
    }
}

#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

#[derive(Default)]
struct Inner {
    spans: Vec<CapturedSpan>,
    by_id: HashMap<u64, usize>,
    events: Vec<CapturedEvent>,
}

/// 已捕获的数据视图
#[derive(Clone, Default)]
pub struct Captured {
    inner: Arc<Mutex<Inner>>,
}

impl Captured {
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.lock().spans.clone()
    }

    pub fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans()
            .into_iter()
            .filter(|s| s.display_name() == name)
            .collect()
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().events.clone()
    }

    pub fn events_with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message() == Some(message))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

struct CaptureLayer {
    captured: Captured,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);

        let mut inner = self.captured.lock();
        let index = inner.spans.len();
        inner.spans.push(CapturedSpan {
            name: attrs.metadata().name(),
            fields: visitor.0,
            closed: 0,
        });
        inner.by_id.insert(id.into_u64(), index);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        values.record(&mut visitor);

        let mut inner = self.captured.lock();
        if let Some(&index) = inner.by_id.get(&id.into_u64()) {
            inner.spans[index].fields.extend(visitor.0);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.captured.lock().events.push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }

    fn on_close(&self, id: Id, _ctx: Context<'_, S>) {
        let mut inner = self.captured.lock();
        if let Some(index) = inner.by_id.remove(&id.into_u64()) {
            inner.spans[index].closed += 1;
        }
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

/// 安装捕获订阅者为当前线程默认订阅者；守卫释放后恢复
pub fn capture() -> (Captured, DefaultGuard) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        captured: captured.clone(),
    });
    let guard = tracing::subscriber::set_default(subscriber);
    (captured, guard)
}
