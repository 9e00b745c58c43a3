//! 内置管道行为
//!
//! - `TracingBehavior`：为每次分发打开以请求名称命名的 span，并附带请求的 JSON 表示；
//! - `LoggingBehavior`：进入/退出时输出结构化日志与耗时。
//!
pub mod logging;
pub mod tracing;

pub use self::logging::LoggingBehavior;
pub use self::tracing::TracingBehavior;
