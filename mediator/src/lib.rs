//! 进程内中介者（mediator）
//!
//! 提供“请求 → 管道行为 → 唯一处理器”的分发骨架：
//! - 请求（`request`）：不可变的意图值对象，类型即路由键；
//! - 处理器（`handler`）：每种请求类型有且仅有一个；
//! - 管道行为（`behavior`）：追踪、日志等横切关注点，按注册顺序嵌套包裹处理器；
//! - 中介者（`dispatcher`）：启动期构建、运行期只读的路由表，重复或缺失注册在启动期即报错；
//! - 发送端（`sender`）：宿主层提交请求的窄接口。
//!
//! 典型用法：
//! 1. 使用 `#[request]` 定义请求并实现 `RequestHandler`；
//! 2. 通过 `Mediator::builder()` 追加行为、注册处理器并 `build`；
//! 3. 在宿主层经由 `Sender::send` 提交请求。
//!
pub mod behavior;
pub mod behaviors;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;
mod pipeline;
pub mod request;
pub mod sender;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dispatcher::{Mediator, MediatorBuilder};
pub use mediator_macros::request;

// 允许在本 crate 内部通过 ::mediator 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::mediator 路径。
extern crate self as mediator;
