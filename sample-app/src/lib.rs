//! 示例应用：首页控制器经由中介者分发回显命令
//!
//! - `config`：环境变量配置；
//! - `telemetry`：tracing 订阅者初始化；
//! - `commands` / `handlers`：`SendEcho` 命令及其处理器；
//! - `controllers`：首页控制器（Index / Privacy / Error）；
//! - `app`：中介者组装与动作编排。
//!
pub mod app;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod handlers;
pub mod telemetry;
