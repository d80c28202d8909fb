//! 同步发布/订阅注册表（evented）
//!
//! 调用方按事件键注册监听器，之后通过 `emit` 同步、按注册顺序调用该键在触发时刻
//! 已注册的全部监听器：
//! - 事件键（`key`）：文本键或唯一令牌；
//! - 监听器（`listener`）：按句柄身份比较的回调，分持久与一次性两种模式；
//! - 注册表（`emitter`）：快照触发、重入安全、一次性监听器的即时移除；
//! - 上限与告警（`limit`、`defaults`、`warning`）：超过上限时每个键告警一次；
//! - 宿主组合（`host`）：任意类型通过委托获得注册表能力，配合 `#[evented]` 宏。
//!
//! 典型用法：
//! 1. 创建 `EventEmitter<A>`，`A` 为事件参数类型；
//! 2. 用 `Listener::new` 包装回调，保留句柄以便之后移除；
//! 3. `on/once` 注册，`emit` 触发，`off` 移除。
//!
pub mod config;
pub mod defaults;
pub mod emitter;
pub mod error;
pub mod host;
pub mod key;
pub mod limit;
pub mod listener;
pub mod warning;

pub use config::EmitterConfig;
pub use defaults::EmitterDefaults;
pub use emitter::EventEmitter;
pub use error::{EmitterError, EmitterResult};
pub use host::Evented;
pub use key::{EventKey, Token};
pub use limit::ListenerLimit;
pub use listener::{Listener, ListenerMode, RawListener};
pub use warning::{MaxListenersExceeded, TracingWarningSink, WarningSink};

#[cfg(feature = "macros")]
pub use evented_macros::evented;
