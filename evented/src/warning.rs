//! 监听器上限告警（Warning Sink）
//!
//! 某个事件键的监听器数量首次超过上限时，注册表对该键调用一次告警出口。
//! 告警只是通知：不会中断注册，也不会返回错误。
//!
use crate::key::EventKey;
use std::fmt;

/// 超限告警内容
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxListenersExceeded {
    pub key: EventKey,
    pub count: usize,
    pub limit: usize,
}

impl fmt::Display for MaxListenersExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "possible listener leak detected: {} listeners added for event `{}` (max {}); \
             use set_max_listeners() to increase the limit",
            self.count, self.key, self.limit
        )
    }
}

/// 告警出口
pub trait WarningSink {
    fn warn(&self, warning: &MaxListenersExceeded);
}

impl<F> WarningSink for F
where
    F: Fn(&MaxListenersExceeded),
{
    fn warn(&self, warning: &MaxListenersExceeded) {
        self(warning)
    }
}

/// 默认出口：写入 `tracing` 的 warn 级别
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn warn(&self, warning: &MaxListenersExceeded) {
        tracing::warn!(
            event = %warning.key,
            count = warning.count,
            limit = warning.limit,
            "{warning}"
        );
    }
}
