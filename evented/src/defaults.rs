//! 进程级默认配置（EmitterDefaults）
//!
//! 新建注册表时读取一次默认监听器上限，之后不再重读；
//! 修改默认值不会影响已构造的实例。
//!
use crate::limit::ListenerLimit;
use std::sync::atomic::{AtomicUsize, Ordering};

static DEFAULT_MAX_LISTENERS: AtomicUsize =
    AtomicUsize::new(EmitterDefaults::INITIAL_MAX_LISTENERS);

/// 进程级默认值的读写入口
///
/// ```
/// use evented::defaults::EmitterDefaults;
///
/// assert_eq!(EmitterDefaults::INITIAL_MAX_LISTENERS, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmitterDefaults;

impl EmitterDefaults {
    pub const INITIAL_MAX_LISTENERS: usize = 10;

    /// 当前默认监听器上限
    pub fn max_listeners() -> usize {
        DEFAULT_MAX_LISTENERS.load(Ordering::Relaxed)
    }

    /// 设置默认监听器上限（按非负整数强制转换），返回旧值
    pub fn set_max_listeners(limit: impl Into<ListenerLimit>) -> usize {
        let limit = limit.into();
        let previous = DEFAULT_MAX_LISTENERS.swap(limit.value(), Ordering::Relaxed);
        tracing::trace!(previous, current = limit.value(), "default max listeners changed");
        previous
    }

    /// 恢复初始默认值
    pub fn reset() {
        DEFAULT_MAX_LISTENERS.store(Self::INITIAL_MAX_LISTENERS, Ordering::Relaxed);
    }
}
