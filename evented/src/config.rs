//! 注册表配置（EmitterConfig）
//!
use crate::limit::ListenerLimit;
use crate::warning::{TracingWarningSink, WarningSink};
use bon::Builder;
use std::fmt;
use std::rc::Rc;

/// 单个注册表实例的配置
///
/// 未显式设置上限时，由 `EventEmitter::with_config` 在构造注册表的那一刻读取进程级默认值。
///
/// ```
/// use evented::{EmitterConfig, ListenerLimit};
///
/// let config = EmitterConfig::builder().max_listeners(3).build();
/// assert_eq!(config.max_listeners, Some(ListenerLimit::new(3)));
/// assert_eq!(EmitterConfig::default().max_listeners, None);
/// ```
#[derive(Clone, Builder)]
pub struct EmitterConfig {
    #[builder(into)]
    pub max_listeners: Option<ListenerLimit>,
    #[builder(default = Rc::new(TracingWarningSink) as Rc<dyn WarningSink>)]
    pub warning_sink: Rc<dyn WarningSink>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for EmitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterConfig")
            .field("max_listeners", &self.max_listeners)
            .finish_non_exhaustive()
    }
}
