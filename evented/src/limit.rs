//! 监听器上限（ListenerLimit）
//!
//! 非负整数值对象。所有输入都经由同一套规则强制转换：
//! - 负数、NaN 与非数值输入一律为 0；
//! - 浮点数向零截断，正无穷饱和为 `usize::MAX`；
//! - 数值字符串按数值处理。
//!
//! 不存在“无上限”的哨兵值：0 表示从第一个监听器起就会告警。
//!
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 监听器上限
///
/// # 示例
///
/// ```
/// use evented::limit::ListenerLimit;
///
/// assert_eq!(ListenerLimit::from(20).value(), 20);
/// assert_eq!(ListenerLimit::from(-100).value(), 0);
/// assert_eq!(ListenerLimit::from(f64::NAN).value(), 0);
/// assert_eq!(ListenerLimit::from("abc").value(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerLimit(usize);

impl ListenerLimit {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> usize {
        self.0
    }

    /// `count` 个监听器是否已超过上限
    pub const fn is_exceeded_by(&self, count: usize) -> bool {
        count > self.0
    }
}

impl fmt::Display for ListenerLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ListenerLimit> for usize {
    fn from(limit: ListenerLimit) -> Self {
        limit.0
    }
}

impl From<usize> for ListenerLimit {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<u32> for ListenerLimit {
    fn from(value: u32) -> Self {
        Self(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

impl From<u64> for ListenerLimit {
    fn from(value: u64) -> Self {
        Self(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

impl From<i32> for ListenerLimit {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i64> for ListenerLimit {
    fn from(value: i64) -> Self {
        if value <= 0 {
            return Self(0);
        }
        Self(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

impl From<f64> for ListenerLimit {
    fn from(value: f64) -> Self {
        // `as` 对 NaN 取 0，对负数取 0，对超范围值饱和
        Self(value.trunc() as usize)
    }
}

impl From<&str> for ListenerLimit {
    fn from(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map(Self::from)
            .unwrap_or_default()
    }
}

impl From<&Value> for ListenerLimit {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Self::from(u)
                } else if let Some(i) = n.as_i64() {
                    Self::from(i)
                } else {
                    n.as_f64().map(Self::from).unwrap_or_default()
                }
            }
            Value::String(text) => Self::from(text.as_str()),
            _ => Self(0),
        }
    }
}

impl From<Value> for ListenerLimit {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}
