//! 注册表统一错误定义
//!
//! 仅包含两类：边界处的参数校验失败，以及监听器在 `emit` 期间返回的错误。
//! 超出监听器上限的告警属于通知而非错误，不在此处出现。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// 监听器返回的错误，原样透传给 `emit` 的调用方
    #[error(transparent)]
    Listener(#[from] anyhow::Error),
}

impl EmitterError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// 若为监听器错误，取回其原始 `anyhow::Error`
    pub fn into_listener_error(self) -> Option<anyhow::Error> {
        match self {
            Self::Listener(err) => Some(err),
            _ => None,
        }
    }
}

/// 统一 Result 类型别名
pub type EmitterResult<T> = Result<T, EmitterError>;
