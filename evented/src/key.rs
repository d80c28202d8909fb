//! 事件键（EventKey）
//!
//! 监听器按事件键分组。键有两种互不相交的形态：
//! - `Name`：文本键，按字符串内容比较；
//! - `Token`：不透明的唯一令牌，按身份比较，描述文本不参与比较。
//!
//! 动态输入（如 JSON）在 `EventKey::from_value` 处一次性校验，
//! 注册表内部不再做任何类型检查。
//!
use crate::error::{EmitterError, EmitterResult};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// 唯一令牌，可作为与任何文本键都不相等的事件键
///
/// # 示例
///
/// ```
/// use evented::key::Token;
///
/// let a = Token::with_description("ready");
/// let b = Token::with_description("ready");
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone)]
pub struct Token {
    id: Uuid,
    description: Option<Arc<str>>,
}

impl Token {
    /// 分配一个新的令牌
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: None,
        }
    }

    /// 分配一个带描述的新令牌；描述只用于展示
    pub fn with_description(description: impl Into<Arc<str>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: Some(description.into()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Token({desc})"),
            None => write!(f, "Token({})", self.id),
        }
    }
}

/// 事件键
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKey {
    Name(Arc<str>),
    Token(Token),
}

impl EventKey {
    /// 从动态值构造事件键：仅接受字符串
    ///
    /// ```
    /// use evented::key::EventKey;
    /// use serde_json::json;
    ///
    /// assert_eq!(EventKey::from_value(&json!("tick")).unwrap(), EventKey::from("tick"));
    /// assert!(EventKey::from_value(&json!(42)).is_err());
    /// ```
    pub fn from_value(value: &Value) -> EmitterResult<Self> {
        match value {
            Value::String(name) => Ok(Self::Name(Arc::from(name.as_str()))),
            other => Err(EmitterError::invalid_argument(format!(
                "event key must be a string or a token, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(&**name),
            Self::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Name(_) => None,
            Self::Token(token) => Some(token),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}

impl From<&str> for EventKey {
    fn from(name: &str) -> Self {
        Self::Name(Arc::from(name))
    }
}

impl From<String> for EventKey {
    fn from(name: String) -> Self {
        Self::Name(Arc::from(name))
    }
}

impl From<Arc<str>> for EventKey {
    fn from(name: Arc<str>) -> Self {
        Self::Name(name)
    }
}

impl From<Token> for EventKey {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<&Token> for EventKey {
    fn from(token: &Token) -> Self {
        Self::Token(token.clone())
    }
}

impl From<&EventKey> for EventKey {
    fn from(key: &EventKey) -> Self {
        key.clone()
    }
}

impl TryFrom<&Value> for EventKey {
    type Error = EmitterError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_never_equals_name_with_same_text() {
        let token = Token::with_description("ready");
        assert_ne!(EventKey::from(&token), EventKey::from("ready"));
        assert_eq!(EventKey::from(&token), EventKey::from(token.clone()));
    }

    #[test]
    fn name_keys_compare_by_content() {
        assert_eq!(EventKey::from("a"), EventKey::from(String::from("a")));
        assert_ne!(EventKey::from("a"), EventKey::from("b"));
    }

    #[test]
    fn display_uses_textual_form() {
        assert_eq!(EventKey::from("tick").to_string(), "tick");

        let described = Token::with_description("ready");
        assert_eq!(EventKey::from(described).to_string(), "Token(ready)");

        let bare = Token::new();
        let id = bare.id();
        assert_eq!(EventKey::from(bare).to_string(), format!("Token({id})"));
    }

    #[test]
    fn from_value_rejects_non_strings() {
        for value in [json!(null), json!(1), json!(true), json!([]), json!({})] {
            let err = EventKey::from_value(&value).unwrap_err();
            assert!(matches!(err, EmitterError::InvalidArgument { .. }));
        }

        let key = EventKey::try_from(&json!("tick")).unwrap();
        assert_eq!(key.as_name(), Some("tick"));
        assert!(key.as_token().is_none());
    }
}
