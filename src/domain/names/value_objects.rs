//! Names Context - Value Objects

use super::NameError;

/// 已校验的名字
///
/// 只能通过 [`PersonName::new`] 构造，保证去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// 去除首尾空白后校验，空串返回 [`NameError::Empty`]
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
