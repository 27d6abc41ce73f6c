//! Chapter Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ChapterError;

/// 章节编号
///
/// 不变量:
/// - 取值范围 [1, 99]，保证两位补零格式始终成立
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChapterNumber(u8);

impl ChapterNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 99;

    pub fn new(number: u8) -> Result<Self, ChapterError> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(ChapterError::InvalidNumber(number));
        }
        Ok(Self(number))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// 两位补零编号，如 3 -> "03"
    pub fn padded(&self) -> String {
        format!("{:02}", self.0)
    }

    /// 章节目录名，如 3 -> "ch03"
    pub fn dir_name(&self) -> String {
        format!("ch{}", self.padded())
    }
}

impl std::fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// 章节标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterTitle(String);

impl ChapterTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, ChapterError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ChapterError::EmptyTitle);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChapterTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
