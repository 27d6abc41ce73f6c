//! Chapter Context - Errors

use thiserror::Error;

use super::ChapterNumber;

#[derive(Debug, Error)]
pub enum ChapterError {
    #[error("无效的章节编号: {0} (有效范围 1-99)")]
    InvalidNumber(u8),

    #[error("章节标题不能为空")]
    EmptyTitle,

    #[error("章节重复: {0}")]
    Duplicate(ChapterNumber),
}
