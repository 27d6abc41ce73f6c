//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{DocumentSinkError, ProbeError, StatsError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 章节探测失败
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// 文档写入失败
    #[error("Output error: {0}")]
    Output(#[from] DocumentSinkError),

    /// 源码统计失败
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatsError),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
