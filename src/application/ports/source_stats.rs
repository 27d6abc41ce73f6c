//! Source Stats Port - 出站端口
//!
//! 定义章节源码统计的抽象接口

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ChapterNumber, SourceStatistics};

/// 统计错误
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source Stats Port
pub trait SourceStatsPort: Send + Sync {
    /// 统计单个章节目录；Zig 项目目录返回空统计
    fn scan_chapter(&self, number: ChapterNumber) -> Result<SourceStatistics, StatsError>;
}
