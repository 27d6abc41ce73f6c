//! Chapter Probe Port - 出站端口
//!
//! 定义章节目录存在性检查的抽象接口

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ChapterNumber;

/// 探测错误
///
/// "不存在" 不是错误，只有其他 IO 失败（如权限不足）才会返回
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to stat {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Chapter Probe Port
///
/// 只读的文件系统探测
pub trait ChapterProbePort: Send + Sync {
    /// 章节条目的路径（`<root>/chNN`）
    fn chapter_path(&self, number: ChapterNumber) -> PathBuf;

    /// 检查章节条目是否存在（文件或目录均可）
    fn chapter_exists(&self, number: ChapterNumber) -> Result<bool, ProbeError>;
}
