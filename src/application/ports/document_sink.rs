//! Document Sink Port - 出站端口
//!
//! 定义输出文档写入的抽象接口

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 文档写入错误
#[derive(Debug, Error)]
pub enum DocumentSinkError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Document Sink Port
///
/// 以截断或新建的方式写出完整文档
pub trait DocumentSinkPort: Send + Sync {
    /// 输出目标路径
    fn target(&self) -> &Path;

    /// 写出文档，返回写入的字节数
    fn write_document(&self, content: &str) -> Result<u64, DocumentSinkError>;
}
