//! File Document Sink - 文件系统文档写入实现
//!
//! 实现 DocumentSinkPort trait

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::application::ports::{DocumentSinkError, DocumentSinkPort};

/// 写入单个文件的文档输出
pub struct FileDocumentSink {
    /// 输出文件路径
    path: PathBuf,
}

impl FileDocumentSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSinkPort for FileDocumentSink {
    fn target(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, content: &str) -> Result<u64, DocumentSinkError> {
        // 截断或新建
        let mut file = File::create(&self.path).map_err(|source| DocumentSinkError::Create {
            path: self.path.clone(),
            source,
        })?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| DocumentSinkError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Wrote document: path={}, size={} bytes",
            self.path.display(),
            content.len()
        );

        Ok(content.len() as u64)
    }
}
