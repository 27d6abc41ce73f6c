//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的文件系统实现

pub mod adapters;

pub use adapters::{FileDocumentSink, FsChapterProbe, FsSourceStats};
