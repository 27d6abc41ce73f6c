//! chapterdex - 书籍章节 README 生成器
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节编号、标题与不可变章节表
//! - README 格式化、源码统计
//!
//! 应用层 (application/):
//! - Ports: ChapterProbe, DocumentSink, SourceStats
//! - Commands: GenerateReadme
//! - Queries: ListPresentChapters
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件系统探测、文档写入、源码统计

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
