//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChapterProbe、DocumentSink、SourceStats）
//! - commands: 生成 README 命令及处理器
//! - queries: 章节探测查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{GenerateReadmeHandler, GenerateReadmeResponse},
    GenerateReadme,
};

pub use error::ApplicationError;

pub use ports::{
    ChapterProbePort, DocumentSinkError, DocumentSinkPort, ProbeError, SourceStatsPort,
    StatsError,
};

pub use queries::{handlers::ListPresentChaptersHandler, ListPresentChapters};
