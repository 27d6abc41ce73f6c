//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chapter_probe;
mod document_sink;
mod source_stats;

pub use chapter_probe::{ChapterProbePort, ProbeError};
pub use document_sink::{DocumentSinkError, DocumentSinkPort};
pub use source_stats::{SourceStatsPort, StatsError};
