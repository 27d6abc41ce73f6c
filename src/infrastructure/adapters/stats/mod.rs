//! Stats Adapter - 源码统计实现

mod fs_source_stats;

pub use fs_source_stats::FsSourceStats;
