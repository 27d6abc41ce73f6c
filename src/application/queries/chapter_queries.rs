//! Chapter Queries

/// 列出磁盘上存在目录的章节
#[derive(Debug, Clone, Default)]
pub struct ListPresentChapters;
