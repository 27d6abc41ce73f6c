//! Domain Layer - 领域层
//!
//! - Chapter Context: 章节编号、标题与章节表
//! - README 格式化与源码统计

pub mod chapter;
pub mod statistics;

mod readme_format;

pub use chapter::{Chapter, ChapterError, ChapterNumber, ChapterTable, ChapterTitle};
pub use readme_format::{
    format_chapter_line, render_software_requirements, render_statistics, README_HEADER,
    SECTION_RULE, SOFTWARE_REQUIREMENTS,
};
pub use statistics::{count_lines, LanguageTally, SourceLanguage, SourceStatistics};
