//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节编号与目录命名
//! - 不可变的章节表

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::ChapterTable;
pub use entities::Chapter;
pub use errors::ChapterError;
pub use value_objects::{ChapterNumber, ChapterTitle};
