//! Chapter Context - Aggregate Root

use std::collections::BTreeMap;

use super::{Chapter, ChapterError, ChapterNumber, ChapterTitle};

/// 书籍章节表
const ZIG_UNLEASHED_CHAPTERS: &[(u8, &str)] = &[
    (1, "Introduction"),
    (2, "The Basics"),
    (3, "Functions"),
    (4, "Arrays and Slices"),
    (5, "Struct, Enums and Unions"),
    (6, "Pointers and Memory Management"),
    (7, "Error Handling"),
    (8, "Interfacing with C"),
    (9, "Advance Topics"),
];

/// ChapterTable 聚合根
///
/// 不变量:
/// - 构造后不可变
/// - 编号唯一，迭代顺序始终为升序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTable {
    chapters: BTreeMap<ChapterNumber, ChapterTitle>,
}

impl ChapterTable {
    /// 从 (编号, 标题) 列表构造，拒绝重复编号
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ChapterError>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut chapters = BTreeMap::new();
        for (number, title) in entries {
            let number = ChapterNumber::new(number)?;
            let title = ChapterTitle::new(title)?;
            if chapters.insert(number, title).is_some() {
                return Err(ChapterError::Duplicate(number));
            }
        }
        Ok(Self { chapters })
    }

    /// 《Zig Unleashed》的章节表 (1-9)
    pub fn zig_unleashed() -> Result<Self, ChapterError> {
        Self::from_entries(ZIG_UNLEASHED_CHAPTERS.iter().copied())
    }

    /// 按编号升序迭代
    pub fn chapters(&self) -> impl Iterator<Item = Chapter> + '_ {
        self.chapters
            .iter()
            .map(|(number, title)| Chapter::new(*number, title.clone()))
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
