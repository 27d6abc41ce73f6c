//! Chapter Context - Entities

use serde::{Deserialize, Serialize};

use super::{ChapterNumber, ChapterTitle};

/// 章节 - 编号与标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    number: ChapterNumber,
    title: ChapterTitle,
}

impl Chapter {
    pub fn new(number: ChapterNumber, title: ChapterTitle) -> Self {
        Self { number, title }
    }

    pub fn number(&self) -> ChapterNumber {
        self.number
    }

    pub fn title(&self) -> &ChapterTitle {
        &self.title
    }

    pub fn dir_name(&self) -> String {
        self.number.dir_name()
    }
}
