//! Source Statistics - 章节源码统计的领域类型
//!
//! 只按扩展名分类并计数，不解析文件内容

use std::collections::BTreeMap;

/// 源码语言（顺序即统计表的行顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceLanguage {
    C,
    Cpp,
    Zig,
    Rust,
}

impl SourceLanguage {
    /// 根据扩展名识别语言（大小写不敏感），未知扩展名返回 None
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "c" | "h" => Some(Self::C),
            "cpp" | "hpp" | "cc" | "cxx" => Some(Self::Cpp),
            "zig" => Some(Self::Zig),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Zig => "Zig",
            Self::Rust => "Rust",
        }
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 单个语言的计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageTally {
    pub files: u64,
    pub lines: u64,
}

/// 按语言汇总的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStatistics {
    by_language: BTreeMap<SourceLanguage, LanguageTally>,
}

impl SourceStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个源文件
    pub fn record(&mut self, language: SourceLanguage, lines: u64) {
        let tally = self.by_language.entry(language).or_default();
        tally.files += 1;
        tally.lines += lines;
    }

    /// 合并另一份统计
    pub fn merge(&mut self, other: &SourceStatistics) {
        for (language, tally) in &other.by_language {
            let entry = self.by_language.entry(*language).or_default();
            entry.files += tally.files;
            entry.lines += tally.lines;
        }
    }

    pub fn get(&self, language: SourceLanguage) -> Option<LanguageTally> {
        self.by_language.get(&language).copied()
    }

    /// 按固定语言顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = (SourceLanguage, LanguageTally)> + '_ {
        self.by_language.iter().map(|(l, t)| (*l, *t))
    }

    pub fn total_files(&self) -> u64 {
        self.by_language.values().map(|t| t.files).sum()
    }

    pub fn total_lines(&self) -> u64 {
        self.by_language.values().map(|t| t.lines).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }
}

/// 统计行数：`\n`、`\r\n` 与单独的 `\r` 都视为行结束，末尾无换行的最后一行也计入
pub fn count_lines(content: &[u8]) -> u64 {
    let mut lines = 0;
    let mut bytes = content.iter().peekable();
    let mut open_line = false;

    while let Some(&byte) = bytes.next() {
        match byte {
            b'\r' => {
                bytes.next_if_eq(&&b'\n');
                lines += 1;
                open_line = false;
            }
            b'\n' => {
                lines += 1;
                open_line = false;
            }
            _ => open_line = true,
        }
    }

    if open_line {
        lines += 1;
    }
    lines
}
