//! FS Source Stats - 章节源码统计实现
//!
//! 实现 SourceStatsPort trait，递归遍历章节目录

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::application::ports::{SourceStatsPort, StatsError};
use crate::domain::{count_lines, ChapterNumber, SourceLanguage, SourceStatistics};

/// 含有该文件的章节目录视为 Zig 项目，不参与统计
const ZIG_PROJECT_MARKER: &str = "build.zig";

/// 基于 walkdir 的源码统计
pub struct FsSourceStats {
    root: PathBuf,
}

impl FsSourceStats {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn is_makefile(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.eq_ignore_ascii_case("makefile"))
    }

    /// 普通文件，或指向普通文件的符号链接（不跟随目录链接）
    fn is_source_file(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_file() {
            return true;
        }
        if !file_type.is_symlink() {
            return false;
        }
        match std::fs::metadata(entry.path()) {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                tracing::warn!("Skipping dangling symlink {}: {}", entry.path().display(), e);
                false
            }
        }
    }
}

impl SourceStatsPort for FsSourceStats {
    fn scan_chapter(&self, number: ChapterNumber) -> Result<SourceStatistics, StatsError> {
        let dir = self.root.join(number.dir_name());
        let mut stats = SourceStatistics::new();

        if !dir.is_dir() {
            tracing::warn!("Skipping statistics for non-directory {}", dir.display());
            return Ok(stats);
        }

        if dir.join(ZIG_PROJECT_MARKER).exists() {
            tracing::debug!("Skipping Zig project {}", dir.display());
            return Ok(stats);
        }

        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| StatsError::Walk {
                path: e.path().map_or_else(|| dir.clone(), Path::to_path_buf),
                message: e.to_string(),
            })?;

            if !Self::is_source_file(&entry) || Self::is_makefile(entry.path()) {
                continue;
            }

            let Some(language) = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(SourceLanguage::from_extension)
            else {
                continue;
            };

            let content = std::fs::read(entry.path()).map_err(|source| StatsError::Read {
                path: entry.path().to_path_buf(),
                source,
            })?;

            stats.record(language, count_lines(&content));
        }

        Ok(stats)
    }
}
