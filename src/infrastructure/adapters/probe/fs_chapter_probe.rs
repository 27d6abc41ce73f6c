//! FS Chapter Probe - 文件系统章节探测实现
//!
//! 实现 ChapterProbePort trait

use std::io;
use std::path::{Path, PathBuf};

use crate::application::ports::{ChapterProbePort, ProbeError};
use crate::domain::ChapterNumber;

/// 基于 `stat` 的章节探测器
pub struct FsChapterProbe {
    /// 章节目录所在的根目录
    root: PathBuf,
}

impl FsChapterProbe {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ChapterProbePort for FsChapterProbe {
    fn chapter_path(&self, number: ChapterNumber) -> PathBuf {
        self.root.join(number.dir_name())
    }

    fn chapter_exists(&self, number: ChapterNumber) -> Result<bool, ProbeError> {
        let path = self.chapter_path(number);

        // 跟随符号链接；只有 NotFound 表示不存在
        match std::fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(ProbeError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn number(n: u8) -> ChapterNumber {
        ChapterNumber::new(n).unwrap()
    }

    #[test]
    fn test_chapter_path() {
        let probe = FsChapterProbe::new("/book");
        assert_eq!(probe.chapter_path(number(3)), PathBuf::from("/book/ch03"));
    }

    #[test]
    fn test_directory_exists() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("ch05")).unwrap();
        let probe = FsChapterProbe::new(temp_dir.path());

        assert!(probe.chapter_exists(number(5)).unwrap());
        assert!(!probe.chapter_exists(number(6)).unwrap());
    }

    #[test]
    fn test_plain_file_counts_as_present() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("ch07"), b"not a directory").unwrap();
        let probe = FsChapterProbe::new(temp_dir.path());

        assert!(probe.chapter_exists(number(7)).unwrap());
    }

    #[test]
    fn test_missing_root_reports_absent() {
        let temp_dir = tempdir().unwrap();
        let probe = FsChapterProbe::new(temp_dir.path().join("nowhere"));

        assert!(!probe.chapter_exists(number(1)).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_not_a_directory_root_is_an_error() {
        // root 是普通文件时 stat 返回 NotADirectory，而不是 NotFound
        let temp_dir = tempdir().unwrap();
        let file_root = temp_dir.path().join("root-file");
        fs::write(&file_root, b"").unwrap();
        let probe = FsChapterProbe::new(&file_root);

        let result = probe.chapter_exists(number(1));

        assert!(matches!(result, Err(ProbeError::Io { .. })));
    }
}
