//! README Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::GenerateReadme;
use crate::application::error::ApplicationError;
use crate::application::ports::{ChapterProbePort, DocumentSinkPort, SourceStatsPort};
use crate::application::queries::handlers::ListPresentChaptersHandler;
use crate::application::queries::ListPresentChapters;
use crate::domain::{
    format_chapter_line, render_software_requirements, render_statistics, Chapter, ChapterTable,
    SourceStatistics, README_HEADER,
};

// ============================================================================
// GenerateReadme
// ============================================================================

/// 生成 README 响应
#[derive(Debug, Clone)]
pub struct GenerateReadmeResponse {
    pub output_path: PathBuf,
    pub chapters: Vec<Chapter>,
    pub bytes_written: u64,
}

/// GenerateReadme Handler
///
/// 流程：探测全部章节 -> 渲染完整文档 -> 一次性写出。
/// 探测或统计失败时不会触碰已有的输出文件。
pub struct GenerateReadmeHandler {
    present_chapters: ListPresentChaptersHandler,
    sink: Arc<dyn DocumentSinkPort>,
    stats: Arc<dyn SourceStatsPort>,
}

impl GenerateReadmeHandler {
    pub fn new(
        table: Arc<ChapterTable>,
        probe: Arc<dyn ChapterProbePort>,
        sink: Arc<dyn DocumentSinkPort>,
        stats: Arc<dyn SourceStatsPort>,
    ) -> Self {
        Self {
            present_chapters: ListPresentChaptersHandler::new(table, probe),
            sink,
            stats,
        }
    }

    pub fn handle(
        &self,
        command: GenerateReadme,
    ) -> Result<GenerateReadmeResponse, ApplicationError> {
        if command.repository_url.trim().is_empty() {
            return Err(ApplicationError::validation("repository URL cannot be empty"));
        }

        let chapters = self.present_chapters.handle(ListPresentChapters)?;
        let content = self.render(&command, &chapters)?;
        let bytes_written = self.sink.write_document(&content)?;

        tracing::info!(
            output = %self.sink.target().display(),
            chapters = chapters.len(),
            bytes = bytes_written,
            "README generated"
        );

        Ok(GenerateReadmeResponse {
            output_path: self.sink.target().to_path_buf(),
            chapters,
            bytes_written,
        })
    }

    fn render(
        &self,
        command: &GenerateReadme,
        chapters: &[Chapter],
    ) -> Result<String, ApplicationError> {
        let mut content = String::from(README_HEADER);

        for chapter in chapters {
            content.push_str(&format_chapter_line(chapter, &command.repository_url));
        }

        if command.software_requirements {
            content.push_str(&render_software_requirements());
        }

        if command.statistics {
            let mut totals = SourceStatistics::new();
            for chapter in chapters {
                let stats = self.stats.scan_chapter(chapter.number())?;
                tracing::debug!(
                    chapter = %chapter.number(),
                    files = stats.total_files(),
                    lines = stats.total_lines(),
                    "Scanned chapter sources"
                );
                totals.merge(&stats);
            }
            content.push_str(&render_statistics(&totals));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ProbeError, StatsError};
    use crate::domain::ChapterNumber;
    use crate::infrastructure::adapters::{FileDocumentSink, FsChapterProbe, FsSourceStats};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const REPO: &str = "https://github.com/MKProj/ZigUnleashed";

    fn command() -> GenerateReadme {
        GenerateReadme {
            repository_url: REPO.to_string(),
            software_requirements: false,
            statistics: false,
        }
    }

    fn table() -> Arc<ChapterTable> {
        Arc::new(ChapterTable::zig_unleashed().unwrap())
    }

    fn handler_for(root: &Path) -> GenerateReadmeHandler {
        GenerateReadmeHandler::new(
            table(),
            Arc::new(FsChapterProbe::new(root)),
            Arc::new(FileDocumentSink::new(root.join("README.md"))),
            Arc::new(FsSourceStats::new(root)),
        )
    }

    fn line(number: &str, title: &str) -> String {
        format!(
            "- [Chapter {number}: {title}](https://github.com/MKProj/ZigUnleashed/tree/main/ch{number})  \n"
        )
    }

    #[test]
    fn test_no_chapters_writes_header_only() {
        let dir = tempdir().unwrap();

        let response = handler_for(dir.path()).handle(command()).unwrap();

        let written = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(written, README_HEADER);
        assert!(response.chapters.is_empty());
        assert_eq!(response.bytes_written, README_HEADER.len() as u64);
    }

    #[test]
    fn test_present_chapters_listed_in_order() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("ch03")).unwrap();
        fs::create_dir(dir.path().join("ch01")).unwrap();

        handler_for(dir.path()).handle(command()).unwrap();

        let written = fs::read_to_string(dir.path().join("README.md")).unwrap();
        let expected = format!(
            "{}{}{}",
            README_HEADER,
            line("01", "Introduction"),
            line("03", "Functions")
        );
        assert_eq!(written, expected);
    }

    #[test]
    fn test_each_chapter_appears_once() {
        let dir = tempdir().unwrap();
        for n in 1..=9 {
            fs::create_dir(dir.path().join(format!("ch0{n}"))).unwrap();
        }

        handler_for(dir.path()).handle(command()).unwrap();

        let written = fs::read_to_string(dir.path().join("README.md")).unwrap();
        for n in 1..=9 {
            let needle = format!("tree/main/ch0{n})");
            assert_eq!(written.matches(&needle).count(), 1, "chapter {n}");
        }
        let positions: Vec<usize> = (1..=9)
            .map(|n| written.find(&format!("[Chapter 0{n}:")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unlisted_directories_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("ch10")).unwrap();
        fs::create_dir(dir.path().join("ch1")).unwrap();
        fs::create_dir(dir.path().join("chapters")).unwrap();

        handler_for(dir.path()).handle(command()).unwrap();

        let written = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(written, README_HEADER);
    }

    #[test]
    fn test_idempotent_and_truncates() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("ch02")).unwrap();
        fs::write(
            dir.path().join("README.md"),
            "stale content that is much longer than the generated document ".repeat(100),
        )
        .unwrap();

        let handler = handler_for(dir.path());
        handler.handle(command()).unwrap();
        let first = fs::read(dir.path().join("README.md")).unwrap();
        handler.handle(command()).unwrap();
        let second = fs::read(dir.path().join("README.md")).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            format!("{}{}", README_HEADER, line("02", "The Basics"))
        );
    }

    #[test]
    fn test_optional_sections() {
        let dir = tempdir().unwrap();
        let ch04 = dir.path().join("ch04");
        fs::create_dir(&ch04).unwrap();
        fs::write(ch04.join("dynArray.c"), "int main(void) {\n    return 0;\n}\n").unwrap();
        fs::write(ch04.join("Makefile"), "all:\n\tcc dynArray.c\n").unwrap();

        let mut cmd = command();
        cmd.software_requirements = true;
        cmd.statistics = true;
        handler_for(dir.path()).handle(cmd).unwrap();

        let written = fs::read_to_string(dir.path().join("README.md")).unwrap();
        let chapters_end = format!("{}{}", README_HEADER, line("04", "Arrays and Slices"));
        assert!(written.starts_with(&chapters_end));

        let rest = &written[chapters_end.len()..];
        assert!(rest.starts_with("---\n## Software Requirements\n"));
        assert!(rest.contains("\n---\n\n\n# Statistics\n\n## Table\n\n"));
        assert!(rest.ends_with(
            "| C          |                 1 |             3 | 100.00%                     | 100.00%                     |"
        ));
    }

    #[test]
    fn test_empty_repository_url_rejected() {
        let dir = tempdir().unwrap();
        let mut cmd = command();
        cmd.repository_url = "  ".to_string();

        let result = handler_for(dir.path()).handle(cmd);

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert!(!dir.path().join("README.md").exists());
    }

    struct DeniedProbe;

    impl ChapterProbePort for DeniedProbe {
        fn chapter_path(&self, number: ChapterNumber) -> PathBuf {
            PathBuf::from(number.dir_name())
        }

        fn chapter_exists(&self, number: ChapterNumber) -> Result<bool, ProbeError> {
            Err(ProbeError::Io {
                path: self.chapter_path(number),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    struct NoStats;

    impl SourceStatsPort for NoStats {
        fn scan_chapter(&self, _number: ChapterNumber) -> Result<SourceStatistics, StatsError> {
            Ok(SourceStatistics::new())
        }
    }

    #[test]
    fn test_probe_failure_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("README.md");
        fs::write(&output, "previous").unwrap();

        let handler = GenerateReadmeHandler::new(
            table(),
            Arc::new(DeniedProbe),
            Arc::new(FileDocumentSink::new(&output)),
            Arc::new(NoStats),
        );

        let result = handler.handle(command());

        assert!(matches!(result, Err(ApplicationError::Probe(_))));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = tempdir().unwrap();
        let handler = GenerateReadmeHandler::new(
            table(),
            Arc::new(FsChapterProbe::new(dir.path())),
            Arc::new(FileDocumentSink::new(dir.path().join("missing").join("README.md"))),
            Arc::new(NoStats),
        );

        let result = handler.handle(command());

        assert!(matches!(result, Err(ApplicationError::Output(_))));
    }
}
