//! Chapter Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ChapterProbePort;
use crate::application::queries::ListPresentChapters;
use crate::domain::{Chapter, ChapterTable};

// ============================================================================
// ListPresentChapters
// ============================================================================

/// ListPresentChapters Handler
///
/// 按编号升序逐个探测章节表中的章节，返回存在的章节
pub struct ListPresentChaptersHandler {
    table: Arc<ChapterTable>,
    probe: Arc<dyn ChapterProbePort>,
}

impl ListPresentChaptersHandler {
    pub fn new(table: Arc<ChapterTable>, probe: Arc<dyn ChapterProbePort>) -> Self {
        Self { table, probe }
    }

    pub fn handle(&self, _query: ListPresentChapters) -> Result<Vec<Chapter>, ApplicationError> {
        let mut present = Vec::new();

        for chapter in self.table.chapters() {
            let number = chapter.number();
            let exists = self.probe.chapter_exists(number)?;

            tracing::debug!(
                chapter = %number,
                path = %self.probe.chapter_path(number).display(),
                exists,
                "Probed chapter"
            );

            if exists {
                present.push(chapter);
            }
        }

        Ok(present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProbeError;
    use crate::domain::ChapterNumber;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// 内存探测器：记录探测顺序
    struct FakeProbe {
        present: HashSet<u8>,
        denied: HashSet<u8>,
        calls: Mutex<Vec<u8>>,
    }

    impl FakeProbe {
        fn new(present: &[u8]) -> Self {
            Self {
                present: present.iter().copied().collect(),
                denied: HashSet::new(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChapterProbePort for FakeProbe {
        fn chapter_path(&self, number: ChapterNumber) -> PathBuf {
            PathBuf::from(number.dir_name())
        }

        fn chapter_exists(&self, number: ChapterNumber) -> Result<bool, ProbeError> {
            self.calls.lock().unwrap().push(number.get());
            if self.denied.contains(&number.get()) {
                return Err(ProbeError::Io {
                    path: self.chapter_path(number),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            Ok(self.present.contains(&number.get()))
        }
    }

    fn table() -> Arc<ChapterTable> {
        Arc::new(ChapterTable::zig_unleashed().unwrap())
    }

    #[test]
    fn test_lists_present_chapters_in_order() {
        let probe = Arc::new(FakeProbe::new(&[7, 1, 3]));
        let handler = ListPresentChaptersHandler::new(table(), probe.clone());

        let chapters = handler.handle(ListPresentChapters).unwrap();
        let numbers: Vec<u8> = chapters.iter().map(|c| c.number().get()).collect();

        assert_eq!(numbers, vec![1, 3, 7]);
        assert_eq!(*probe.calls.lock().unwrap(), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_none_present() {
        let handler = ListPresentChaptersHandler::new(table(), Arc::new(FakeProbe::new(&[])));
        assert!(handler.handle(ListPresentChapters).unwrap().is_empty());
    }

    #[test]
    fn test_probe_error_propagates() {
        let mut probe = FakeProbe::new(&[1, 2]);
        probe.denied.insert(2);
        let probe = Arc::new(probe);
        let handler = ListPresentChaptersHandler::new(table(), probe.clone());

        let result = handler.handle(ListPresentChapters);

        assert!(matches!(result, Err(ApplicationError::Probe(_))));
        // 出错后不再继续探测
        assert_eq!(*probe.calls.lock().unwrap(), vec![1, 2]);
    }
}
