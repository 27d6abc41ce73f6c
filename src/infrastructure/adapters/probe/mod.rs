//! Probe Adapter - 章节探测实现

mod fs_chapter_probe;

pub use fs_chapter_probe::FsChapterProbe;
