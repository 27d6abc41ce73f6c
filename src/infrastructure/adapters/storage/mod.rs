//! Storage Adapter - 文档写入实现

mod file_document_sink;

pub use file_document_sink::FileDocumentSink;
