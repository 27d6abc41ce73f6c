//! Query Handlers 实现

mod chapter_handlers;

pub use chapter_handlers::*;
