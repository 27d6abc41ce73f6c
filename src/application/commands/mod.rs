//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：生成输出文档

mod readme_commands;

pub mod handlers;

pub use readme_commands::*;
