//! Command Handlers 实现

mod readme_handlers;

pub use readme_handlers::*;
