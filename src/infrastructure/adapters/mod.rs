//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod probe;
pub mod stats;
pub mod storage;

pub use probe::*;
pub use stats::*;
pub use storage::*;
