//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：音频读取、服务状态

mod audio_queries;
mod status_queries;

pub mod handlers;

pub use audio_queries::*;
pub use status_queries::*;
