//! Memory Layer - In-Memory State Management
//!
//! 实现 ModelRegistry，保存启动时加载的语言引擎

mod model_registry;

pub use model_registry::InMemoryModelRegistry;
