//! HTTP Handlers

mod audio;
mod service;
mod speech;

pub use audio::*;
pub use service::*;
pub use speech::*;
