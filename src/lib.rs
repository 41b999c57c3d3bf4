pub mod config;
pub mod error;
pub mod llm;
pub mod relay;
pub mod server;

pub use error::{ChatError, Error, Result};
