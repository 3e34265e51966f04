pub mod chat;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod map;
pub mod view;

// Re-export common error type
pub use error::ExplorerError;
