// Public modules
pub mod defaults;
pub mod error;
pub mod migrate;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
