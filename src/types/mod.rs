//! Core types used throughout the library.

pub mod message;
pub mod prompt;
pub mod request;
pub mod result;

// Re-export commonly used types
pub use message::*;
pub use prompt::*;
pub use request::*;
pub use result::*;
