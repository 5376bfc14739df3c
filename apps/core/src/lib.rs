//! Post-diagnosis autism support navigator.
//!
//! The [`brain`] module is the whole decision surface: text in, a
//! [`brain::StructuredReply`] out. Rendering and chat history belong to
//! the caller.

pub mod brain;
pub mod config;
pub mod error;

pub use brain::{classify_and_respond, ReplyEngine, StructuredReply};
pub use error::AppError;

#[cfg(test)]
mod tests;
