//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Azure OpenAI chat completions over HTTP
//! - Mock provider for offline use and tests

pub mod adapter;

pub use adapter::*;
