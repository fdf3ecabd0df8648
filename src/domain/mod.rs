//! # Domain Layer
//!
//! Core conversation models, the message sequence builder, and the typed
//! error. This layer is independent of external frameworks and transport.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
