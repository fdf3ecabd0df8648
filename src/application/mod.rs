//! # Application Layer
//!
//! The chat completion port and the use case coordinating the domain and
//! connector layers.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
