mod chat_completion_provider;

pub use chat_completion_provider::*;
