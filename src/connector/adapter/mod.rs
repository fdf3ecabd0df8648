mod azure_openai_provider;
mod mock_chat_provider;

pub use azure_openai_provider::*;
pub use mock_chat_provider::*;
