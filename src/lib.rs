pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatCompletionProvider, GetResponseUseCase};

pub use connector::{AzureOpenAiProvider, MockChatProvider};

pub use domain::{
    build_sequence, CompletionOptions, DomainError, Message, Role, Transcript,
};
