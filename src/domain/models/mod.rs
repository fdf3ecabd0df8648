mod completion_options;
mod message;
mod transcript;

pub use completion_options::*;
pub use message::*;
pub use transcript::*;
