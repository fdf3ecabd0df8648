mod get_response;

pub use get_response::*;
