mod sequence_builder;

pub use sequence_builder::*;
