pub mod format;
pub mod serializer;

pub use format::*;
pub use serializer::*;
