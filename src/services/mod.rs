pub mod analysis_service;
pub mod clipboard;

pub use analysis_service::*;
pub use clipboard::*;
