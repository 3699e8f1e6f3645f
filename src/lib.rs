//! # Bandarmology - Indonesian Stock Accumulation Analysis Client
//!
//! Client-side core of a bandarmology dashboard featuring:
//! - Single request/response lifecycle orchestration for the analysis endpoint
//! - Deterministic text reports of broker accumulation and price targets
//! - Clipboard export with cosmetic copy feedback
//!
//! The numeric analysis itself (the `calculated` fields) is produced by the
//! backend service; this crate is the state management and presentation
//! plumbing around it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use bandarmology::orchestrator::AnalysisOrchestrator;
//! use bandarmology::services::AnalysisClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Arc::new(AnalysisClient::from_env());
//!     let mut orchestrator = AnalysisOrchestrator::new(client);
//!     let state = orchestrator.select_ticker(Some("BBCA")).await;
//!     println!("request settled as {}", state.name());
//! }
//! ```

// Core modules
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod services;
pub mod utils;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! Import this module to get the most commonly used types and functions:
    //! ```rust
    //! use bandarmology::prelude::*;
    //! ```

    pub use crate::models::{StockAnalysisResult, StockInput};
    pub use crate::orchestrator::{AnalysisOrchestrator, RequestState};
    pub use crate::report::serialize;
    pub use crate::services::{AnalysisApi, AnalysisClient, AnalysisError};
}

// Re-export some commonly used utilities
pub use utils::{init_logger, Logger, Timer};
