//! SAA Screener — Offline-first academic anxiety screening tool.
//!
//! Modular structure:
//! - [`survey`] — Questionnaire items, Likert bounds, response collection
//! - [`model`] — Per-class Gaussian parameters and priors (fixed, validated at load)
//! - [`classifier`] — Gaussian Naive Bayes log-posterior classification
//! - [`report`] — Per-class scores and advisory rendering
//! - [`storage`] — Encrypted local response storage
//! - [`uplink`] — Optional reporting to a tabular backend
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod survey;
pub mod model;
pub mod classifier;
pub mod report;
pub mod storage;
pub mod uplink;
pub mod logging;

pub use config::ScreenerConfig;
pub use error::{ConfigError, ShapeError};
pub use survey::{Response, ITEMS, ITEM_COUNT};
pub use model::{ClassLabel, ClassParams, ModelParams};
pub use classifier::{Classification, GaussianNb};
pub use storage::ResponseStore;
pub use logging::StructuredLogger;
