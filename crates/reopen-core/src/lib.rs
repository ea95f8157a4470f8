// Public fallible APIs in this crate share one concrete error contract
// (`ReopenError`). Repeating per-function `# Errors` boilerplate obscures
// behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod editor;
pub mod error;
pub mod frecency;
pub mod matcher;
pub mod record;
pub mod select;
pub mod store;

pub use config::Config;
pub use error::{ReopenError, Result};
pub use record::Record;
pub use select::Chooser;
pub use store::RecordStore;
