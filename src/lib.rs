pub mod catalog;
pub mod cli;
pub mod cli_types;
pub mod errors;
pub mod index;
pub mod service;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use catalog::Catalog;
pub use cli::CliApp;
pub use errors::{FeatgrepError, Result};
pub use index::FeatureIndex;
pub use service::SearchService;
pub use types::FeatureRecord;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
