pub mod bundle;
pub mod config;
pub mod error;
pub mod languages;
pub mod order;
pub mod request;
pub mod response;
pub mod select;
pub mod walk;

pub use bundle::{BundleOptions, BundleSummary, BundleWriter, ReadFailurePolicy, write_bundle};
pub use config::{BundleDefaults, Config};
pub use error::{AppError, Result};
pub use order::{SortKey, order};
pub use request::{BundleRequest, run_bundle};
pub use response::{RESPONSE_FILE_NAME, ResponseAnswers, ResponseFile};
pub use select::select;
pub use walk::{CandidateFile, EXCLUDED_DIRS, walk};
