pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod output;
pub mod pipeline;

pub use config::Config;
pub use context::gather;
pub use context::transform;
pub use error::{BundleError, TransformError};
