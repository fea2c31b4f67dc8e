#![deny(missing_docs)]
#![doc = "Core error, option and schema types shared by the sigma-algebra crates."]

pub mod errors;
pub mod opts;
mod schema;

pub use errors::{ErrorInfo, SigmaError};
pub use opts::AlgebraOpts;
pub use schema::SchemaVersion;
