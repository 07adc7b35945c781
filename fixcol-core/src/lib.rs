#![forbid(unsafe_code)]

pub mod error;

pub mod util {
    pub mod sanitize;
}

pub mod codec;

pub mod container {
    pub mod record;
}

pub mod convert;
pub mod domain;
pub mod repo;
pub mod repo_factory;
pub mod repo_fs;
pub mod store;

// Re-exports: stable API surface
pub use codec::EncodingId;
pub use convert::{ConvertOptions, ConvertRequest, LineEnding, convert};
pub use domain::{FieldDefinition, LayoutDefinition, validate_labels};
pub use error::{FixcolError, Outcome};
pub use store::{load, save};
