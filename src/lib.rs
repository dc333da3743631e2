//! In-memory semantic version manager with increment and rollback.

pub mod config;
pub mod domain;
pub mod error;
pub mod manager;

pub use config::Config;
pub use domain::{Version, VersionBump};
pub use error::{ErrorKind, Result, VersionManagerError};
pub use manager::VersionManager;
