//! Domain logic - the version triple and its bump rules

pub mod version;

pub use version::{Version, VersionBump};
