//! Error types for tree building.

use thiserror::Error;

/// Convenient alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A tag call received a name that cannot be used as a tag. No element
    /// is created for the call.
    #[error("invalid tag name `{name}`: {reason}")]
    InvalidTag {
        /// The rejected name, verbatim.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The build block finished without creating a single element, so
    /// there is no root to return.
    #[error("no root element: the build block created no elements")]
    EmptyBuild,
}
