//! Error types for building a token table.
//!
//! Tokenizing and rendering never fail; only a custom table can be rejected.

use thiserror::Error;

use crate::format::TagKind;

/// Convenience type alias for Results using [`TableError`].
pub type Result<T, E = TableError> = std::result::Result<T, E>;

/// Reasons a [`TagStyles`](crate::TagStyles) cannot become a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TableError {
    /// Element name is empty or not `[A-Za-z][A-Za-z0-9]*`.
    #[error("invalid element name for {tag}: {element:?}")]
    InvalidElement {
        /// Tag being configured.
        tag: TagKind,
        /// Rejected element name.
        element: String,
    },

    /// Class name is empty or would break out of the attribute.
    #[error("invalid class name for {tag}: {class:?}")]
    InvalidClass {
        /// Tag being configured.
        tag: TagKind,
        /// Rejected class name.
        class: String,
    },
}
