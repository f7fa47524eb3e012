//! Registry error types

use thiserror::Error;

/// Errors returned by registry operations.
///
/// Every precondition is checked before any structure is touched, so a
/// rejected operation leaves the registry exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Mint was attempted with an identifier that is already live.
    #[error("token already exists")]
    AlreadyExists,
    /// The referenced token does not currently exist.
    #[error("token not found")]
    NotFound,
    /// Burn or transfer was attempted by a principal that does not hold the token.
    #[error("caller is not the current holder")]
    NotOwner,
    /// Enumeration index past the end of the collection.
    #[error("index {index} out of range: length is {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
