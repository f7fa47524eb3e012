//! Descriptive metadata (URIs) per token
//!
//! Independent of ownership. Existence gating lives in the ledger: the
//! store itself accepts any identifier, and the ledger only calls it for
//! tokens it knows exist.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from token identifier to a descriptive URI string.
///
/// Absent entries read as the empty string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetadataStore<I: Eq + Hash> {
    uris: HashMap<I, String>,
}

impl<I: Eq + Hash> MetadataStore<I> {
    pub fn new() -> Self {
        Self {
            uris: HashMap::new(),
        }
    }

    /// Set or overwrite the URI for a token.
    pub fn set(&mut self, id: I, uri: String) {
        self.uris.insert(id, uri);
    }

    /// Stored URI, or `""` if no entry exists.
    pub fn get(&self, id: &I) -> &str {
        self.uris.get(id).map(String::as_str).unwrap_or("")
    }

    /// Remove the entry for a token; no-op if absent. Called on burn.
    pub fn clear(&mut self, id: &I) {
        self.uris.remove(id);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl<I: Eq + Hash> Default for MetadataStore<I> {
    fn default() -> Self {
        Self::new()
    }
}
