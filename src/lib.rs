//! Token-Registry: an indexed ownership registry for uniquely-identified
//! assets
//!
//! This crate provides the bookkeeping core of a token system:
//! - A global ledger of every existing token, enumerable by index
//! - Per-owner holdings, enumerable per owner
//! - Atomic mint, burn and transfer (all-or-nothing, O(1) each)
//! - Descriptive URI metadata tied to token existence
//! - Event records for indexers and UIs
//!
//! Identifiers and owners are opaque type parameters: anything `Clone +
//! Eq + Hash + Debug` works, so callers choose their own identifier and
//! principal representations.
//!
//! The registry does no authorization of its own (it assumes an outer
//! layer has already decided a mutation is permitted) and it does no
//! locking: mutations take `&mut self`, so exclusive access per mutating
//! call is enforced by the borrow checker, and a multi-threaded host
//! wraps the ledger in a single `RwLock`.
//!
//! # Example
//!
//! ```rust
//! use token_registry::{RegistryError, TokenLedger};
//!
//! let mut ledger: TokenLedger<u64, String> = TokenLedger::new();
//! let alice = "alice".to_string();
//! let bob = "bob".to_string();
//!
//! // Mint a token to alice and describe it
//! ledger.mint(&alice, 1).unwrap();
//! ledger.set_token_uri(&1, "ipfs://QmExample").unwrap();
//!
//! // Hand it to bob
//! ledger.transfer(&alice, &bob, &1).unwrap();
//! assert_eq!(ledger.owner_of(&1).unwrap(), "bob");
//!
//! // Only the holder may burn
//! assert_eq!(ledger.burn(&alice, &1).unwrap_err(), RegistryError::NotOwner);
//! ledger.burn(&bob, &1).unwrap();
//! assert!(!ledger.exists(&1));
//! ```

pub mod registry;

// Re-export commonly used types
pub use registry::{
    EventKind, MetadataStore, OwnerIndex, RegistryError, RegistryEvent, TokenLedger,
    EVENT_HISTORY_LIMIT,
};
