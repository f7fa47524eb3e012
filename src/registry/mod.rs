//! Token ownership registry
//!
//! Tracks uniquely-identified tokens for a set of principals with:
//! - A global ordered list of all existing tokens (enumeration by index)
//! - Per-owner holdings with reverse position lookups
//! - Optional descriptive URI per token
//! - O(1) mint, burn and transfer via swap-and-pop deletion
//! - Advisory event records for each successful mutation
//!
//! Authorization (who may mint, burn or transfer) is decided by the
//! caller; the registry only maintains the indexed data once a mutation
//! is accepted, atomically: a rejected operation has no observable
//! side effects.
//!
//! # Example
//!
//! ```rust
//! use token_registry::TokenLedger;
//!
//! let mut ledger: TokenLedger<u64, String> = TokenLedger::new();
//!
//! ledger.mint(&"alice".to_string(), 7).unwrap();
//! ledger.set_token_uri(&7, "ipfs://Qm...").unwrap();
//!
//! ledger.transfer(&"alice".to_string(), &"bob".to_string(), &7).unwrap();
//! assert_eq!(ledger.owner_of(&7).unwrap(), "bob");
//! assert_eq!(ledger.total_supply(), 1);
//! ```

pub mod error;
pub mod events;
pub mod ledger;
pub mod metadata;
pub mod owner_index;

pub use error::RegistryError;
pub use events::{EventKind, RegistryEvent};
pub use ledger::{TokenLedger, EVENT_HISTORY_LIMIT};
pub use metadata::MetadataStore;
pub use owner_index::OwnerIndex;
