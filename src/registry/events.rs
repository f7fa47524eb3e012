//! Notification records emitted by successful mutations
//!
//! Events are advisory: external subscribers (an indexer, a UI) consume
//! them, but registry correctness never depends on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of mutation an event describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Mint,
    Burn,
    Transfer,
}

/// Record of one successful mutation.
///
/// `from` is absent for mints, `to` is absent for burns; transfers carry
/// both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistryEvent<I, O> {
    pub kind: EventKind,
    pub token_id: I,
    pub from: Option<O>,
    pub to: Option<O>,
    pub timestamp: DateTime<Utc>,
}

impl<I, O> RegistryEvent<I, O> {
    pub(crate) fn mint(token_id: I, to: O) -> Self {
        Self {
            kind: EventKind::Mint,
            token_id,
            from: None,
            to: Some(to),
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn burn(token_id: I, from: O) -> Self {
        Self {
            kind: EventKind::Burn,
            token_id,
            from: Some(from),
            to: None,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn transfer(token_id: I, from: O, to: O) -> Self {
        Self {
            kind: EventKind::Transfer,
            token_id,
            from: Some(from),
            to: Some(to),
            timestamp: Utc::now(),
        }
    }
}
