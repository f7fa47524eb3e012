//! Global token ledger
//!
//! The single aggregate that tracks every currently-existing token: a
//! global ordered list with a reverse position index, composed with an
//! [`OwnerIndex`] for ownership-scoped bookkeeping and a [`MetadataStore`]
//! for descriptive data. All mutations are all-or-nothing: preconditions
//! are checked before any structure is touched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::registry::error::RegistryError;
use crate::registry::events::RegistryEvent;
use crate::registry::metadata::MetadataStore;
use crate::registry::owner_index::OwnerIndex;

/// Maximum number of events retained in the in-memory history.
pub const EVENT_HISTORY_LIMIT: usize = 100;

/// The token ownership registry.
///
/// Instantiate one per deployment and pass it by reference to all
/// operations; mutations take `&mut self`, queries take `&self`. The
/// ledger does no locking of its own; to share it across threads, wrap
/// the whole value in a single `RwLock` so that reads may run
/// concurrently but never alongside a mutation.
///
/// `I` is the token identifier type and `O` the owner (principal) type;
/// both are opaque to the ledger beyond equality and hashing.
///
/// Authorization is a caller concern: the ledger assumes every mutation
/// it receives has already been permitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenLedger<I: Eq + Hash, O: Eq + Hash> {
    /// Every currently-existing token. Order is not insertion order once
    /// any burn has occurred (removal is swap-and-pop).
    all_tokens: Vec<I>,
    /// Token -> its current position in `all_tokens`.
    token_position: HashMap<I, usize>,
    /// Who holds what.
    owners: OwnerIndex<I, O>,
    /// Descriptive URIs, cleared on burn.
    metadata: MetadataStore<I>,
    /// Most recent events, capped at [`EVENT_HISTORY_LIMIT`].
    events: Vec<RegistryEvent<I, O>>,
}

impl<I, O> TokenLedger<I, O>
where
    I: Clone + Eq + Hash + Debug,
    O: Clone + Eq + Hash + Debug,
{
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            all_tokens: Vec::new(),
            token_position: HashMap::new(),
            owners: OwnerIndex::new(),
            metadata: MetadataStore::new(),
            events: Vec::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether a token with this identifier currently exists.
    pub fn exists(&self, id: &I) -> bool {
        self.token_position.contains_key(id)
    }

    /// Number of currently-existing tokens.
    pub fn total_supply(&self) -> usize {
        self.all_tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_tokens.is_empty()
    }

    /// Token at global position `index`.
    ///
    /// Positions are not stable across burns of other tokens: a burn
    /// moves the last token into the vacated slot. Do not cache positions
    /// across mutating calls.
    pub fn token_by_index(&self, index: usize) -> Result<&I, RegistryError> {
        self.all_tokens
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                len: self.all_tokens.len(),
            })
    }

    /// Current holder of a token.
    pub fn owner_of(&self, id: &I) -> Result<&O, RegistryError> {
        self.owners.holder_of(id).ok_or(RegistryError::NotFound)
    }

    /// Ordered view of the tokens an owner currently holds.
    ///
    /// Order within the slice is subject to the same swap-and-pop caveat
    /// as [`token_by_index`](Self::token_by_index).
    pub fn tokens_of(&self, owner: &O) -> &[I] {
        self.owners.tokens_of(owner)
    }

    /// Number of tokens an owner currently holds.
    pub fn balance_of(&self, owner: &O) -> usize {
        self.owners.balance_of(owner)
    }

    /// Token at position `index` within an owner's holdings.
    pub fn token_of_owner_by_index(&self, owner: &O, index: usize) -> Result<&I, RegistryError> {
        let held = self.owners.tokens_of(owner);
        held.get(index).ok_or(RegistryError::IndexOutOfRange {
            index,
            len: held.len(),
        })
    }

    /// Stored URI for an existing token; `""` if none was set.
    pub fn token_uri(&self, id: &I) -> Result<&str, RegistryError> {
        if !self.exists(id) {
            return Err(RegistryError::NotFound);
        }
        Ok(self.metadata.get(id))
    }

    /// Recent mutation events, oldest first, capped at
    /// [`EVENT_HISTORY_LIMIT`].
    pub fn events(&self) -> &[RegistryEvent<I, O>] {
        &self.events
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a token and assign it to `owner`.
    ///
    /// Fails with `AlreadyExists` if the identifier is live. Identifier
    /// reuse after a burn is permitted; preventing it is the caller's
    /// responsibility.
    pub fn mint(&mut self, owner: &O, id: I) -> Result<RegistryEvent<I, O>, RegistryError> {
        if self.exists(&id) {
            return Err(RegistryError::AlreadyExists);
        }

        self.token_position.insert(id.clone(), self.all_tokens.len());
        self.all_tokens.push(id.clone());
        self.owners.add_token_to(owner, id.clone());

        log::info!("Minted token {:?} to {:?}", id, owner);

        let event = RegistryEvent::mint(id, owner.clone());
        self.record(event.clone());
        Ok(event)
    }

    /// Destroy a token held by `owner`.
    ///
    /// Clears its metadata and removes it from both the global list and
    /// the owner's holdings. Fails with `NotFound` if the token does not
    /// exist, `NotOwner` if `owner` is not its current holder.
    pub fn burn(&mut self, owner: &O, id: &I) -> Result<RegistryEvent<I, O>, RegistryError> {
        let pos = match self.token_position.get(id) {
            Some(&pos) => pos,
            None => return Err(RegistryError::NotFound),
        };
        match self.owners.holder_of(id) {
            Some(holder) if holder == owner => {}
            _ => return Err(RegistryError::NotOwner),
        }

        self.metadata.clear(id);

        // Swap-and-pop the global list, mirroring the per-owner removal.
        self.token_position.remove(id);
        self.all_tokens.swap_remove(pos);
        if pos < self.all_tokens.len() {
            let moved = self.all_tokens[pos].clone();
            self.token_position.insert(moved, pos);
        }

        // Cannot fail: ownership was verified above.
        self.owners.remove_token_from(owner, id)?;

        log::info!("Burned token {:?} held by {:?}", id, owner);

        let event = RegistryEvent::burn(id.clone(), owner.clone());
        self.record(event.clone());
        Ok(event)
    }

    /// Reassign a token from `from` to `to`.
    ///
    /// The global list is untouched; only the per-owner indices change.
    /// Fails with `NotOwner` if `from` does not currently hold the token.
    pub fn transfer(
        &mut self,
        from: &O,
        to: &O,
        id: &I,
    ) -> Result<RegistryEvent<I, O>, RegistryError> {
        self.owners.remove_token_from(from, id)?;
        self.owners.add_token_to(to, id.clone());

        log::info!("Transferred token {:?} from {:?} to {:?}", id, from, to);

        let event = RegistryEvent::transfer(id.clone(), from.clone(), to.clone());
        self.record(event.clone());
        Ok(event)
    }

    /// Set or overwrite the URI for an existing token.
    ///
    /// Fails with `NotFound` if the token does not exist.
    pub fn set_token_uri(&mut self, id: &I, uri: impl Into<String>) -> Result<(), RegistryError> {
        if !self.exists(id) {
            return Err(RegistryError::NotFound);
        }
        self.metadata.set(id.clone(), uri.into());
        Ok(())
    }

    /// Append an event, keeping only the most recent
    /// [`EVENT_HISTORY_LIMIT`].
    fn record(&mut self, event: RegistryEvent<I, O>) {
        self.events.push(event);
        if self.events.len() > EVENT_HISTORY_LIMIT {
            self.events.remove(0);
        }
    }
}

impl<I, O> Default for TokenLedger<I, O>
where
    I: Clone + Eq + Hash + Debug,
    O: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
