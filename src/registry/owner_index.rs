//! Per-owner token holdings
//!
//! Tracks, for every owner, the ordered list of token identifiers they
//! currently hold, plus reverse lookups from a token to its holder and to
//! its position within that holder's list. Removal uses swap-and-pop, so
//! it is O(1) but does not preserve insertion order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::registry::error::RegistryError;

/// Index of which owner holds which tokens.
///
/// A token appears in at most one owner's list at a time; the `holder`
/// map is the authority on who that is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnerIndex<I: Eq + Hash, O: Eq + Hash> {
    /// Ordered holdings per owner; entries are created lazily on first
    /// token received and removed when the last token leaves.
    holdings: HashMap<O, Vec<I>>,
    /// Token -> current holder.
    holder: HashMap<I, O>,
    /// Token -> position within the current holder's list.
    position: HashMap<I, usize>,
}

impl<I, O> OwnerIndex<I, O>
where
    I: Clone + Eq + Hash,
    O: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            holdings: HashMap::new(),
            holder: HashMap::new(),
            position: HashMap::new(),
        }
    }

    /// Append `id` to `owner`'s holdings and record its position.
    ///
    /// The caller guarantees `id` is not currently held by anyone: the
    /// ledger calls this during mint (fresh identifier) and during
    /// transfer (immediately after removal from the previous holder).
    pub fn add_token_to(&mut self, owner: &O, id: I) {
        let list = self.holdings.entry(owner.clone()).or_default();
        self.position.insert(id.clone(), list.len());
        self.holder.insert(id.clone(), owner.clone());
        list.push(id);
    }

    /// Remove `id` from `owner`'s holdings via swap-and-pop.
    ///
    /// Fails with `NotOwner` if `owner` does not currently hold `id`; the
    /// check happens before any structure is touched.
    pub fn remove_token_from(&mut self, owner: &O, id: &I) -> Result<(), RegistryError> {
        match self.holder.get(id) {
            Some(current) if current == owner => {}
            _ => return Err(RegistryError::NotOwner),
        }

        let list = self
            .holdings
            .get_mut(owner)
            .ok_or(RegistryError::NotOwner)?;
        let pos = self.position.remove(id).ok_or(RegistryError::NotOwner)?;

        // Swap-and-pop: the last entry fills the vacated slot and takes
        // over its position. Correct even when pos is the last slot.
        list.swap_remove(pos);
        if pos < list.len() {
            let moved = list[pos].clone();
            self.position.insert(moved, pos);
        }

        let emptied = list.is_empty();
        self.holder.remove(id);
        if emptied {
            self.holdings.remove(owner);
        }

        Ok(())
    }

    /// Ordered view of `owner`'s current holdings.
    pub fn tokens_of(&self, owner: &O) -> &[I] {
        match self.holdings.get(owner) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Current holder of `id`, if any owner holds it.
    pub fn holder_of(&self, id: &I) -> Option<&O> {
        self.holder.get(id)
    }

    /// Number of tokens `owner` currently holds.
    pub fn balance_of(&self, owner: &O) -> usize {
        self.holdings.get(owner).map_or(0, Vec::len)
    }
}

impl<I, O> Default for OwnerIndex<I, O>
where
    I: Clone + Eq + Hash,
    O: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> String {
        "alice".to_string()
    }

    fn bob() -> String {
        "bob".to_string()
    }

    /// Position and holder maps must agree with the holdings lists.
    fn check_consistency(index: &OwnerIndex<u64, String>) {
        assert_eq!(index.holder.len(), index.position.len());
        for (owner, list) in &index.holdings {
            assert!(!list.is_empty(), "empty holdings entry was not removed");
            for (i, id) in list.iter().enumerate() {
                assert_eq!(index.position[id], i);
                assert_eq!(index.holder[id], *owner);
            }
        }
        let held: usize = index.holdings.values().map(Vec::len).sum();
        assert_eq!(held, index.holder.len());
    }

    #[test]
    fn test_add_and_enumerate() {
        let mut index = OwnerIndex::new();

        index.add_token_to(&alice(), 10u64);
        index.add_token_to(&alice(), 11);
        index.add_token_to(&bob(), 12);

        assert_eq!(index.tokens_of(&alice()), &[10, 11]);
        assert_eq!(index.tokens_of(&bob()), &[12]);
        assert_eq!(index.balance_of(&alice()), 2);
        assert_eq!(index.holder_of(&11), Some(&alice()));
        check_consistency(&index);
    }

    #[test]
    fn test_tokens_of_unknown_owner_is_empty() {
        let index: OwnerIndex<u64, String> = OwnerIndex::new();
        assert!(index.tokens_of(&alice()).is_empty());
        assert_eq!(index.balance_of(&alice()), 0);
    }

    #[test]
    fn test_swap_and_pop_moves_last_into_hole() {
        let mut index = OwnerIndex::new();

        index.add_token_to(&alice(), 1u64);
        index.add_token_to(&alice(), 2);
        index.add_token_to(&alice(), 3);

        // Removing the first entry swaps the last one into its slot
        index.remove_token_from(&alice(), &1).unwrap();
        assert_eq!(index.tokens_of(&alice()), &[3, 2]);
        check_consistency(&index);

        // Removing the last entry is a plain pop
        index.remove_token_from(&alice(), &2).unwrap();
        assert_eq!(index.tokens_of(&alice()), &[3]);
        check_consistency(&index);
    }

    #[test]
    fn test_remove_last_token_drops_owner_entry() {
        let mut index = OwnerIndex::new();

        index.add_token_to(&alice(), 5u64);
        index.remove_token_from(&alice(), &5).unwrap();

        assert!(index.tokens_of(&alice()).is_empty());
        assert_eq!(index.holder_of(&5), None);
        assert!(index.holdings.is_empty());
    }

    #[test]
    fn test_remove_by_non_holder_fails_unchanged() {
        let mut index = OwnerIndex::new();

        index.add_token_to(&alice(), 5u64);

        let result = index.remove_token_from(&bob(), &5);
        assert_eq!(result, Err(RegistryError::NotOwner));

        // Also for a token nobody holds
        let result = index.remove_token_from(&alice(), &99);
        assert_eq!(result, Err(RegistryError::NotOwner));

        assert_eq!(index.tokens_of(&alice()), &[5]);
        assert_eq!(index.holder_of(&5), Some(&alice()));
        check_consistency(&index);
    }

    #[test]
    fn test_reassignment_between_owners() {
        let mut index = OwnerIndex::new();

        index.add_token_to(&alice(), 7u64);
        index.remove_token_from(&alice(), &7).unwrap();
        index.add_token_to(&bob(), 7);

        assert_eq!(index.holder_of(&7), Some(&bob()));
        assert!(index.tokens_of(&alice()).is_empty());
        assert_eq!(index.tokens_of(&bob()), &[7]);
        check_consistency(&index);
    }
}
