//! An in-memory ledger snapshot.

use std::collections::{HashMap, HashSet};

use zero_chain::{
    note::Root,
    package::{self, Package},
    transparent::Utxo,
};

use crate::{LedgerState, LookupError, PackageStore, SpentId};

/// An in-memory ledger snapshot: spend set, unspent outputs, and packages.
///
/// Mutating methods take `&mut self`, so they can only be called by whoever
/// applies blocks to this snapshot. Verifiers only ever see `&MemoryState`
/// (or an `Arc` of it), which keeps every view consistent for the duration
/// of a call.
#[derive(Clone, Debug, Default)]
pub struct MemoryState {
    /// Every revealed transparent root and shielded nullifier.
    spent: HashSet<[u8; 32]>,
    /// Unspent outputs, by root.
    outputs: HashMap<Root, Utxo>,
    /// Open packages, by id.
    packages: HashMap<package::Id, Package>,
}

impl MemoryState {
    /// Creates an empty snapshot.
    pub fn new() -> MemoryState {
        MemoryState::default()
    }

    /// Adds a newly created output.
    ///
    /// Returns the output previously stored under `root`, if any.
    pub fn insert_output(&mut self, root: Root, utxo: Utxo) -> Option<Utxo> {
        tracing::trace!(?root, "adding unspent output");
        self.outputs.insert(root, utxo)
    }

    /// Records a spend, adding `id` to the spend set.
    ///
    /// Spending a transparent root also removes its output from the unspent
    /// outputs. Returns `false` if `id` was already spent.
    pub fn spend(&mut self, id: impl Into<SpentId>) -> bool {
        let id = id.into();
        tracing::trace!(%id, "adding to spend set");

        if let SpentId::Root(root) = id {
            self.outputs.remove(&root);
        }

        self.spent.insert(*id.as_bytes())
    }

    /// Adds or replaces a package.
    pub fn insert_package(&mut self, package: Package) -> Option<Package> {
        tracing::trace!(id = %package.id, "adding package");
        self.packages.insert(package.id, package)
    }

    /// Removes a closed package.
    pub fn remove_package(&mut self, id: &package::Id) -> Option<Package> {
        tracing::trace!(%id, "removing package");
        self.packages.remove(id)
    }

    /// Returns the number of unspent outputs.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Returns the number of entries in the spend set.
    pub fn spent_count(&self) -> usize {
        self.spent.len()
    }
}

impl LedgerState for MemoryState {
    fn has_spent(&self, id: &SpentId) -> bool {
        self.spent.contains(id.as_bytes())
    }

    fn unspent_output(&self, root: &Root) -> Result<Option<Utxo>, LookupError> {
        Ok(self.outputs.get(root).cloned())
    }
}

impl PackageStore for MemoryState {
    fn package(&self, id: &package::Id) -> Option<Package> {
        self.packages.get(id).cloned()
    }
}
