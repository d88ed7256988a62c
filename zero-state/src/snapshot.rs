//! The read-only interfaces the verifier uses.

use std::{fmt, sync::Arc};

use zero_chain::{
    note::{Nullifier, Root},
    package::{self, Package},
    transparent::Utxo,
};

use crate::LookupError;

/// An identifier that can appear in the spend set.
///
/// Transparent spends reveal the root of the spent output, and shielded
/// spends reveal a nullifier. Both live in the same spend set, keyed by their
/// bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpentId {
    /// The root of a spent transparent output.
    Root(Root),
    /// A nullifier revealed by a shielded spend.
    Nullifier(Nullifier),
}

impl SpentId {
    /// Returns the spend set key for this identifier.
    pub fn as_bytes(&self) -> &[u8; 32] {
        match self {
            SpentId::Root(root) => root.as_bytes(),
            SpentId::Nullifier(nullifier) => nullifier.as_bytes(),
        }
    }
}

impl fmt::Display for SpentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpentId::Root(root) => write!(f, "root {root}"),
            SpentId::Nullifier(nullifier) => write!(f, "nullifier {nullifier}"),
        }
    }
}

impl From<Root> for SpentId {
    fn from(root: Root) -> Self {
        SpentId::Root(root)
    }
}

impl From<Nullifier> for SpentId {
    fn from(nullifier: Nullifier) -> Self {
        SpentId::Nullifier(nullifier)
    }
}

/// A consistent, read-only view of the ledger's spend set and unspent outputs.
///
/// Implementations must be safe for concurrent reads, and must present the
/// same view for the whole duration of a verification call.
pub trait LedgerState {
    /// Returns `true` if `id` has already been revealed by a committed spend.
    fn has_spent(&self, id: &SpentId) -> bool;

    /// Returns the unspent output with `root`.
    ///
    /// Returns `Ok(None)` if there is no such output, and an error if the
    /// underlying store could not answer.
    fn unspent_output(&self, root: &Root) -> Result<Option<Utxo>, LookupError>;
}

/// A read-only view of the package store.
pub trait PackageStore {
    /// Returns the package with `id`, if it exists.
    fn package(&self, id: &package::Id) -> Option<Package>;
}

impl<T: LedgerState + ?Sized> LedgerState for &T {
    fn has_spent(&self, id: &SpentId) -> bool {
        (**self).has_spent(id)
    }

    fn unspent_output(&self, root: &Root) -> Result<Option<Utxo>, LookupError> {
        (**self).unspent_output(root)
    }
}

impl<T: LedgerState + ?Sized> LedgerState for Arc<T> {
    fn has_spent(&self, id: &SpentId) -> bool {
        (**self).has_spent(id)
    }

    fn unspent_output(&self, root: &Root) -> Result<Option<Utxo>, LookupError> {
        (**self).unspent_output(root)
    }
}

impl<T: PackageStore + ?Sized> PackageStore for &T {
    fn package(&self, id: &package::Id) -> Option<Package> {
        (**self).package(id)
    }
}

impl<T: PackageStore + ?Sized> PackageStore for Arc<T> {
    fn package(&self, id: &package::Id) -> Option<Package> {
        (**self).package(id)
    }
}
