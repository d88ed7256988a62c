//! Ledger state interfaces for the zero ledger.
//!
//! The transaction verifier in `zero-consensus` never owns ledger state. It
//! reads a consistent snapshot through the [`LedgerState`] and
//! [`PackageStore`] traits:
//!
//! - the spend set, which records every revealed transparent root and
//!   shielded nullifier,
//! - the unspent outputs, indexed by their root, and
//! - the package store, indexed by package id.
//!
//! Snapshots are only mutated when a block is applied. Verification takes
//! shared references, so any number of transactions can be checked against
//! the same snapshot concurrently.
//!
//! [`MemoryState`] is a complete in-memory snapshot, used by tests and by
//! tools that replay small ledgers.

#![doc(html_root_url = "https://docs.rs/zero-state")]
#![warn(missing_docs)]
#![allow(clippy::try_err)]

mod error;
mod memory;
mod snapshot;


pub use error::{BoxError, LookupError};
pub use memory::MemoryState;
pub use snapshot::{LedgerState, PackageStore, SpentId};
