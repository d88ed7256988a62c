//! Core data structures for confidential ledger transactions.
//!
//! This crate defines the transaction model checked by `zero-consensus`:
//! token and ticket assets, transparent and shielded descriptors, escrow
//! packages, opaque commitments, and the canonical signing hash.
//!
//! Types in this crate only guarantee *structural* validity. Whether a
//! transaction is actually acceptable against a ledger snapshot is decided by
//! the verifier in `zero-consensus`.

#![doc(html_root_url = "https://docs.rs/zero-chain")]
#![deny(missing_docs)]
#![allow(clippy::try_err)]

#[macro_use]
mod byte_array;

mod u256;

pub mod asset;
pub mod commitment;
pub mod keys;
pub mod note;
pub mod package;
pub mod serialization;
pub mod shielded;
pub mod transaction;
pub mod transparent;

pub use asset::{Asset, Category, Currency, Magnitude, Ticket, TicketValue, Token};
pub use transaction::Transaction;
