//! Transaction verification for the zero confidential ledger.
//!
//! A transaction may mix transparent transfers, shielded transfers, and
//! package operations. Before it is accepted into a block or relayed, the
//! [`transaction::Verifier`] proves, without trusting the submitter, that:
//!
//! - every spent output was owned by the spender and is still unspent,
//! - nothing is spent twice,
//! - no visible magnitude can overflow the commitment arithmetic, and
//! - the value entering the transaction equals the value leaving it.
//!
//! The cryptography itself (signatures, commitments, proofs, and the final
//! balance equation) is delegated to a [`Cryptography`] implementation.
//! Ledger state is read through the `zero-state` traits. This crate owns the
//! order of the checks, the aggregation of commitments into the balance
//! descriptor, and the translation of failures into [`TransactionError`]s.

#![doc(html_root_url = "https://docs.rs/zero-consensus")]
#![allow(clippy::try_err)]
// The actual lints we want to disable
#![allow(clippy::unnecessary_wraps)]

mod config;
pub mod error;
pub mod primitives;
pub mod transaction;

pub use config::Config;
pub use error::TransactionError;
pub use primitives::Cryptography;
pub use transaction::{Request, Response, Verifier, VerifierService};
