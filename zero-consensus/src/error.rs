//! Errors that can occur when verifying a transaction.
//!
//! Each error variant corresponds to one rule of transaction verification, so
//! enumerating the variants enumerates the rules, and ensures a transaction
//! is never rejected for a reason that isn't listed here.
//!
//! All of these errors are final for the transaction: none of them are
//! transient, so callers should drop the transaction rather than retry.

use thiserror::Error;

use zero_chain::{asset::Magnitude, note::Root, package};
use zero_state::{LookupError, SpentId};

use crate::primitives;

/// A transaction verification failure.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TransactionError {
    #[error("transaction can not be encoded for hashing: {0}")]
    Unhashable(String),

    #[error("{location} magnitude {value} is too large for commitment arithmetic")]
    MagnitudeOverflow {
        location: &'static str,
        value: Magnitude,
    },

    #[error("sender key is invalid")]
    InvalidKey,

    #[error("sender signature is invalid")]
    SignatureInvalid,

    #[error("input already spent: {0}")]
    AlreadySpent(SpentId),

    #[error("referenced output not found: root {0}")]
    OutputNotFound(Root),

    /// The state store could not answer a lookup. The store's own error is
    /// passed through unchanged.
    #[error(transparent)]
    LookupFailure(#[from] LookupError),

    #[error("transparent input spending root {root} failed verification")]
    InputVerificationFailed {
        root: Root,
        source: primitives::Error,
    },

    #[error("can not find package with id {0}")]
    PackageNotFound(package::Id),

    #[error("can not verify package signature for id {0}")]
    PackageSignatureInvalid(package::Id),

    #[error("shielded input anchor not found: root {0}")]
    AnchorNotFound(Root),

    #[error("shielded descriptor is invalid")]
    ShieldedDescriptorInvalid(#[source] primitives::Error),

    #[error("balance equation does not hold")]
    BalanceEquationFailed(#[source] primitives::Error),
}
