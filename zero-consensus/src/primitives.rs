//! The boundary to the cryptographic primitive library.
//!
//! The verifier never does curve arithmetic itself. Key validation,
//! signatures, asset commitments, zero-knowledge proofs and the balance
//! equation are all behind the [`Cryptography`] trait.

use thiserror::Error;

use zero_chain::{
    commitment::{AssetCommitment, AssetDescriptor, ExtractedCommitments},
    keys::{PublicKey, Signature},
    note::{Nullifier, RootCommitment},
    shielded,
    transaction::Hash,
};

use crate::transaction::BalanceDescriptor;

#[cfg(test)]
pub mod fake;

/// An error reported by the cryptographic library.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid proof")]
    InvalidProof,

    #[error("commitments do not balance")]
    Unbalanced,

    #[error("malformed data: {0}")]
    Malformed(String),
}

/// Everything bound into a transparent input's spend signature.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TransparentSpend {
    /// The transaction signing hash.
    pub hash: Hash,
    /// The nullifier supplied by the input.
    pub nullifier: Nullifier,
    /// The root commitment of the spent output.
    pub root_commitment: RootCommitment,
    /// The input's signature.
    pub sign: Signature,
    /// The owner of the spent output.
    pub owner: PublicKey,
}

/// The cryptographic operations the verifier relies on.
///
/// Implementations must be deterministic and safe to call from several
/// verifications at once.
pub trait Cryptography: Send + Sync {
    /// Returns `true` if `key` is well-formed, on the curve, and not degenerate.
    fn validate_key(&self, key: &PublicKey) -> bool;

    /// Returns `true` if `sign` is a valid signature over `hash` by `key`.
    fn verify_signature(&self, hash: &Hash, sign: &Signature, key: &PublicKey) -> bool;

    /// Returns the homomorphic commitment to a flattened asset.
    fn generate_asset_commitment(&self, asset: &AssetDescriptor) -> AssetCommitment;

    /// Checks a transparent input's spend signature.
    fn verify_transparent_input(&self, spend: &TransparentSpend) -> Result<(), Error>;

    /// Checks the proof in a shielded descriptor, and returns the commitments
    /// it implies for shielded inputs and outputs.
    fn verify_shielded_descriptor(
        &self,
        hash: &Hash,
        desc: &shielded::Desc,
    ) -> Result<ExtractedCommitments, Error>;

    /// Checks the balance equation over a fully assembled descriptor.
    fn verify_balance(&self, balance: &BalanceDescriptor) -> Result<(), Error>;
}
