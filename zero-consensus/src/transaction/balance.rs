//! Incremental construction of the balance descriptor.

use zero_chain::{
    commitment::{AssetCommitment, AssetDescriptor, BalanceRandomizer, ExtractedCommitments},
    keys::Signature,
    transaction,
};

use crate::primitives::Cryptography;

/// The side of the balance equation a commitment is added to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    /// Value spent by a transparent input.
    TransparentInput,
    /// Value spent by a shielded input, or released by a closed package.
    ShieldedInput,
    /// Value created by an output, or paid as the fee.
    Output,
}

/// The commitments of a transaction, as collected by the verifier.
///
/// Each call to [`Verifier::verify`](super::Verifier::verify) owns one
/// builder, passes it by `&mut` through the stages that contribute to it,
/// and consumes it into a [`BalanceDescriptor`] for the final check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceBuilder {
    hash: transaction::Hash,
    transparent_inputs: Vec<AssetCommitment>,
    shielded_inputs: Vec<AssetCommitment>,
    outputs: Vec<AssetCommitment>,
}

impl BalanceBuilder {
    /// Starts an empty builder for the transaction with signing hash `hash`.
    pub fn new(hash: transaction::Hash) -> Self {
        Self {
            hash,
            transparent_inputs: Vec::new(),
            shielded_inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Appends an existing commitment to `side`.
    pub fn push(&mut self, side: Side, commitment: AssetCommitment) {
        tracing::trace!(?side, ?commitment, "adding commitment to balance");

        match side {
            Side::TransparentInput => self.transparent_inputs.push(commitment),
            Side::ShieldedInput => self.shielded_inputs.push(commitment),
            Side::Output => self.outputs.push(commitment),
        }
    }

    /// Commits to `asset` using `crypto`, and appends the commitment to `side`.
    pub fn accumulate<C>(&mut self, crypto: &C, side: Side, asset: &AssetDescriptor)
    where
        C: Cryptography + ?Sized,
    {
        let commitment = crypto.generate_asset_commitment(asset);
        self.push(side, commitment);
    }

    /// Adds the commitments implied by a verified shielded descriptor.
    pub fn extend_shielded(&mut self, extracted: ExtractedCommitments) {
        self.shielded_inputs.extend(extracted.inputs);
        self.outputs.extend(extracted.outputs);
    }

    /// Returns the number of commitments collected so far, on every side.
    pub fn len(&self) -> usize {
        self.transparent_inputs.len() + self.shielded_inputs.len() + self.outputs.len()
    }

    /// Returns `true` if no commitments have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finishes the descriptor with the transaction's balance randomizer and
    /// balance signature.
    pub fn finish(self, randomizer: BalanceRandomizer, sign: Signature) -> BalanceDescriptor {
        BalanceDescriptor {
            hash: self.hash,
            transparent_inputs: self.transparent_inputs,
            shielded_inputs: self.shielded_inputs,
            outputs: self.outputs,
            randomizer,
            sign,
        }
    }
}

/// A fully assembled balance descriptor, checked by
/// [`Cryptography::verify_balance`].
///
/// The balance equation holds if the homomorphic sum of the input
/// commitments equals the sum of the output commitments (which include the
/// fee), consistently with `randomizer` and `sign`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceDescriptor {
    /// The transaction signing hash.
    pub hash: transaction::Hash,
    /// Commitments to values spent by transparent inputs, in input order.
    pub transparent_inputs: Vec<AssetCommitment>,
    /// Commitments to values released by a closed package, followed by the
    /// commitments extracted from the shielded proof.
    pub shielded_inputs: Vec<AssetCommitment>,
    /// Commitments to the fee, transparent outputs, and shielded outputs.
    pub outputs: Vec<AssetCommitment>,
    /// The transaction's balance randomizer.
    pub randomizer: BalanceRandomizer,
    /// The transaction's balance signature.
    pub sign: Signature,
}

impl BalanceDescriptor {
    /// Returns every input-side commitment: transparent first, then shielded.
    pub fn inputs(&self) -> impl Iterator<Item = &AssetCommitment> {
        self.transparent_inputs
            .iter()
            .chain(self.shielded_inputs.iter())
    }
}
