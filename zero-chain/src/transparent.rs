//! Transparent (public-value) transfers.

use std::io;

use crate::{
    asset::Asset,
    keys::{PublicKey, Signature},
    note::{Nullifier, Root, RootCommitment},
    serialization::ZeroSerialize,
};

/// A transparent input, spending a previously created output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Input {
    /// The root of the output being spent.
    pub root: Root,
    /// The nullifier revealed by this spend.
    pub nullifier: Nullifier,
    /// The owner's signature authorizing this spend.
    pub sign: Signature,
}

/// Signatures are not part of the signing hash.
impl ZeroSerialize for Input {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.root.zero_serialize(&mut writer)?;
        self.nullifier.zero_serialize(&mut writer)
    }
}

/// A transparent output, created by a transaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// The key that can spend this output.
    pub owner: PublicKey,
    /// The value held by this output.
    pub asset: Asset,
}

impl ZeroSerialize for Output {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.owner.zero_serialize(&mut writer)?;
        self.asset.zero_serialize(&mut writer)
    }
}

/// An unspent output, as stored in the ledger state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Utxo {
    /// The output itself.
    pub output: Output,
    /// The commitment to this output's root.
    pub root_commitment: RootCommitment,
}

impl Utxo {
    /// The key that owns this output.
    pub fn owner(&self) -> &PublicKey {
        &self.output.owner
    }

    /// The asset held by this output.
    pub fn asset(&self) -> &Asset {
        &self.output.asset
    }
}

/// The transparent part of a transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Desc {
    /// Outputs spent by this transaction.
    pub inputs: Vec<Input>,
    /// Outputs created by this transaction.
    pub outputs: Vec<Output>,
}

impl ZeroSerialize for Desc {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.inputs.zero_serialize(&mut writer)?;
        self.outputs.zero_serialize(&mut writer)
    }
}
