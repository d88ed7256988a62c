//! Pledge packages: escrowed assets locked under an owner key.
//!
//! A transaction can transfer a package to a new owner, or close it and
//! release the escrowed value back into the transaction's balance.

use std::io;

use crate::{
    commitment::AssetCommitment,
    keys::{PublicKey, Signature},
    serialization::ZeroSerialize,
};

byte_array_type!(
    /// The identifier of a package.
    Id,
    32,
    "package::Id"
);
arbitrary_byte_array!(Id);

/// A signed operation on an existing package.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Authorization {
    /// The package being operated on.
    pub id: Id,
    /// The package owner's signature over the transaction hash.
    pub sign: Signature,
}

/// Signatures are not part of the signing hash.
impl ZeroSerialize for Authorization {
    fn zero_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        self.id.zero_serialize(writer)
    }
}

/// The package operations of a transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Desc {
    /// Moves a package to a new owner. The escrowed value does not move.
    pub transfer: Option<Authorization>,
    /// Closes a package, releasing its escrowed value into this transaction.
    pub close: Option<Authorization>,
}

impl Desc {
    /// Returns `true` if there are no package operations.
    pub fn is_empty(&self) -> bool {
        self.transfer.is_none() && self.close.is_none()
    }
}

impl ZeroSerialize for Desc {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.transfer.zero_serialize(&mut writer)?;
        self.close.zero_serialize(&mut writer)
    }
}

/// A package record, as stored in the package store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    /// The identifier of this package.
    pub id: Id,
    /// The key that can transfer or close this package.
    pub owner: PublicKey,
    /// The commitment to the escrowed asset.
    pub asset_commitment: AssetCommitment,
}
