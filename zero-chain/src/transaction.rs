//! Transactions and the canonical signing hash.

use std::io;

use crate::{
    asset::Token,
    commitment::BalanceRandomizer,
    keys::{PublicKey, Signature},
    package,
    serialization::{SerializationError, ZeroSerialize},
    shielded, transparent,
};

mod sighash;


pub use sighash::SIGHASH_PERSONALIZATION;

byte_array_type!(
    /// A transaction signing hash.
    Hash,
    32,
    "transaction::Hash"
);

/// A confidential ledger transaction.
///
/// A transaction can mix transparent transfers, shielded transfers, and
/// package operations. Its total input value must equal its total output
/// value plus the fee; that equation is only checked on commitments, by the
/// cryptographic library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    /// The sender's re-randomizable key.
    pub from: PublicKey,
    /// The fee paid by this transaction.
    pub fee: Token,
    /// The sender's signature over [`Transaction::sighash`].
    pub sign: Signature,
    /// Transparent inputs and outputs.
    pub transparent: transparent::Desc,
    /// Shielded inputs and the proof covering them.
    pub shielded: shielded::Desc,
    /// Package transfer and close operations.
    pub package: package::Desc,
    /// The randomizer for the balance equation.
    pub balance_randomizer: BalanceRandomizer,
    /// The signature covering the balance equation.
    pub balance_sign: Signature,
}

impl Transaction {
    /// Returns the canonical hash that every signature in this transaction
    /// signs.
    ///
    /// The hash covers every field except the signatures themselves.
    ///
    /// Returns an error if a list or proof in this transaction is too long to
    /// be encoded.
    pub fn sighash(&self) -> Result<Hash, SerializationError> {
        sighash::SigHasher::new(self).sighash()
    }

    /// Returns `true` if this transaction has any shielded inputs or proof data.
    pub fn has_shielded_data(&self) -> bool {
        !self.shielded.is_empty()
    }

    /// Returns `true` if this transaction operates on any packages.
    pub fn has_package_operations(&self) -> bool {
        !self.package.is_empty()
    }
}

/// The fields covered by the signing hash, in hashing order.
impl ZeroSerialize for Transaction {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.from.zero_serialize(&mut writer)?;
        self.fee.zero_serialize(&mut writer)?;
        self.transparent.zero_serialize(&mut writer)?;
        self.shielded.zero_serialize(&mut writer)?;
        self.package.zero_serialize(&mut writer)?;
        self.balance_randomizer.zero_serialize(&mut writer)
    }
}
