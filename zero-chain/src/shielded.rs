//! Shielded (value-hidden) transfers.
//!
//! Shielded values are only visible as commitments inside the proof payload.
//! The verifier checks the spend set and anchors for shielded inputs itself,
//! and delegates everything else to the proof system.

use std::{fmt, io};

use crate::{
    note::{Nullifier, Root},
    serialization::{write_len, ZeroSerialize},
};

/// A shielded input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(proptest_derive::Arbitrary))]
pub struct Input {
    /// The nullifier revealed by this spend.
    pub nullifier: Nullifier,
    /// The output root this spend is anchored to.
    pub anchor: Root,
}

impl ZeroSerialize for Input {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.nullifier.zero_serialize(&mut writer)?;
        self.anchor.zero_serialize(&mut writer)
    }
}

/// An opaque zero-knowledge proof payload.
///
/// The payload covers the shielded inputs and the shielded outputs of a
/// transaction. Only the cryptographic library can interpret it.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Proof(pub Vec<u8>);

impl Proof {
    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proof").field("len", &self.0.len()).finish()
    }
}

impl AsRef<[u8]> for Proof {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ZeroSerialize for Proof {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        write_len(self.0.len(), &mut writer)?;
        writer.write_all(&self.0)
    }
}

/// The shielded part of a transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Desc {
    /// Shielded inputs.
    pub inputs: Vec<Input>,
    /// The proof covering the shielded inputs and outputs.
    pub proof: Proof,
}

impl Desc {
    /// Returns `true` if this descriptor has no inputs and no proof payload.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.proof.is_empty()
    }
}

impl ZeroSerialize for Desc {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.inputs.zero_serialize(&mut writer)?;
        self.proof.zero_serialize(&mut writer)
    }
}
