//! Signature hashes for transactions.

use crate::serialization::{SerializationError, ZeroSerialize};

use super::{Hash, Transaction};

/// The BLAKE2b personalization for transaction signing hashes.
pub const SIGHASH_PERSONALIZATION: &[u8; 16] = b"ZeroTxSigHash_v1";

pub(super) struct SigHasher<'a> {
    trans: &'a Transaction,
}

impl<'a> SigHasher<'a> {
    pub fn new(trans: &'a Transaction) -> Self {
        SigHasher { trans }
    }

    pub fn sighash(self) -> Result<Hash, SerializationError> {
        let mut state = blake2b_simd::Params::new()
            .hash_length(32)
            .personal(SIGHASH_PERSONALIZATION)
            .to_state();

        self.trans.zero_serialize(&mut state)?;

        let mut hash = [0; 32];
        hash.copy_from_slice(state.finalize().as_bytes());

        Ok(Hash(hash))
    }
}
