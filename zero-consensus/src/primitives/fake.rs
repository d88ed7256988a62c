//! A deterministic stand-in for the cryptographic library.
//!
//! Keys, signatures, and commitments are BLAKE2b hashes, so tests can build
//! valid (and invalid) transactions without any curve arithmetic. The fake
//! remembers the opening of every commitment it generates, which lets it
//! check the balance equation by summing the committed values directly.
//!
//! A fake shielded proof is a sequence of 33-byte entries: a tag byte (`0`
//! for a shielded input, `1` for a shielded output) followed by an asset
//! commitment.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use zero_chain::{
    asset::{Category, Currency, Magnitude, TicketValue},
    commitment::{AssetCommitment, AssetDescriptor, BalanceRandomizer, ExtractedCommitments},
    keys::{PublicKey, Signature},
    note::{Nullifier, RootCommitment},
    shielded,
    transaction::Hash,
};

use crate::transaction::BalanceDescriptor;

use super::{Cryptography, Error, TransparentSpend};

const SHIELDED_INPUT_TAG: u8 = 0;
const SHIELDED_OUTPUT_TAG: u8 = 1;
const PROOF_ENTRY_LEN: usize = 1 + AssetCommitment::LEN;

/// How many times each operation was called.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CallCounts {
    pub key_validations: usize,
    pub signature_checks: usize,
    pub commitments: usize,
    pub transparent_inputs: usize,
    pub shielded_descriptors: usize,
    pub balances: usize,
}

#[derive(Debug, Default)]
pub struct FakeCryptography {
    openings: Mutex<HashMap<AssetCommitment, AssetDescriptor>>,
    key_validations: AtomicUsize,
    signature_checks: AtomicUsize,
    commitments: AtomicUsize,
    transparent_inputs: AtomicUsize,
    shielded_descriptors: AtomicUsize,
    balances: AtomicUsize,
}

fn hasher(personal: &[u8], hash_length: usize) -> blake2b_simd::State {
    blake2b_simd::Params::new()
        .hash_length(hash_length)
        .personal(personal)
        .to_state()
}

fn to_signature(hash: blake2b_simd::Hash) -> Signature {
    let mut bytes = [0; 64];
    bytes.copy_from_slice(hash.as_bytes());
    Signature(bytes)
}

impl FakeCryptography {
    pub fn new() -> Self {
        Self::default()
    }

    /// A valid public key derived from `seed`.
    pub fn public_key(seed: u8) -> PublicKey {
        let mut bytes = [0; 96];
        for (chunk, index) in bytes.chunks_mut(32).zip(0u8..) {
            let hash = hasher(b"ZeroFakeKey", 32).update(&[seed, index]).finalize();
            chunk.copy_from_slice(hash.as_bytes());
        }
        PublicKey(bytes)
    }

    /// The signature by `key` over `hash`.
    pub fn sign(hash: &Hash, key: &PublicKey) -> Signature {
        to_signature(
            hasher(b"ZeroFakeSig", 64)
                .update(key.as_bytes())
                .update(hash.as_bytes())
                .finalize(),
        )
    }

    /// The spend signature for a transparent input.
    pub fn sign_input(
        hash: &Hash,
        nullifier: &Nullifier,
        root_commitment: &RootCommitment,
        owner: &PublicKey,
    ) -> Signature {
        to_signature(
            hasher(b"ZeroFakeSpend", 64)
                .update(owner.as_bytes())
                .update(hash.as_bytes())
                .update(nullifier.as_bytes())
                .update(root_commitment.as_bytes())
                .finalize(),
        )
    }

    /// The balance signature for a transaction.
    pub fn sign_balance(hash: &Hash, randomizer: &BalanceRandomizer) -> Signature {
        to_signature(
            hasher(b"ZeroFakeBalance", 64)
                .update(hash.as_bytes())
                .update(randomizer.as_bytes())
                .finalize(),
        )
    }

    /// A proof payload for the given shielded input and output commitments.
    pub fn shielded_proof(
        inputs: &[AssetCommitment],
        outputs: &[AssetCommitment],
    ) -> shielded::Proof {
        let tagged_inputs = inputs.iter().map(|c| (SHIELDED_INPUT_TAG, c));
        let tagged_outputs = outputs.iter().map(|c| (SHIELDED_OUTPUT_TAG, c));

        let mut payload = Vec::with_capacity((inputs.len() + outputs.len()) * PROOF_ENTRY_LEN);
        for (tag, commitment) in tagged_inputs.chain(tagged_outputs) {
            payload.push(tag);
            payload.extend_from_slice(commitment.as_bytes());
        }

        shielded::Proof(payload)
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            key_validations: self.key_validations.load(Ordering::SeqCst),
            signature_checks: self.signature_checks.load(Ordering::SeqCst),
            commitments: self.commitments.load(Ordering::SeqCst),
            transparent_inputs: self.transparent_inputs.load(Ordering::SeqCst),
            shielded_descriptors: self.shielded_descriptors.load(Ordering::SeqCst),
            balances: self.balances.load(Ordering::SeqCst),
        }
    }

    fn opening(&self, commitment: &AssetCommitment) -> Result<AssetDescriptor, Error> {
        self.openings
            .lock()
            .expect("openings lock is never poisoned")
            .get(commitment)
            .copied()
            .ok_or_else(|| Error::Malformed(format!("unknown commitment {commitment}")))
    }

    /// Sums the token legs per currency, and counts the ticket legs.
    fn totals<'a>(
        &self,
        commitments: impl Iterator<Item = &'a AssetCommitment>,
    ) -> Result<Totals, Error> {
        let mut totals = Totals::default();

        for commitment in commitments {
            let asset = self.opening(commitment)?;

            if !asset.token_value.is_zero() {
                let total = totals.tokens.entry(asset.currency).or_insert(Magnitude::ZERO);
                *total = total
                    .checked_add(asset.token_value)
                    .ok_or_else(|| Error::Malformed("token total overflows".to_string()))?;
            }

            if asset.has_ticket() {
                *totals
                    .tickets
                    .entry((asset.category, asset.ticket_value))
                    .or_insert(0) += 1;
            }
        }

        Ok(totals)
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
struct Totals {
    tokens: BTreeMap<Currency, Magnitude>,
    tickets: BTreeMap<(Category, TicketValue), usize>,
}

impl Cryptography for FakeCryptography {
    fn validate_key(&self, key: &PublicKey) -> bool {
        self.key_validations.fetch_add(1, Ordering::SeqCst);
        key.as_bytes().iter().any(|&b| b != 0)
    }

    fn verify_signature(&self, hash: &Hash, sign: &Signature, key: &PublicKey) -> bool {
        self.signature_checks.fetch_add(1, Ordering::SeqCst);
        *sign == Self::sign(hash, key)
    }

    fn generate_asset_commitment(&self, asset: &AssetDescriptor) -> AssetCommitment {
        self.commitments.fetch_add(1, Ordering::SeqCst);

        let hash = hasher(b"ZeroFakeAsset", 32)
            .update(asset.currency.as_bytes())
            .update(&asset.token_value.to_le_bytes())
            .update(asset.category.as_bytes())
            .update(asset.ticket_value.as_bytes())
            .finalize();
        let mut bytes = [0; 32];
        bytes.copy_from_slice(hash.as_bytes());
        let commitment = AssetCommitment(bytes);

        self.openings
            .lock()
            .expect("openings lock is never poisoned")
            .insert(commitment, *asset);

        commitment
    }

    fn verify_transparent_input(&self, spend: &TransparentSpend) -> Result<(), Error> {
        self.transparent_inputs.fetch_add(1, Ordering::SeqCst);

        let expected = Self::sign_input(
            &spend.hash,
            &spend.nullifier,
            &spend.root_commitment,
            &spend.owner,
        );
        if spend.sign == expected {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }

    fn verify_shielded_descriptor(
        &self,
        _hash: &Hash,
        desc: &shielded::Desc,
    ) -> Result<ExtractedCommitments, Error> {
        self.shielded_descriptors.fetch_add(1, Ordering::SeqCst);

        let payload = desc.proof.as_ref();
        if payload.len() % PROOF_ENTRY_LEN != 0 {
            return Err(Error::Malformed(format!(
                "proof length {} is not a multiple of {PROOF_ENTRY_LEN}",
                payload.len()
            )));
        }

        let mut extracted = ExtractedCommitments::default();
        for entry in payload.chunks(PROOF_ENTRY_LEN) {
            let mut bytes = [0; 32];
            bytes.copy_from_slice(&entry[1..]);
            let commitment = AssetCommitment(bytes);

            match entry[0] {
                SHIELDED_INPUT_TAG => extracted.inputs.push(commitment),
                SHIELDED_OUTPUT_TAG => extracted.outputs.push(commitment),
                tag => return Err(Error::Malformed(format!("unknown proof tag {tag}"))),
            }
        }

        if extracted.inputs.len() != desc.inputs.len() {
            return Err(Error::InvalidProof);
        }

        Ok(extracted)
    }

    fn verify_balance(&self, balance: &BalanceDescriptor) -> Result<(), Error> {
        self.balances.fetch_add(1, Ordering::SeqCst);

        if balance.sign != Self::sign_balance(&balance.hash, &balance.randomizer) {
            return Err(Error::InvalidSignature);
        }

        let inputs = self.totals(balance.inputs())?;
        let outputs = self.totals(balance.outputs.iter())?;

        if inputs == outputs {
            Ok(())
        } else {
            Err(Error::Unbalanced)
        }
    }
}
