//! Spend set and output resolution checks for transaction inputs.

use std::collections::HashSet;

use zero_chain::{
    commitment::AssetDescriptor,
    shielded,
    transaction::Hash,
    transparent::{self, Utxo},
};
use zero_state::{LedgerState, SpentId};

use crate::{
    error::TransactionError,
    primitives::{Cryptography, TransparentSpend},
};

use super::balance::{BalanceBuilder, Side};

/// Verifies every transparent input, and commits to the value it spends.
///
/// For each input, in order:
/// - its root must not be in the spend set, or spent by an earlier input,
/// - the output with that root must exist,
/// - its spend signature must be valid for that output's owner.
pub fn transparent_inputs<C, S>(
    crypto: &C,
    state: &S,
    hash: &Hash,
    inputs: &[transparent::Input],
    balance: &mut BalanceBuilder,
) -> Result<(), TransactionError>
where
    C: Cryptography + ?Sized,
    S: LedgerState + ?Sized,
{
    let mut spent_by_tx = HashSet::new();

    for input in inputs {
        check_unspent(state, &mut spent_by_tx, SpentId::Root(input.root))?;
        let utxo = resolve_transparent_input(state, input)?;

        let spend = TransparentSpend {
            hash: *hash,
            nullifier: input.nullifier,
            root_commitment: utxo.root_commitment,
            sign: input.sign,
            owner: *utxo.owner(),
        };
        crypto
            .verify_transparent_input(&spend)
            .map_err(|source| TransactionError::InputVerificationFailed {
                root: input.root,
                source,
            })?;

        balance.accumulate(
            crypto,
            Side::TransparentInput,
            &AssetDescriptor::from_asset(utxo.asset()),
        );
    }

    Ok(())
}

/// Returns the unspent output spent by `input`.
fn resolve_transparent_input<S>(
    state: &S,
    input: &transparent::Input,
) -> Result<Utxo, TransactionError>
where
    S: LedgerState + ?Sized,
{
    tracing::trace!(root = %input.root, "looking up spent output");
    state
        .unspent_output(&input.root)?
        .ok_or(TransactionError::OutputNotFound(input.root))
}

/// Checks that no shielded input reveals a spent nullifier, that no nullifier
/// is revealed twice, and that every anchor exists.
///
/// Shielded input values are hidden, so nothing is committed here: their
/// commitments come from the shielded proof.
pub fn shielded_inputs<S>(state: &S, inputs: &[shielded::Input]) -> Result<(), TransactionError>
where
    S: LedgerState + ?Sized,
{
    let mut spent_by_tx = HashSet::new();

    for input in inputs {
        check_unspent(state, &mut spent_by_tx, SpentId::Nullifier(input.nullifier))?;

        tracing::trace!(anchor = %input.anchor, "looking up shielded anchor");
        if state.unspent_output(&input.anchor)?.is_none() {
            return Err(TransactionError::AnchorNotFound(input.anchor));
        }
    }

    Ok(())
}

/// Checks that `id` is neither in the ledger's spend set nor already spent by
/// this transaction, then records it as spent by this transaction.
fn check_unspent<S>(
    state: &S,
    spent_by_tx: &mut HashSet<SpentId>,
    id: SpentId,
) -> Result<(), TransactionError>
where
    S: LedgerState + ?Sized,
{
    if state.has_spent(&id) || !spent_by_tx.insert(id) {
        return Err(TransactionError::AlreadySpent(id));
    }

    Ok(())
}
