//! Verification of transactions against a ledger snapshot.
//!
//! Verification is a fixed pipeline of [`Stage`]s. Each stage either passes,
//! possibly adding commitments to the in-progress balance descriptor, or
//! rejects the transaction; the first rejection ends verification.
//!
//! 1. the fee magnitude is bounds-checked, and committed as an output,
//! 2. the sender key and signature are checked,
//! 3. transparent inputs are checked against the spend set, resolved, and
//!    their spend signatures verified; each is committed as an input,
//! 4. transparent outputs are bounds-checked and committed as outputs,
//! 5. package transfer and close signatures are checked; a closed package's
//!    commitment is added to the shielded inputs,
//! 6. shielded inputs are checked against the spend set, and their anchors
//!    resolved,
//! 7. the shielded proof is verified, contributing its commitments,
//! 8. the balance equation is checked over the assembled descriptor.
//!
//! Later stages assume the invariants established by earlier stages, so the
//! order can't be changed.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures::FutureExt;
use tower::Service;

use zero_chain::{
    commitment::AssetDescriptor,
    transaction::{self, Transaction},
};
use zero_state::{LedgerState, PackageStore};

use crate::{error::TransactionError, primitives::Cryptography, Config};

mod balance;
pub mod check;
mod package;
mod spend;
mod stage;


pub use balance::{BalanceBuilder, BalanceDescriptor, Side};
pub use stage::Stage;

use stage::StageTimer;

/// Synchronous transaction verification.
///
/// The verifier holds no ledger state: each call to [`Verifier::verify`]
/// reads the snapshot it is given, and builds its own balance descriptor.
/// Independent transactions can be verified concurrently by the same
/// verifier.
pub struct Verifier<C: ?Sized> {
    crypto: Arc<C>,
    config: Config,
}

impl<C: ?Sized> Clone for Verifier<C> {
    fn clone(&self) -> Self {
        Self {
            crypto: self.crypto.clone(),
            config: self.config.clone(),
        }
    }
}

impl<C: ?Sized> std::fmt::Debug for Verifier<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("crypto", &std::any::type_name::<C>())
            .field("config", &self.config)
            .finish()
    }
}

impl<C> Verifier<C>
where
    C: Cryptography + ?Sized,
{
    /// Create a new transaction verifier.
    pub fn new(crypto: Arc<C>, config: Config) -> Self {
        Self { crypto, config }
    }

    /// Verifies `tx` against the ledger snapshot `state` and the package
    /// store `packages`.
    ///
    /// Returns the transaction's signing hash if every stage passes, or the
    /// first error encountered. Neither `state` nor `packages` is modified,
    /// so repeated calls against an unchanged snapshot give the same result.
    pub fn verify<S, P>(
        &self,
        tx: &Transaction,
        state: &S,
        packages: &P,
    ) -> Result<transaction::Hash, TransactionError>
    where
        S: LedgerState + ?Sized,
        P: PackageStore + ?Sized,
    {
        let hash = match tx.sighash() {
            Ok(hash) => hash,
            Err(error) => {
                metrics::counter!("tx.verify.rejected", "stage" => Stage::Pending.as_str())
                    .increment(1);
                tracing::debug!(%error, "rejected transaction that can not be hashed");
                return Err(TransactionError::Unhashable(error.to_string()));
            }
        };
        let span = tracing::debug_span!("tx", %hash);
        let _entered = span.enter();

        tracing::trace!(
            transparent_inputs = tx.transparent.inputs.len(),
            transparent_outputs = tx.transparent.outputs.len(),
            shielded = tx.has_shielded_data(),
            shielded_inputs = tx.shielded.inputs.len(),
            packages = tx.has_package_operations(),
            "got tx verify request"
        );

        let mut timer = StageTimer::new(self.config.stage_metrics);
        let result = self.verify_stages(tx, &hash, state, packages, &mut timer);

        match &result {
            Ok(()) => {
                timer.checkpoint(Stage::Accepted);
                metrics::counter!("tx.verify.accepted").increment(1);
                tracing::trace!("accepted transaction");
            }
            Err(error) => {
                let stage = timer.failing_stage();
                metrics::counter!("tx.verify.rejected", "stage" => stage.as_str()).increment(1);
                tracing::debug!(%stage, %error, "rejected transaction");
            }
        }

        result.map(|()| hash)
    }

    /// Runs every stage in order, returning the first error.
    fn verify_stages<S, P>(
        &self,
        tx: &Transaction,
        hash: &transaction::Hash,
        state: &S,
        packages: &P,
        timer: &mut StageTimer,
    ) -> Result<(), TransactionError>
    where
        S: LedgerState + ?Sized,
        P: PackageStore + ?Sized,
    {
        let crypto = self.crypto.as_ref();
        let mut balance = BalanceBuilder::new(*hash);

        check::magnitude_in_bounds(&tx.fee.value, "fee")?;
        balance.accumulate(crypto, Side::Output, &AssetDescriptor::from_fee(&tx.fee));
        timer.checkpoint(Stage::BoundsChecked);

        check::sender_signature(crypto, hash, &tx.from, &tx.sign)?;
        timer.checkpoint(Stage::SenderAuthenticated);

        spend::transparent_inputs(crypto, state, hash, &tx.transparent.inputs, &mut balance)?;
        timer.checkpoint(Stage::TransparentInputsResolved);

        for output in &tx.transparent.outputs {
            // Outputs without a token leg carry nothing that can overflow, and
            // make no contribution to the balance.
            if let Some(token) = &output.asset.token {
                check::magnitude_in_bounds(&token.value, "transparent output")?;
                balance.accumulate(
                    crypto,
                    Side::Output,
                    &AssetDescriptor::from_asset(&output.asset),
                );
            }
        }
        timer.checkpoint(Stage::TransparentOutputsAccumulated);

        package::verify_operations(crypto, packages, hash, &tx.package, &mut balance)?;
        timer.checkpoint(Stage::PackagesVerified);

        spend::shielded_inputs(state, &tx.shielded.inputs)?;
        timer.checkpoint(Stage::ShieldedInputsChecked);

        let extracted = crypto
            .verify_shielded_descriptor(hash, &tx.shielded)
            .map_err(TransactionError::ShieldedDescriptorInvalid)?;
        balance.extend_shielded(extracted);
        timer.checkpoint(Stage::ShieldedDescriptorVerified);

        let balance = balance.finish(tx.balance_randomizer, tx.balance_sign);
        crypto
            .verify_balance(&balance)
            .map_err(TransactionError::BalanceEquationFailed)?;
        timer.checkpoint(Stage::BalanceVerified);

        Ok(())
    }
}

/// A request to verify a transaction against the service's snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// The transaction itself.
    pub transaction: Arc<Transaction>,
}

impl From<Transaction> for Request {
    fn from(transaction: Transaction) -> Self {
        Request {
            transaction: Arc::new(transaction),
        }
    }
}

/// The response type for the transaction verifier service.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Response {
    /// The signing hash of the verified transaction.
    pub tx_hash: transaction::Hash,
}

/// Asynchronous transaction verification against a shared snapshot.
///
/// Each request is verified independently, so callers can drive many
/// requests at once. The snapshot `S` must stay consistent while a request
/// is being verified; this service does no locking of its own.
pub struct VerifierService<C: ?Sized, S> {
    verifier: Verifier<C>,
    state: S,
}

impl<C: ?Sized, S: Clone> Clone for VerifierService<C, S> {
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            state: self.state.clone(),
        }
    }
}

impl<C, S> VerifierService<C, S>
where
    C: Cryptography + ?Sized,
    S: LedgerState + PackageStore,
{
    /// Create a new verifier service over `state`.
    pub fn new(verifier: Verifier<C>, state: S) -> Self {
        Self { verifier, state }
    }
}

impl<C, S> Service<Request> for VerifierService<C, S>
where
    C: Cryptography + ?Sized + 'static,
    S: LedgerState + PackageStore + Clone + Send + Sync + 'static,
{
    type Response = Response;
    type Error = TransactionError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let verifier = self.verifier.clone();
        let state = self.state.clone();

        async move {
            let tx_hash = verifier.verify(&req.transaction, &state, &state)?;
            Ok(Response { tx_hash })
        }
        .inspect(|result| {
            tracing::trace!(result = ?result.as_ref().map(|rsp| rsp.tx_hash), "got tx verify result");
        })
        .boxed()
    }
}
