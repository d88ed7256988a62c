//! Verification stages and checkpoints.

use std::{fmt, time::Instant};

/// The stages of transaction verification, in order.
///
/// A transaction is in a stage once every check up to and including that
/// stage has passed. Any stage before [`Stage::Accepted`] can end in a
/// rejection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// No checks have run yet.
    Pending,
    /// The fee is within the commitment bound, and committed as an output.
    BoundsChecked,
    /// The sender key is valid, and signed the transaction.
    SenderAuthenticated,
    /// Every transparent input is unspent, resolved, and signed by its owner.
    TransparentInputsResolved,
    /// Every transparent output with a token leg is bounds-checked and committed.
    TransparentOutputsAccumulated,
    /// Package transfer and close operations are signed by their owners.
    PackagesVerified,
    /// Every shielded nullifier is unspent, and every anchor exists.
    ShieldedInputsChecked,
    /// The shielded proof is valid, and its commitments are collected.
    ShieldedDescriptorVerified,
    /// The balance equation holds.
    BalanceVerified,
    /// The transaction is valid.
    Accepted,
}

impl Stage {
    /// Returns the stage that follows this one.
    pub fn next(self) -> Stage {
        use Stage::*;

        match self {
            Pending => BoundsChecked,
            BoundsChecked => SenderAuthenticated,
            SenderAuthenticated => TransparentInputsResolved,
            TransparentInputsResolved => TransparentOutputsAccumulated,
            TransparentOutputsAccumulated => PackagesVerified,
            PackagesVerified => ShieldedInputsChecked,
            ShieldedInputsChecked => ShieldedDescriptorVerified,
            ShieldedDescriptorVerified => BalanceVerified,
            BalanceVerified | Accepted => Accepted,
        }
    }

    /// A short name for logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Pending => "pending",
            Stage::BoundsChecked => "bounds_checked",
            Stage::SenderAuthenticated => "sender_authenticated",
            Stage::TransparentInputsResolved => "transparent_inputs_resolved",
            Stage::TransparentOutputsAccumulated => "transparent_outputs_accumulated",
            Stage::PackagesVerified => "packages_verified",
            Stage::ShieldedInputsChecked => "shielded_inputs_checked",
            Stage::ShieldedDescriptorVerified => "shielded_descriptor_verified",
            Stage::BalanceVerified => "balance_verified",
            Stage::Accepted => "accepted",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records a checkpoint each time verification reaches a stage.
///
/// Checkpoints are only for observability.
#[derive(Debug)]
pub(super) struct StageTimer {
    record_metrics: bool,
    reached: Stage,
    last_checkpoint: Instant,
}

impl StageTimer {
    pub fn new(record_metrics: bool) -> Self {
        Self {
            record_metrics,
            reached: Stage::Pending,
            last_checkpoint: Instant::now(),
        }
    }

    /// Marks `stage` as reached, recording the time since the last checkpoint.
    pub fn checkpoint(&mut self, stage: Stage) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_checkpoint);

        tracing::trace!(%stage, ?elapsed, "reached verification stage");
        if self.record_metrics {
            metrics::histogram!("tx.verify.stage.seconds", "stage" => stage.as_str())
                .record(elapsed.as_secs_f64());
        }

        self.reached = stage;
        self.last_checkpoint = now;
    }

    /// The stage that was being attempted when verification stopped.
    pub fn failing_stage(&self) -> Stage {
        self.reached.next()
    }
}
