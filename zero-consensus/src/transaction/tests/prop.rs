//! Randomised property tests for transaction verification.

use proptest::collection::vec;

use zero_test::prelude::*;

use crate::transaction::check::is_within_commitment_bound;

use super::*;

/// Magnitudes on both sides of the commitment bound.
fn magnitude() -> impl Strategy<Value = Magnitude> {
    prop_oneof![
        any::<Magnitude>(),
        any::<u128>().prop_map(Magnitude::from),
        (0_usize..256).prop_filter_map("fits in 256 bits", Magnitude::pow2),
    ]
}

proptest! {
    /// A fee is rejected for overflow exactly when its most-significant byte is set.
    #[test]
    fn fee_bound_matches_most_significant_byte(fee in magnitude()) {
        zero_test::init();

        let ledger = Ledger::new();
        let mut tx = transaction(fee, &[], Vec::new());
        ledger.sign(&mut tx);

        let result = ledger.verify(&tx);
        let overflow = Err(TransactionError::MagnitudeOverflow { location: "fee", value: fee });

        prop_assert_eq!(is_within_commitment_bound(&fee), fee.most_significant_byte() == 0);
        if is_within_commitment_bound(&fee) {
            prop_assert_ne!(&result, &overflow);
            prop_assert_eq!(result.is_ok(), fee.is_zero());
        } else {
            prop_assert_eq!(&result, &overflow);
            prop_assert_eq!(ledger.crypto.calls(), CallCounts::default());
        }
    }

    /// Every transparent output is bounds-checked, in order.
    #[test]
    fn first_oversized_output_is_reported(values in vec(magnitude(), 1..6)) {
        zero_test::init();

        let ledger = Ledger::new();
        let outputs = values
            .iter()
            .map(|value| output(BOB, Asset::token(sero(), *value)))
            .collect();
        let mut tx = transaction(0_u64, &[], outputs);
        ledger.sign(&mut tx);

        let result = ledger.verify(&tx);

        match values.iter().find(|value| !is_within_commitment_bound(value)) {
            Some(value) => prop_assert_eq!(
                result,
                Err(TransactionError::MagnitudeOverflow {
                    location: "transparent output",
                    value: *value,
                })
            ),
            None => prop_assert!(
                !matches!(result, Err(TransactionError::MagnitudeOverflow { .. })),
                "in-bounds outputs must not overflow: {:?}",
                result,
            ),
        }
    }

    /// Verification never depends on anything but its inputs.
    #[test]
    fn repeated_verification_agrees(paid in 0_u64..200, tamper in any::<bool>()) {
        zero_test::init();

        let mut ledger = Ledger::new();
        let mut tx = alice_pays_bob(&mut ledger, paid);
        if tamper {
            tx.sign = Signature([7; 64]);
        }

        let verifier = ledger.verifier();
        let first = verifier.verify(&tx, &ledger.state, &ledger.state);
        let second = verifier.verify(&tx, &ledger.state, &ledger.state);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_ok(), paid == 90 && !tamper);
    }
}
