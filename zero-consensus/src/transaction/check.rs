//! Stateless transaction checks.

use zero_chain::{
    asset::Magnitude,
    keys::{PublicKey, Signature},
    transaction::Hash,
};

use crate::{error::TransactionError, primitives::Cryptography};

/// Returns `true` if `value` can be used in commitment arithmetic.
///
/// The most-significant byte of the canonical little-endian encoding must be
/// zero, which limits magnitudes to less than `2^248`. Sums of many such
/// values stay far from wrapping the commitment group order.
pub fn is_within_commitment_bound(value: &Magnitude) -> bool {
    value.most_significant_byte() == 0
}

/// Checks that `value`, found at `location` in the transaction, is within the
/// commitment bound.
pub fn magnitude_in_bounds(
    value: &Magnitude,
    location: &'static str,
) -> Result<(), TransactionError> {
    if is_within_commitment_bound(value) {
        Ok(())
    } else {
        Err(TransactionError::MagnitudeOverflow {
            location,
            value: *value,
        })
    }
}

/// Checks the sender's signature over the transaction hash.
///
/// The key is validated first: a signature is never checked against a
/// malformed key.
pub fn sender_signature<C>(
    crypto: &C,
    hash: &Hash,
    from: &PublicKey,
    sign: &Signature,
) -> Result<(), TransactionError>
where
    C: Cryptography + ?Sized,
{
    if !crypto.validate_key(from) {
        return Err(TransactionError::InvalidKey);
    }

    if !crypto.verify_signature(hash, sign, from) {
        return Err(TransactionError::SignatureInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_bound_examples() {
        zero_test::init();

        assert!(is_within_commitment_bound(&Magnitude::from(100_u64)));
        assert!(is_within_commitment_bound(&Magnitude::ZERO));

        let below = Magnitude::pow2(248)
            .and_then(|bound| bound.checked_sub(Magnitude::from(1_u64)))
            .expect("2^248 - 1 fits in 256 bits");
        assert!(is_within_commitment_bound(&below));

        for exponent in [248, 250, 255] {
            let value = Magnitude::pow2(exponent).expect("fits in 256 bits");
            assert_eq!(
                magnitude_in_bounds(&value, "fee"),
                Err(TransactionError::MagnitudeOverflow {
                    location: "fee",
                    value,
                })
            );
        }
    }
}
