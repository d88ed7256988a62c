//! Package transfer and close checks.

use zero_chain::{
    package::{self, Package},
    transaction::Hash,
};
use zero_state::PackageStore;

use crate::{error::TransactionError, primitives::Cryptography};

use super::balance::{BalanceBuilder, Side};

/// Verifies the package operations in `desc`.
///
/// A transfer only changes ownership, so it makes no balance contribution.
/// A close releases the escrowed value: the package's commitment is added to
/// the shielded inputs, but only once its signature has been checked.
pub fn verify_operations<C, P>(
    crypto: &C,
    packages: &P,
    hash: &Hash,
    desc: &package::Desc,
    balance: &mut BalanceBuilder,
) -> Result<(), TransactionError>
where
    C: Cryptography + ?Sized,
    P: PackageStore + ?Sized,
{
    if let Some(transfer) = &desc.transfer {
        authorize(crypto, packages, hash, transfer)?;
    }

    if let Some(close) = &desc.close {
        let package = authorize(crypto, packages, hash, close)?;
        balance.push(Side::ShieldedInput, package.asset_commitment);
    }

    Ok(())
}

/// Returns the package named by `auth`, if its owner signed the transaction.
fn authorize<C, P>(
    crypto: &C,
    packages: &P,
    hash: &Hash,
    auth: &package::Authorization,
) -> Result<Package, TransactionError>
where
    C: Cryptography + ?Sized,
    P: PackageStore + ?Sized,
{
    let package = packages
        .package(&auth.id)
        .ok_or(TransactionError::PackageNotFound(auth.id))?;

    if !crypto.verify_signature(hash, &auth.sign, &package.owner) {
        return Err(TransactionError::PackageSignatureInvalid(auth.id));
    }

    Ok(package)
}
