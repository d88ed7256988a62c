//! Opaque homomorphic commitments.
//!
//! Commitments are produced and checked by the cryptographic library. This
//! crate only carries their bytes, and the flattened [`AssetDescriptor`]
//! the library commits to.

use crate::asset::{Asset, Category, Currency, Magnitude, TicketValue, Token};

byte_array_type!(
    /// A homomorphic commitment to an asset.
    AssetCommitment,
    32,
    "AssetCommitment"
);
arbitrary_byte_array!(AssetCommitment);

byte_array_type!(
    /// The randomizer that balances the blinding factors of a transaction's
    /// commitments.
    BalanceRandomizer,
    32,
    "BalanceRandomizer"
);
arbitrary_byte_array!(BalanceRandomizer);

/// A flattened asset leg, ready to be committed to.
///
/// Absent legs are filled with the canonical empty values, so every asset,
/// including an empty one, has a well-defined commitment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AssetDescriptor {
    /// The token currency, or [`Currency::EMPTY`].
    pub currency: Currency,
    /// The token amount, or [`Magnitude::ZERO`].
    pub token_value: Magnitude,
    /// The ticket category, or [`Category::EMPTY`].
    pub category: Category,
    /// The ticket value, or [`TicketValue::EMPTY`].
    pub ticket_value: TicketValue,
}

impl AssetDescriptor {
    /// Flattens both legs of `asset`.
    pub fn from_asset(asset: &Asset) -> AssetDescriptor {
        let (currency, token_value) = match asset.token {
            Some(token) => (token.currency, token.value),
            None => (Currency::EMPTY, Magnitude::ZERO),
        };
        let (category, ticket_value) = match asset.ticket {
            Some(ticket) => (ticket.category, ticket.value),
            None => (Category::EMPTY, TicketValue::EMPTY),
        };

        AssetDescriptor {
            currency,
            token_value,
            category,
            ticket_value,
        }
    }

    /// Flattens a fee, which never has a ticket leg.
    pub fn from_fee(fee: &Token) -> AssetDescriptor {
        AssetDescriptor {
            currency: fee.currency,
            token_value: fee.value,
            category: Category::EMPTY,
            ticket_value: TicketValue::EMPTY,
        }
    }

    /// Returns `true` if this descriptor has a non-empty ticket leg.
    pub fn has_ticket(&self) -> bool {
        self.category != Category::EMPTY || self.ticket_value != TicketValue::EMPTY
    }
}

/// Commitments implied by a verified shielded descriptor.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtractedCommitments {
    /// Commitments to the values spent by shielded inputs.
    pub inputs: Vec<AssetCommitment>,
    /// Commitments to the values created by shielded outputs.
    pub outputs: Vec<AssetCommitment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_legs_flatten_to_empty_values() {
        zero_test::init();

        let descriptor = AssetDescriptor::from_asset(&Asset::default());

        assert_eq!(descriptor.currency, Currency::EMPTY);
        assert_eq!(descriptor.token_value, Magnitude::ZERO);
        assert_eq!(descriptor.category, Category::EMPTY);
        assert_eq!(descriptor.ticket_value, TicketValue::EMPTY);
        assert!(!descriptor.has_ticket());
    }

    #[test]
    fn fee_descriptor_has_no_ticket() {
        zero_test::init();

        let fee = Token::new(Currency::from_symbol("SERO"), 25_u64);
        let descriptor = AssetDescriptor::from_fee(&fee);

        assert_eq!(descriptor, AssetDescriptor::from_asset(&fee.into()));
        assert_eq!(descriptor.token_value, Magnitude::from(25_u64));
        assert!(!descriptor.has_ticket());
    }

    #[test]
    fn ticket_leg_is_kept() {
        zero_test::init();

        let asset = Asset::ticket(Category([7; 32]), TicketValue([9; 32]));
        let descriptor = AssetDescriptor::from_asset(&asset);

        assert_eq!(descriptor.currency, Currency::EMPTY);
        assert_eq!(descriptor.category, Category([7; 32]));
        assert_eq!(descriptor.ticket_value, TicketValue([9; 32]));
        assert!(descriptor.has_ticket());
    }
}
