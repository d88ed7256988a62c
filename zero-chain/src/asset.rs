//! Token and ticket assets.
//!
//! An [`Asset`] carries up to two legs: a fungible token leg, identified by a
//! [`Currency`] and a 256-bit [`Magnitude`], and a non-fungible ticket leg,
//! identified by a [`Category`] and a [`TicketValue`].

use std::{fmt, io};

use byteorder::{ByteOrder, LittleEndian};

use crate::{serialization::ZeroSerialize, u256::U256};

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

/// A 256-bit unsigned token amount.
///
/// The canonical encoding is 32 bytes, little-endian: byte `31` is the
/// most-significant byte. The cryptographic library uses the same encoding
/// when it builds asset commitments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Magnitude(U256);

impl Magnitude {
    /// The zero magnitude, used for absent token legs.
    pub const ZERO: Magnitude = Magnitude(U256([0; 4]));

    /// The number of bytes in the canonical encoding.
    pub const LEN: usize = 32;

    /// Parses a magnitude from its canonical little-endian encoding.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Magnitude {
        let mut words = [0u64; 4];
        LittleEndian::read_u64_into(&bytes, &mut words);
        Magnitude(U256(words))
    }

    /// Returns the canonical little-endian encoding of this magnitude.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        LittleEndian::write_u64_into(&(self.0).0, &mut bytes);
        bytes
    }

    /// Returns the most-significant byte of the canonical encoding.
    pub fn most_significant_byte(&self) -> u8 {
        self.to_le_bytes()[Self::LEN - 1]
    }

    /// Returns `true` if this magnitude is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` if the sum does not fit in 256 bits.
    pub fn checked_add(self, rhs: Magnitude) -> Option<Magnitude> {
        self.0.checked_add(rhs.0).map(Magnitude)
    }

    /// Checked subtraction. Returns `None` if `rhs` is larger than `self`.
    pub fn checked_sub(self, rhs: Magnitude) -> Option<Magnitude> {
        self.0.checked_sub(rhs.0).map(Magnitude)
    }

    /// Returns `2^exponent`, or `None` if it does not fit in 256 bits.
    pub fn pow2(exponent: usize) -> Option<Magnitude> {
        if exponent >= 256 {
            None
        } else {
            Some(Magnitude(U256::one() << exponent))
        }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::ZERO
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Magnitude(U256::from(value))
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Magnitude(U256::from(value))
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Magnitude").field(&self.0.to_string()).finish()
    }
}

impl ZeroSerialize for Magnitude {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&self.to_le_bytes())
    }
}

byte_array_type!(
    /// The identifier of a fungible token currency.
    Currency,
    32,
    "Currency"
);
arbitrary_byte_array!(Currency);

byte_array_type!(
    /// The identifier of a ticket category.
    Category,
    32,
    "Category"
);
arbitrary_byte_array!(Category);

byte_array_type!(
    /// The value of a ticket: an opaque identifier within its category.
    TicketValue,
    32,
    "TicketValue"
);
arbitrary_byte_array!(TicketValue);

impl Currency {
    /// The empty currency, used for absent token legs.
    pub const EMPTY: Currency = Currency([0; 32]);

    /// Creates a currency identifier from a short ASCII symbol.
    ///
    /// The symbol is stored left-aligned and zero-padded. Symbols longer than
    /// 32 bytes are truncated.
    pub fn from_symbol(symbol: &str) -> Currency {
        let mut bytes = [0; 32];
        let len = symbol.len().min(bytes.len());
        bytes[..len].copy_from_slice(&symbol.as_bytes()[..len]);
        Currency(bytes)
    }
}

impl Category {
    /// The empty category, used for absent ticket legs.
    pub const EMPTY: Category = Category([0; 32]);
}

impl TicketValue {
    /// The empty ticket value, used for absent ticket legs.
    pub const EMPTY: TicketValue = TicketValue([0; 32]);
}

/// A fungible token leg.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(proptest_derive::Arbitrary))]
pub struct Token {
    /// The currency of the token.
    pub currency: Currency,
    /// The amount of the token.
    pub value: Magnitude,
}

impl Token {
    /// Creates a new token leg.
    pub fn new(currency: Currency, value: impl Into<Magnitude>) -> Token {
        Token {
            currency,
            value: value.into(),
        }
    }
}

impl ZeroSerialize for Token {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.currency.zero_serialize(&mut writer)?;
        self.value.zero_serialize(&mut writer)
    }
}

/// A non-fungible ticket leg.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(proptest_derive::Arbitrary))]
pub struct Ticket {
    /// The category of the ticket.
    pub category: Category,
    /// The value of the ticket within its category.
    pub value: TicketValue,
}

impl ZeroSerialize for Ticket {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.category.zero_serialize(&mut writer)?;
        self.value.zero_serialize(&mut writer)
    }
}

/// An asset held by an output, package, or fee.
///
/// Either leg may be absent. An absent leg contributes the canonical empty
/// values to the asset commitment.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(proptest_derive::Arbitrary))]
pub struct Asset {
    /// The token leg, if any.
    pub token: Option<Token>,
    /// The ticket leg, if any.
    pub ticket: Option<Ticket>,
}

impl Asset {
    /// Creates an asset with only a token leg.
    pub fn token(currency: Currency, value: impl Into<Magnitude>) -> Asset {
        Asset {
            token: Some(Token::new(currency, value)),
            ticket: None,
        }
    }

    /// Creates an asset with only a ticket leg.
    pub fn ticket(category: Category, value: TicketValue) -> Asset {
        Asset {
            token: None,
            ticket: Some(Ticket { category, value }),
        }
    }
}

impl From<Token> for Asset {
    fn from(token: Token) -> Self {
        Asset {
            token: Some(token),
            ticket: None,
        }
    }
}

impl ZeroSerialize for Asset {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.token.zero_serialize(&mut writer)?;
        self.ticket.zero_serialize(&mut writer)
    }
}
