//! Keys and signatures.
//!
//! Both types are opaque to this crate: validating a key or checking a
//! signature is done by the cryptographic library behind the verifier's
//! `Cryptography` trait.

byte_array_type!(
    /// A re-randomizable public key.
    ///
    /// Owners publish a fresh randomization of their key for every output, so
    /// keys cannot be linked across transactions.
    PublicKey,
    96,
    "PublicKey"
);

byte_array_type!(
    /// A signature over a transaction hash.
    Signature,
    64,
    "Signature"
);
