//! Fixed-size byte array newtypes.

/// Defines a `Copy` newtype around a fixed-size byte array.
///
/// The generated type displays as lowercase hex, in natural byte order, and
/// its `Debug` output names the type.
macro_rules! byte_array_type {
    ($(#[$meta:meta])* $name:ident, $len:expr, $debug_name:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// The length of this value in bytes.
            pub const LEN: usize = $len;

            /// Returns the raw bytes of this value.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple($debug_name)
                    .field(&hex::encode(self.0))
                    .finish()
            }
        }

        impl $crate::serialization::ZeroSerialize for $name {
            fn zero_serialize<W: std::io::Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
                writer.write_all(&self.0[..])
            }
        }
    };
}

/// Adds a proptest `Arbitrary` impl to a 32-byte [`byte_array_type`].
macro_rules! arbitrary_byte_array {
    ($name:ident) => {
        #[cfg(any(test, feature = "proptest-impl"))]
        impl proptest::arbitrary::Arbitrary for $name {
            type Parameters = ();

            fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
                use proptest::prelude::*;

                any::<[u8; 32]>().prop_map($name).boxed()
            }

            type Strategy = proptest::strategy::BoxedStrategy<Self>;
        }
    };
}
