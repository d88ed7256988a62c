//! Deterministic serialization used for hashing transactions.
//!
//! This is not a wire format: it only needs to be stable, unambiguous, and
//! identical on every node, because the canonical signing hash is computed
//! over it.

use std::io;

use byteorder::{LittleEndian, WriteBytesExt};
use thiserror::Error;

/// A serialization error.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// An io error that prevented serialization, including lists that are
    /// too long for their length prefix.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Consensus-critical serialization for hashing.
pub trait ZeroSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical format.
    fn zero_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;
}

impl ZeroSerialize for u32 {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_u32::<LittleEndian>(*self)
    }
}

/// Writes a list or payload length as a little-endian `u32`.
pub(crate) fn write_len<W: io::Write>(len: usize, writer: W) -> Result<(), io::Error> {
    let len = u32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "length does not fit in a u32 prefix",
        )
    })?;
    len.zero_serialize(writer)
}

/// Lists are prefixed with their length as a little-endian `u32`.
impl<T: ZeroSerialize> ZeroSerialize for Vec<T> {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        write_len(self.len(), &mut writer)?;
        for item in self {
            item.zero_serialize(&mut writer)?;
        }
        Ok(())
    }
}

/// Optional values are prefixed with a presence byte: `0` for `None`, `1` for `Some`.
impl<T: ZeroSerialize> ZeroSerialize for Option<T> {
    fn zero_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        match self {
            None => writer.write_u8(0),
            Some(value) => {
                writer.write_u8(1)?;
                value.zero_serialize(&mut writer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A writer that accepts anything, so huge lengths can be tested without
    /// allocating.
    struct Sink;

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lengths_are_u32_prefixed() {
        zero_test::init();

        let mut bytes = Vec::new();
        vec![7_u32, 8].zero_serialize(&mut bytes).expect("vec writes never fail");

        assert_eq!(bytes, [2, 0, 0, 0, 7, 0, 0, 0, 8, 0, 0, 0]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_lengths_are_errors() {
        zero_test::init();

        let too_long = u32::MAX as usize + 1;
        let error = write_len(too_long, Sink).expect_err("length does not fit");

        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
        assert!(write_len(u32::MAX as usize, Sink).is_ok());
    }
}
