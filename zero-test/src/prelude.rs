//! Common [`zero_test`](crate) types, traits, and functions.

pub use color_eyre;
pub use color_eyre::eyre;
pub use eyre::Result;
pub use proptest::prelude::*;
