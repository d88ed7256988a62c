//! Identifiers for outputs and spends.

byte_array_type!(
    /// The root of an output: the identifier the ledger uses to look it up.
    ///
    /// Transparent inputs name the output they spend by its root, and shielded
    /// inputs name their anchor by a root.
    Root,
    32,
    "Root"
);
arbitrary_byte_array!(Root);

byte_array_type!(
    /// A nullifier revealed when an output is spent.
    Nullifier,
    32,
    "Nullifier"
);
arbitrary_byte_array!(Nullifier);

byte_array_type!(
    /// The commitment to an output's root, bound into its spend signature.
    RootCommitment,
    32,
    "RootCommitment"
);
arbitrary_byte_array!(RootCommitment);
