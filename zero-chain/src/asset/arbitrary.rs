use proptest::{arbitrary::any, prelude::*};

use super::Magnitude;

impl Arbitrary for Magnitude {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<[u8; 32]>().prop_map(Magnitude::from_le_bytes).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
