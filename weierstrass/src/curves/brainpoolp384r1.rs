//! brainpoolP384r1 elliptic curve: verifiably pseudo-random variant

use crate::CurveParams;
use hex_literal::hex;

/// brainpoolP384r1 elliptic curve (RFC 5639).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct BrainpoolP384r1;

impl CurveParams for BrainpoolP384r1 {
    const NAME: &'static str = "Brainpool384";

    const MODULUS: &'static [u8] = &hex!(
        "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53"
    );

    const EQUATION_A: &'static [u8] = &hex!(
        "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826"
    );

    const EQUATION_B: &'static [u8] = &hex!(
        "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11"
    );

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!(
            "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e"
        ),
        &hex!(
            "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820341263c5315"
        ),
    );

    const ORDER: &'static [u8] = &hex!(
        "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565"
    );
}
