use crate::U256;

/// Parameters of a twisted Edwards curve `-x^2 + y^2 = 1 + d*x^2*y^2` over a
/// prime field.
///
/// Both moduli are expected to be odd and to fit in 255 bits, so that the top
/// bit of the last encoded byte is free to carry the sign of `x`.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync {
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const COEFF_D: U256;
    const COFACTOR: U256;
    const GENERATOR_Y: U256;
}

/// The Jubjub curve from the Zcash Sapling protocol, defined over the scalar
/// field of BLS12-381.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jubjub;

impl Curve for Jubjub {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");
    const ORDER: U256 =
        U256::from_be_hex("0e7db4ea6533afa906673b0101343b00a6682093ccc81082d0970e5ed6f72cb7");
    // d = -10240/10241
    const COEFF_D: U256 =
        U256::from_be_hex("2a9318e74bfa2b48f5fd9207e6bd7fd4292d7f6d37579d2601065fd6d6343eb1");
    const COFACTOR: U256 = U256::from_u8(8);
    const GENERATOR_Y: U256 = U256::from_u8(11);
}
