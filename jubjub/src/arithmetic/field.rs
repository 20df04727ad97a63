use super::modular::{reduce_big, to_big, Modular};
use crate::Curve;

use bigint::{Encoding, NonZero, U256};
use num_bigint::{BigInt, BigUint};
use rand_core::{CryptoRng, RngCore};

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> FieldElement<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn from_u64(number: u64) -> Self {
        Self::new(U256::from_u64(number))
    }

    /// Silently reduces any integer, negative values included.
    pub fn from_big(number: &BigInt) -> Self {
        let (reduced, _) = reduce_big(number, &C::PRIME_MODULUS);
        Self(reduced, PhantomData)
    }

    pub fn to_big(&self) -> BigUint {
        to_big(&self.0)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Self::from_wide_bytes(&bytes)
    }
}

impl<C: Curve> Modular for FieldElement<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn new(number: U256) -> Self {
        let reduced = if number < Self::MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(Self::MODULUS).unwrap()
        };

        Self(reduced, PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> PartialOrd for FieldElement<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Curve> Ord for FieldElement<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<C: Curve> fmt::Display for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.to_be_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn add(self, rhs: &'b FieldElement<C>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<C: Curve> std::ops::Add for FieldElement<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for FieldElement<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Curve> std::ops::AddAssign<&FieldElement<C>> for FieldElement<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for FieldElement<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn sub(self, rhs: &FieldElement<C>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<C: Curve> std::ops::SubAssign for FieldElement<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Curve> std::ops::Neg for FieldElement<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Neg for &FieldElement<C> {
    type Output = FieldElement<C>;
    fn neg(self) -> Self::Output {
        Modular::neg(self)
    }
}

impl<C: Curve> std::ops::Mul for FieldElement<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn mul(self, rhs: &FieldElement<C>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl<C: Curve> std::ops::MulAssign for FieldElement<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<C: Curve> std::ops::MulAssign<&FieldElement<C>> for FieldElement<C> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = &*self * rhs;
    }
}
