use super::modular::{reduce_big, to_big, Modular};
use crate::{Curve, Error};

use bigint::{Encoding, NonZero, U256};
use num_bigint::{BigInt, BigUint, Sign};
use rand_core::{CryptoRng, RngCore};

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar<C: Curve>(U256, PhantomData<C>);

/// A reduced value together with a flag recording whether the input had to
/// be reduced to fit the canonical range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeChecked<T> {
    value: T,
    was_reduced: bool,
}

impl<T: Copy> RangeChecked<T> {
    pub fn value(&self) -> T {
        self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn was_reduced(&self) -> bool {
        self.was_reduced
    }

    /// Rejects inputs that were out of range.
    pub fn canonical(self) -> Result<T, Error> {
        if self.was_reduced {
            Err(Error::ScalarOutOfRange)
        } else {
            Ok(self.value)
        }
    }

    pub fn warning(&self) -> Option<Error> {
        self.was_reduced.then_some(Error::ScalarOutOfRange)
    }
}

impl<C: Curve> Scalar<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn from_u64(number: u64) -> Self {
        Self::new(U256::from_u64(number))
    }

    /// Reduces into `[0, n)`, flagging negative inputs and inputs `>= n`.
    pub fn from_big(number: &BigInt) -> RangeChecked<Self> {
        let (reduced, was_reduced) = reduce_big(number, &C::ORDER);
        Self::checked(reduced, was_reduced)
    }

    /// Little-endian decoding of any length, flagging values `>= n`.
    pub fn from_le_bytes_checked(bytes: &[u8]) -> RangeChecked<Self> {
        Self::from_big(&BigInt::from_bytes_le(Sign::Plus, bytes))
    }

    pub fn from_u256_checked(number: U256) -> RangeChecked<Self> {
        let was_reduced = number >= C::ORDER;
        Self::checked(Self::new(number).0, was_reduced)
    }

    fn checked(reduced: U256, was_reduced: bool) -> RangeChecked<Self> {
        if was_reduced {
            log::trace!("scalar input reduced modulo the subgroup order");
        }
        RangeChecked {
            value: Self(reduced, PhantomData),
            was_reduced,
        }
    }

    pub fn to_big(&self) -> BigUint {
        to_big(&self.0)
    }

    /// Uniform sampling through a 512 bit wide reduction.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Self::from_wide_bytes(&bytes)
    }
}

impl<C: Curve> Modular for Scalar<C> {
    const MODULUS: U256 = C::ORDER;

    fn new(number: U256) -> Self {
        // NOTE unwrap is fine here because the modulus
        // can be safely assumed to be nonzero
        Self(number % NonZero::new(Self::MODULUS).unwrap(), PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> PartialOrd for Scalar<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Curve> Ord for Scalar<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<C: Curve> fmt::Display for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.to_be_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<C: Curve> std::ops::Add for Scalar<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Scalar<C>> for &'a Scalar<C> {
    type Output = Scalar<C>;
    fn add(self, rhs: &'b Scalar<C>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for Scalar<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for Scalar<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b Scalar<C>> for &'a Scalar<C> {
    type Output = Scalar<C>;
    fn sub(self, rhs: &'b Scalar<C>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<C: Curve> std::ops::SubAssign for Scalar<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Curve> std::ops::Neg for Scalar<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Mul for Scalar<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b Scalar<C>> for &'a Scalar<C> {
    type Output = Scalar<C>;
    fn mul(self, rhs: &'b Scalar<C>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl<C: Curve> std::ops::MulAssign for Scalar<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
