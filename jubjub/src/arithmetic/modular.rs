use crate::{Error, U256};

use bigint::{Encoding, NonZero, U512};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

/// Arithmetic shared by field elements and scalars.
///
/// Implementors only provide storage; every provided method assumes the
/// wrapped value is already reduced below `MODULUS`.
pub trait Modular: Sized + Copy {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    fn square(&self) -> Self {
        Modular::mul(self, self)
    }

    /// Square and multiply, most significant bit first. The exponent is not
    /// reduced.
    fn pow_vartime(&self, exponent: &U256) -> Self {
        let mut result = Self::new(U256::ONE);
        for i in (0..exponent.bits_vartime()).rev() {
            result = result.square();
            if exponent.bit_vartime(i) == 1 {
                result = Modular::mul(&result, self);
            }
        }
        result
    }

    fn invert(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::TriedToInvertZero);
        }
        Ok(self.pow_vartime(&Self::MODULUS.wrapping_sub(&U256::from_u8(2))))
    }

    /// Euler's criterion: `1` for non-zero squares, `-1` for non-squares and
    /// `0` for zero.
    fn legendre(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        let half = Self::MODULUS.wrapping_sub(&U256::ONE).shr_vartime(1);
        if self.pow_vartime(&half).inner() == &U256::ONE {
            1
        } else {
            -1
        }
    }

    /// Tonelli-Shanks square root. Leaves `self` untouched and fails with
    /// `NoSquareRoot` when `self` is not a quadratic residue.
    fn sqrt(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(*self);
        }
        if self.legendre() != 1 {
            return Err(Error::NoSquareRoot);
        }

        // MODULUS - 1 = q * 2^s with q odd
        let m_minus_one = Self::MODULUS.wrapping_sub(&U256::ONE);
        let mut s = trailing_zeros(&m_minus_one);
        if s == 1 {
            // MODULUS = 3 mod 4
            let exponent = Self::MODULUS.wrapping_add(&U256::ONE).shr_vartime(2);
            return Ok(self.pow_vartime(&exponent));
        }
        let q = m_minus_one.shr_vartime(s);

        let mut c = non_residue::<Self>().pow_vartime(&q);
        let mut t = self.pow_vartime(&q);
        let mut root = self.pow_vartime(&q.wrapping_add(&U256::ONE).shr_vartime(1));

        while t.inner() != &U256::ONE {
            let mut order = 0;
            let mut t_pow = t;
            while t_pow.inner() != &U256::ONE {
                t_pow = t_pow.square();
                order += 1;
            }
            let mut b = c;
            for _ in 0..s - order - 1 {
                b = b.square();
            }
            s = order;
            c = b.square();
            t = Modular::mul(&t, &c);
            root = Modular::mul(&root, &b);
        }
        Ok(root)
    }

    fn is_zero(&self) -> bool {
        self.inner() == &U256::ZERO
    }

    fn is_odd(&self) -> bool {
        self.inner().bit_vartime(0) == 1
    }

    /// Canonical little-endian encoding.
    fn to_bytes(&self) -> [u8; 32] {
        self.inner().to_le_bytes()
    }

    /// Little-endian decoding that zero-extends short input and reduces any
    /// value at or above the modulus.
    fn from_le_slice(bytes: &[u8]) -> Self {
        if bytes.len() <= 32 {
            let mut padded = [0u8; 32];
            padded[..bytes.len()].copy_from_slice(bytes);
            Self::new(U256::from_le_bytes(padded))
        } else {
            let value = BigInt::from_bytes_le(Sign::Plus, bytes);
            Self::new(reduce_big(&value, &Self::MODULUS).0)
        }
    }

    /// Reduces a 512 bit little-endian integer.
    fn from_wide_bytes(bytes: &[u8; 64]) -> Self {
        Self::new(reduce_u512(&U512::from_le_bytes(*bytes), &Self::MODULUS))
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    let (lo, hi) = lhs.mul_wide(rhs);
    reduce_u512(&hi.concat(&lo), modulus)
}

fn reduce_u512(number: &U512, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U256::ZERO.concat(modulus)).unwrap();
    // `concat` puts its receiver in the high half and `split` returns
    // (hi, lo); the remainder is below the modulus so `hi` is zero
    let (_, rem) = (number % mod512).split();
    rem
}

/// Number of trailing zero bits, `0` for zero.
fn trailing_zeros(number: &U256) -> usize {
    (0..number.bits_vartime())
        .take_while(|&i| number.bit_vartime(i) == 0)
        .count()
}

/// Smallest quadratic non-residue, starting from 2.
fn non_residue<T: Modular>() -> T {
    let mut candidate = 2u64;
    loop {
        let z = T::new(U256::from_u64(candidate));
        if z.legendre() == -1 {
            return z;
        }
        candidate += 1;
    }
}

/// Floor-reduces a signed integer into `[0, modulus)`. The flag is set when
/// the input was outside that range.
pub(crate) fn reduce_big(value: &BigInt, modulus: &U256) -> (U256, bool) {
    let modulus = BigInt::from_bytes_le(Sign::Plus, &modulus.to_le_bytes());
    let out_of_range = value.sign() == Sign::Minus || value >= &modulus;
    let (_, bytes) = value.mod_floor(&modulus).to_bytes_le();
    let mut padded = [0u8; 32];
    padded[..bytes.len()].copy_from_slice(&bytes);
    (U256::from_le_bytes(padded), out_of_range)
}

pub(crate) fn to_big(number: &U256) -> BigUint {
    BigUint::from_bytes_le(&number.to_le_bytes())
}
