use crate::arithmetic::{FieldElement, Modular, Point, RangeChecked, Scalar};
use crate::{Curve, Error, U256};

use num_bigint::BigInt;

/// Curve constants and cached points, computed once and handed out by value.
///
/// Nothing inside can be mutated after construction, so a single instance
/// can be shared between threads by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParams<C: Curve> {
    d: FieldElement<C>,
    cofactor: Scalar<C>,
    generator_y: FieldElement<C>,
    zero: FieldElement<C>,
    one: FieldElement<C>,
    generator: Point<C>,
    subgroup_generator: Point<C>,
}

impl<C: Curve> CurveParams<C> {
    pub fn new() -> Result<Self, Error> {
        let generator = Point::generator()?;
        let subgroup_generator = generator.mul_by_cofactor()?;
        Ok(Self {
            d: FieldElement::new(C::COEFF_D),
            cofactor: Scalar::new(C::COFACTOR),
            generator_y: FieldElement::new(C::GENERATOR_Y),
            zero: FieldElement::ZERO,
            one: FieldElement::ONE,
            generator,
            subgroup_generator,
        })
    }

    pub fn field_order(&self) -> U256 {
        C::PRIME_MODULUS
    }

    pub fn subgroup_order(&self) -> U256 {
        C::ORDER
    }

    pub fn d(&self) -> FieldElement<C> {
        self.d
    }

    pub fn cofactor(&self) -> Scalar<C> {
        self.cofactor
    }

    pub fn generator_y(&self) -> FieldElement<C> {
        self.generator_y
    }

    pub fn zero(&self) -> FieldElement<C> {
        self.zero
    }

    pub fn one(&self) -> FieldElement<C> {
        self.one
    }

    pub fn identity(&self) -> Point<C> {
        Point::IDENTITY
    }

    pub fn generator(&self) -> Point<C> {
        self.generator
    }

    /// Generator of the prime order subgroup, `8 * generator`.
    pub fn subgroup_generator(&self) -> Point<C> {
        self.subgroup_generator
    }

    pub fn fe_from_bytes(&self, bytes: &[u8]) -> FieldElement<C> {
        FieldElement::from_le_slice(bytes)
    }

    pub fn fe_from_big(&self, number: &BigInt) -> FieldElement<C> {
        FieldElement::from_big(number)
    }

    pub fn scalar_from_big(&self, number: &BigInt) -> RangeChecked<Scalar<C>> {
        Scalar::from_big(number)
    }

    pub fn scalar_from_bytes(&self, bytes: &[u8]) -> RangeChecked<Scalar<C>> {
        Scalar::from_le_bytes_checked(bytes)
    }

    pub fn decompress(&self, bytes: &[u8]) -> Result<Point<C>, Error> {
        Point::decompress(bytes)
    }

    pub fn scalar_mult(&self, scalar: &Scalar<C>, point: &Point<C>) -> Result<Point<C>, Error> {
        point.scalar_mul(scalar)
    }

    pub fn add(&self, p1: &Point<C>, p2: &Point<C>) -> Point<C> {
        p1.geometric_add(p2)
    }

    pub fn double(&self, p1: &Point<C>) -> Point<C> {
        p1.double()
    }
}
