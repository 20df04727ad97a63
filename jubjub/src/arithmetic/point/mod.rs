mod encoding;
mod ops;

pub use encoding::COMPRESSED_LEN;

use super::field::FieldElement;
use super::modular::Modular;
use crate::{Curve, Error};

use std::fmt;

/// An affine point on a twisted Edwards curve with `a = -1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point<C: Curve> {
    x: FieldElement<C>,
    y: FieldElement<C>,
}

impl<C: Curve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)
    }
}

impl<C: Curve> Point<C> {
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// Builds a point without checking the curve equation.
    pub fn new_unchecked(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self { x, y }
    }

    pub fn from_affine(x: FieldElement<C>, y: FieldElement<C>) -> Result<Self, Error> {
        let point = Self { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// The full group generator, recovered from its `y` coordinate with an
    /// even `x`.
    pub fn generator() -> Result<Self, Error> {
        Self::decompress(&FieldElement::<C>::new(C::GENERATOR_Y).to_bytes())
    }

    /// Checks `-x^2 + y^2 - 1 - d x^2 y^2 = 0`.
    pub fn is_on_curve(&self) -> bool {
        let d = FieldElement::<C>::new(C::COEFF_D);
        let xx = self.x.square();
        let yy = self.y.square();
        (yy - xx - FieldElement::ONE - d * xx * yy).is_zero()
    }

    pub fn is_identity(&self) -> bool {
        self.x == FieldElement::ZERO && self.y == FieldElement::ONE
    }

    /// Whether the point lies in the torsion subgroup of order dividing 8.
    pub fn is_small_order(&self) -> bool {
        self.double().double().double().is_identity()
    }

    pub fn x(&self) -> &FieldElement<C> {
        &self.x
    }

    pub fn y(&self) -> &FieldElement<C> {
        &self.y
    }
}
