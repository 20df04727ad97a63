use super::Point;
use crate::arithmetic::field::FieldElement;
use crate::arithmetic::modular::Modular;
use crate::arithmetic::scalar::Scalar;
use crate::{Curve, Error};

impl<C: Curve> std::ops::Neg for Point<C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: Curve> std::ops::Neg for &Point<C> {
    type Output = Point<C>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<C: Curve> std::ops::Add for Point<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn add(self, rhs: &'b Point<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for Point<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.geometric_add(&rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&Point<C>> for Point<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::Sub for Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: &'b Point<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> std::ops::SubAssign<&Point<C>> for Point<C> {
    fn sub_assign(&mut self, rhs: &Self) {
        *self = &*self - rhs
    }
}

impl<C: Curve> Point<C> {
    pub fn negate(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// Affine addition with `a = -1`:
    ///
    /// `x3 = (x1 y2 + y1 x2) / (1 + d x1 x2 y1 y2)`
    /// `y3 = (y1 y2 + x1 x2) / (1 - d x1 x2 y1 y2)`
    ///
    /// Both denominators are inverted at once. They never vanish for points on
    /// the curve since `d` is not a square. Off-curve input built with
    /// `new_unchecked` can make one vanish, in which case the result is
    /// `(0, 0)`, which is not a curve point. The same holds for `double`.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        let d = FieldElement::<C>::new(C::COEFF_D);
        let x1x2 = self.x * rhs.x;
        let y1y2 = self.y * rhs.y;
        let t = d * x1x2 * y1y2;

        let numerator_x = self.x * rhs.y + self.y * rhs.x;
        let numerator_y = y1y2 + x1x2;
        Self::divide(numerator_x, numerator_y, t)
    }

    pub fn double(&self) -> Self {
        let d = FieldElement::<C>::new(C::COEFF_D);
        let xx = self.x.square();
        let yy = self.y.square();
        let xy = self.x * self.y;
        let t = d * xx * yy;

        Self::divide(xy + xy, yy + xx, t)
    }

    // x = nx / (1 + t), y = ny / (1 - t)
    fn divide(
        numerator_x: FieldElement<C>,
        numerator_y: FieldElement<C>,
        t: FieldElement<C>,
    ) -> Self {
        let denominator_x = FieldElement::ONE + t;
        let denominator_y = FieldElement::ONE - t;
        let inverse = (denominator_x * denominator_y)
            .invert()
            .unwrap_or_else(|_| {
                log::debug!("zero denominator in point addition, input is off the curve");
                FieldElement::ZERO
            });
        Self {
            x: numerator_x * denominator_y * inverse,
            y: numerator_y * denominator_x * inverse,
        }
    }

    pub fn double_in_place(&mut self) {
        *self = self.double();
    }

    /// Two accumulator double-and-add over the scalar bits, most significant
    /// first. Not constant time.
    pub fn scalar_mul(&self, scalar: &Scalar<C>) -> Result<Self, Error> {
        if !self.is_on_curve() {
            log::debug!("scalar multiplication rejected an off-curve point");
            return Err(Error::InvalidPoint);
        }

        let k = scalar.inner();
        let mut r0 = Self::IDENTITY;
        let mut r1 = *self;
        for i in (0..k.bits_vartime()).rev() {
            if k.bit_vartime(i) == 1 {
                r0 += &r1;
                r1.double_in_place();
            } else {
                r1 += &r0;
                r0.double_in_place();
            }
        }
        Ok(r0)
    }

    pub fn mul_by_cofactor(&self) -> Result<Self, Error> {
        self.scalar_mul(&Scalar::new(C::COFACTOR))
    }

    /// In-place cofactor multiplication. `self` is left untouched on error.
    pub fn clear_cofactor(&mut self) -> Result<(), Error> {
        *self = self.mul_by_cofactor()?;
        Ok(())
    }
}
