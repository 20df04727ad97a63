use super::Point;
use crate::arithmetic::field::FieldElement;
use crate::arithmetic::modular::Modular;
use crate::{Curve, Error};

/// Width of a compressed point in bytes.
pub const COMPRESSED_LEN: usize = 32;

const SIGN_MASK: u8 = 0x80;

impl<C: Curve> Point<C> {
    /// Little-endian `y` with the parity of `x` in the top bit of the last
    /// byte. The curve equation is not checked.
    pub fn compress(&self) -> [u8; COMPRESSED_LEN] {
        let mut bytes = self.y.to_bytes();
        if self.x.is_odd() {
            bytes[COMPRESSED_LEN - 1] |= SIGN_MASK;
        }
        bytes
    }

    /// Recovers a point from its compressed form.
    ///
    /// A `y` at or above the field modulus is reduced, so such encodings
    /// decode successfully but do not compress back to the same bytes.
    pub fn decompress(bytes: &[u8]) -> Result<Self, Error> {
        let mut y_bytes: [u8; COMPRESSED_LEN] = bytes.try_into().map_err(|_| {
            log::debug!(
                "compressed point has {} bytes instead of {}",
                bytes.len(),
                COMPRESSED_LEN
            );
            Error::InvalidPoint
        })?;

        let sign = y_bytes[COMPRESSED_LEN - 1] & SIGN_MASK != 0;
        y_bytes[COMPRESSED_LEN - 1] &= !SIGN_MASK;
        let y = FieldElement::<C>::from_le_slice(&y_bytes);

        // x^2 = (y^2 - 1) / (d y^2 + 1)
        let d = FieldElement::<C>::new(C::COEFF_D);
        let yy = y.square();
        let v_inv = (d * yy + FieldElement::ONE).invert().map_err(|e| {
            log::debug!("point decompression failed: {}", e);
            Error::InvalidPoint
        })?;
        let u = (yy - FieldElement::ONE) * v_inv;
        let mut x = u.sqrt().map_err(|e| {
            log::debug!("point decompression failed: {}", e);
            Error::InvalidPoint
        })?;

        if x.is_odd() != sign {
            x = -x;
        }

        let point = Self { x, y };
        if !point.is_on_curve() {
            log::debug!("decompressed point is not on the curve");
            return Err(Error::InvalidPoint);
        }
        Ok(point)
    }
}

impl<C: Curve> TryFrom<&[u8]> for Point<C> {
    type Error = Error;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decompress(bytes)
    }
}

impl<C: Curve> From<&Point<C>> for [u8; COMPRESSED_LEN] {
    fn from(point: &Point<C>) -> Self {
        point.compress()
    }
}
