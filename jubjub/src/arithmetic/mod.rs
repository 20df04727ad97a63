mod field;
mod modular;
mod point;
mod scalar;

pub use field::FieldElement;
pub use modular::Modular;
pub use point::{Point, COMPRESSED_LEN};
pub use scalar::{RangeChecked, Scalar};
