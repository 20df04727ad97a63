use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("not a valid curve point")]
    InvalidPoint,
    #[error("scalar was not in the correct range")]
    ScalarOutOfRange,
    /// Reserved for callers that want to reject points in the cofactor
    /// torsion. No operation in this crate produces it.
    #[error("point was in the h-torsion")]
    SmallOrder,
    #[error("attempted to invert zero")]
    TriedToInvertZero,
    #[error("value is not a quadratic residue")]
    NoSquareRoot,
}
