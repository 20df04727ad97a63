//! Affine arithmetic on the Jubjub twisted Edwards curve.
//!
//! All arithmetic is variable-time. It is meant for public values such as
//! commitments and note encryption keys, not for secret scalars that need to
//! resist timing side channels.
#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
mod error;
mod params;

pub use bigint::U256;
pub use curve::{Curve, Jubjub};
pub use error::Error;
pub use num_bigint::{BigInt, BigUint};
pub use params::CurveParams;

pub type JubjubParams = CurveParams<Jubjub>;
