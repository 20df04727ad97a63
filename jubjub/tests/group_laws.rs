use jubjub::arithmetic::{FieldElement, Modular, Point, Scalar};
use jubjub::Jubjub;

use proptest::prelude::*;
use rand::rngs::OsRng;

type JubPoint = Point<Jubjub>;
type JubScalar = Scalar<Jubjub>;

fn subgroup_generator() -> JubPoint {
    JubPoint::generator().unwrap().mul_by_cofactor().unwrap()
}

// scalars act modulo the subgroup order, so sample inside the subgroup
fn point_from(bytes: &[u8; 32]) -> JubPoint {
    let k = JubScalar::from_le_slice(bytes);
    subgroup_generator().scalar_mul(&k).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn zero_scalar_gives_identity(bytes in any::<[u8; 32]>()) {
        let p = point_from(&bytes);
        prop_assert_eq!(p.scalar_mul(&JubScalar::ZERO), Ok(JubPoint::IDENTITY));
    }

    #[test]
    fn negation_gives_identity(bytes in any::<[u8; 32]>()) {
        let p = point_from(&bytes);
        prop_assert!(p.is_on_curve());
        prop_assert_eq!(p + (-p), JubPoint::IDENTITY);
    }

    #[test]
    fn double_is_self_addition(bytes in any::<[u8; 32]>()) {
        let p = point_from(&bytes);
        prop_assert_eq!(p.double(), p + p);
        prop_assert_eq!(p.double().double(), p + p + p + p);
    }

    #[test]
    fn ladder_matches_repeated_addition(bytes in any::<[u8; 32]>(), k in 0u64..64) {
        let p = point_from(&bytes);
        let mut expected = JubPoint::IDENTITY;
        for _ in 0..k {
            expected += p;
        }
        prop_assert_eq!(p.scalar_mul(&JubScalar::from_u64(k)), Ok(expected));
    }

    #[test]
    fn scalar_multiplication_distributes(
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
        p in any::<[u8; 32]>(),
    ) {
        let a = JubScalar::from_le_slice(&a);
        let b = JubScalar::from_le_slice(&b);
        let p = point_from(&p);
        let lhs = p.scalar_mul(&(a + b)).unwrap();
        let rhs = p.scalar_mul(&a).unwrap() + p.scalar_mul(&b).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn compression_round_trip(bytes in any::<[u8; 32]>()) {
        let p = point_from(&bytes);
        let compressed = p.compress();
        prop_assert_eq!(JubPoint::decompress(&compressed), Ok(p));
        prop_assert_eq!(JubPoint::decompress(&compressed).unwrap().compress(), compressed);
    }

    #[test]
    fn field_square_roots(bytes in any::<[u8; 32]>()) {
        let a = FieldElement::<Jubjub>::from_le_slice(&bytes);
        let square = a.square();
        let root = square.sqrt().unwrap();
        prop_assert!(root == a || root == -a);
    }
}

#[test]
fn random_scalars_commute_with_points() {
    let mut rng = OsRng;
    let g = subgroup_generator();
    for _ in 0..4 {
        let a = JubScalar::random(&mut rng);
        let b = JubScalar::random(&mut rng);
        let ab = g.scalar_mul(&a).unwrap().scalar_mul(&b).unwrap();
        let ba = g.scalar_mul(&b).unwrap().scalar_mul(&a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab, g.scalar_mul(&(a * b)).unwrap());
    }
}

#[test]
fn random_field_elements_invert() {
    let mut rng = OsRng;
    for _ in 0..16 {
        let a = FieldElement::<Jubjub>::random(&mut rng);
        if !a.is_zero() {
            assert_eq!(a * a.invert().unwrap(), FieldElement::ONE);
        }
    }
}
