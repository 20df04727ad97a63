use jubjub::arithmetic::{Modular, Point, Scalar};
use jubjub::{BigInt, Error, Jubjub, JubjubParams};

type JubPoint = Point<Jubjub>;

// compressed points from the Zcash Sapling note encryption test vectors
const ZCASH_POINTS: [&str; 10] = [
    "db4cd2b0aac4f7eb8ca131f16567c445a9555126d3c29f14e3d776e841ae7415",
    "a6b13ea336ddb7a67bb09a0e68e9d3cfb39210831ea3a296ba09a922060fd38b",
    "66141739514b28f05def8a18eeee5eed4d44c6225c3c65d88dd9907708012f5a",
    "25eb55fccf761fc64e85a588efe6ead7832fb1f0f7a83165895bdff942925f5c",
    "8b2a337f03622c24ff381d4c546f6977f90522e92fde44c9d1bb099714b9db2b",
    "6b27daccb5a8207f532d10ca238f9786648a11b5966e51a2f7d89e15d29b8fdf",
    "d11da01f0b43bdd5288d32385b8771d223493c69802544043f77cf1d71c1cb8c",
    "32cb2806b882f1368b0d4a898f72c4c8f728132cc12456946e7f4cb0fb058da9",
    "9e64174b4ab981405c323b5e12475945a46d4fedf8060828041cd20e62fd2cef",
    "b68e9ee0c0678d7b3036931c831a25255f7ee487385a30316e15f6482b874fda",
];

#[test]
fn zcash_points_round_trip() {
    for encoded in ZCASH_POINTS {
        let bytes = hex::decode(encoded).unwrap();
        let point = JubPoint::decompress(&bytes).unwrap();
        assert!(point.is_on_curve());
        assert_eq!(point.compress().to_vec(), bytes);
    }
}

#[test]
fn generator_coordinates() {
    let params = JubjubParams::new().unwrap();
    let generator = params.generator();
    assert_eq!(
        hex::encode(generator.x().to_bytes()),
        "feada7f15dd3b3e4af81bf291b5df5ca87810ad6dd030f8bc88737bfb8cbed62"
    );
    assert_eq!(generator.y().to_bytes()[0], 11);

    let mut eight_g = generator;
    for _ in 0..3 {
        eight_g.double_in_place();
    }
    assert_eq!(eight_g, params.subgroup_generator());
    assert_eq!(
        hex::encode(params.subgroup_generator().compress()),
        "cb550cd538ea0cc1138480408e6eaab9b36c613f0dd3f7784fdb6eea837b13d7"
    );
}

#[test]
fn subgroup_order_annihilation() {
    let params = JubjubParams::new().unwrap();
    let n = BigInt::parse_bytes(
        b"6554484396890773809930967563523245729705921265872317281365359162392183254199",
        10,
    )
    .unwrap();
    let subgroup_generator = params.subgroup_generator();

    // n itself only reaches the ladder reduced to zero, so check (n - 1) S + S
    let n_minus_one = params
        .scalar_from_big(&(&n - BigInt::from(1)))
        .canonical()
        .unwrap();
    let almost = params
        .scalar_mult(&n_minus_one, &subgroup_generator)
        .unwrap();
    assert!(!almost.is_identity());
    assert_eq!(almost, -subgroup_generator);
    assert_eq!(params.add(&almost, &subgroup_generator), params.identity());

    let order = params.scalar_from_big(&n);
    assert_eq!(order.warning(), Some(Error::ScalarOutOfRange));
    assert_eq!(order.value(), Scalar::ZERO);
    assert_eq!(
        params.scalar_mult(&order.value(), &subgroup_generator),
        Ok(params.identity())
    );

    // the full group generator has order 8n
    let g = params.generator();
    let n_g = g.scalar_mul(&-Scalar::<Jubjub>::ONE).unwrap() + g;
    assert!(!n_g.is_identity());
    assert!(n_g.is_small_order());
}

#[test]
fn invalid_encodings() {
    let _ = env_logger::try_init();
    let params = JubjubParams::new().unwrap();
    assert_eq!(params.decompress(&[0u8; 31]), Err(Error::InvalidPoint));
    assert_eq!(params.decompress(&[0u8; 64]), Err(Error::InvalidPoint));

    let mut non_residue = [0u8; 32];
    non_residue[0] = 2;
    assert_eq!(params.decompress(&non_residue), Err(Error::InvalidPoint));
}
