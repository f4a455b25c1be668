use f2poly::{Error, F2Poly};
use num_bigint::BigUint;

#[test]
fn degree_of_zero_is_minus_one() {
    assert_eq!(F2Poly::zero().degree(), -1);
    assert_eq!(F2Poly::one().degree(), 0);
    assert_eq!(F2Poly::x().degree(), 1);
    assert_eq!(F2Poly::monomial(200).degree(), 200);
}

#[test]
fn bin_string_round_trip() {
    let p = F2Poly::from_bin_str("10110101").unwrap();
    assert_eq!(p, F2Poly::from(0b10110101u64));
    assert_eq!(p.to_bin_string(), "10110101");
    assert_eq!(p.to_string(), "10110101");
    assert_eq!(format!("{p:b}"), "10110101");
}

#[test]
fn leading_zeros_are_dropped() {
    let p: F2Poly = "0001011".parse().unwrap();
    assert_eq!(p.to_bin_string(), "1011");
    assert_eq!(F2Poly::from_bin_str("0").unwrap(), F2Poly::zero());
    assert_eq!(F2Poly::zero().to_bin_string(), "0");
}

#[test]
fn hex_string_round_trip() {
    let s = "80000000000000000000000000000003";
    let p = F2Poly::from_hex_str(s).unwrap();
    assert_eq!(p.degree(), 127);
    assert!(p.coefficient(0) && p.coefficient(1) && !p.coefficient(2));
    assert_eq!(p.to_hex_string(), s);
    assert_eq!(format!("{p:x}"), s);
}

#[test]
fn hex_accepts_upper_case() {
    let p = F2Poly::from_hex_str("AbC").unwrap();
    assert_eq!(p, F2Poly::from(0xabcu64));
}

#[test]
fn parse_errors() {
    assert_eq!(F2Poly::from_bin_str(""), Err(Error::EmptyEncoding));
    assert_eq!(
        F2Poly::from_bin_str("1021"),
        Err(Error::MalformedEncoding {
            radix: 2,
            position: 2,
            found: '2'
        })
    );
    assert_eq!(
        F2Poly::from_hex_str("12g"),
        Err(Error::MalformedEncoding {
            radix: 16,
            position: 2,
            found: 'g'
        })
    );
    let err = F2Poly::from_bin_str("1x").unwrap_err();
    assert_eq!(err.to_string(), "invalid character 'x' at position 1 for base 2");
}

#[test]
fn add_is_xor() {
    let a = F2Poly::from(0b1101u64);
    let b = F2Poly::from(0b0111u64);
    assert_eq!(&a ^ &b, F2Poly::from(0b1010u64));
    assert_eq!(&a ^ &a, F2Poly::zero());

    let mut r = F2Poly::zero();
    f2poly::arithmetic::add(&mut r, &a, &b);
    assert_eq!(r, F2Poly::from(0b1010u64));
}

#[test]
fn shifts() {
    let mut p = F2Poly::from(0b1011u64);
    p.lshift(3);
    assert_eq!(p, F2Poly::from(0b1011000u64));
    p.rshift(4);
    assert_eq!(p, F2Poly::from(0b101u64));
    assert_eq!(&p << 2, F2Poly::from(0b10100u64));
    assert_eq!(&p >> 5, F2Poly::zero());
}

#[test]
fn coefficients() {
    let mut p = F2Poly::from(0b100101u64);
    assert!(p.coefficient(0));
    assert!(!p.coefficient(1));
    assert!(p.coefficient(5));
    assert!(!p.coefficient(1000));
    p.set_coefficient(1, true);
    p.set_coefficient(5, false);
    assert_eq!(p, F2Poly::from(0b111u64));
}

#[test]
fn dot_product_parity() {
    let a = F2Poly::from(0b1110u64);
    assert!(!a.dot(&F2Poly::from(0b0110u64)));
    assert!(a.dot(&F2Poly::from(0b0011u64)));
    assert!(!a.dot(&F2Poly::zero()));
}

#[test]
fn random_with_degree_sets_leading_coefficient() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for deg in [0u64, 1, 31, 64, 127] {
        let p = F2Poly::random_with_degree(&mut rng, deg);
        assert_eq!(p.degree(), deg as i64);
    }
}

#[test]
fn biguint_conversion() {
    let n = BigUint::from(0xdead_beefu32);
    let p = F2Poly::from(n.clone());
    assert_eq!(p.as_biguint(), &n);
    assert_eq!(p.into_biguint(), n);
}
