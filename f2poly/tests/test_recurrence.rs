use f2poly::irreducible::random_irreducible;
use f2poly::recurrence::{
    BitSource, Lfsr, RngBits, annihilates, calc_jump, collect_sequence, minpoly, minpoly_from_source,
};
use f2poly::{Error, F2Poly};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn hex(s: &str) -> F2Poly {
    F2Poly::from_hex_str(s).unwrap()
}

fn lfsr(charpoly: &F2Poly, seed: u64) -> Lfsr {
    Lfsr::new(charpoly.clone(), F2Poly::from(seed)).unwrap()
}

#[test]
fn minpoly_recovers_small_charpolys() {
    for p in ["13", "b", "19", "25", "11b"] {
        let p = hex(p);
        let deg = p.degree() as u64;
        let mut reg = lfsr(&p, 1);
        let seq = collect_sequence(&mut reg, 2 * deg);
        assert_eq!(minpoly(&seq, deg), p, "charpoly {p:x}");
    }
}

#[test]
fn minpoly_recovers_degree_127_trinomial() {
    let p = hex("80000000000000000000000000000003");
    let mut reg = lfsr(&p, 0xdead_beef);
    assert_eq!(minpoly_from_source(&mut reg, 127), p);
}

#[test]
fn minpoly_with_slack_in_maxdeg() {
    let p = hex("13");
    let mut reg = lfsr(&p, 0b0110);
    assert_eq!(minpoly_from_source(&mut reg, 9), p);
}

#[test]
fn minpoly_of_reducible_charpoly_depends_on_seed() {
    // (x + 1)^3
    let p = F2Poly::from(0b1111u64);
    let mut reg = lfsr(&p, 0b001);
    assert_eq!(minpoly_from_source(&mut reg, 3), p);
    // константная последовательность 1, 1, 1, ...
    let mut reg = lfsr(&p, 0b111);
    assert_eq!(minpoly_from_source(&mut reg, 3), F2Poly::from(0b11u64));
}

#[test]
fn minpoly_of_zero_sequence_is_one() {
    assert_eq!(minpoly(&F2Poly::zero(), 8), F2Poly::one());
    // биты за пределами 2 * maxdeg не читаются
    assert_eq!(minpoly(&F2Poly::monomial(16), 8), F2Poly::one());
}

#[test]
fn minpoly_of_impulse() {
    // 1, 0, 0, 0: s_(n+1) = 0
    assert_eq!(minpoly(&F2Poly::one(), 2), F2Poly::x());
}

#[test]
fn rng_bits_takes_low_bit_of_each_word() {
    let mut reference = StdRng::seed_from_u64(5);
    let expected: Vec<bool> = (0..64).map(|_| reference.next_u32() & 1 == 1).collect();
    let mut src = RngBits(StdRng::seed_from_u64(5));
    let actual: Vec<bool> = (0..64).map(|_| src.next_bit()).collect();
    assert_eq!(actual, expected);

    let seq = collect_sequence(&mut RngBits(StdRng::seed_from_u64(5)), 64);
    for (i, bit) in expected.iter().enumerate() {
        assert_eq!(seq.coefficient(i as u64), *bit);
    }
}

#[test]
fn random_lfsr_is_annihilated_by_recovered_minpoly() {
    let mut rng = StdRng::seed_from_u64(2024);
    for degree in [13u64, 31, 61] {
        let p = random_irreducible(&mut rng, degree);
        let seed = F2Poly::random_with_degree(&mut rng, degree - 1);
        let mut reg = Lfsr::new(p.clone(), seed).unwrap();
        let len = 2 * (degree + 3);
        let seq = collect_sequence(&mut reg, len);
        let poly = minpoly(&seq, degree + 3);
        assert_eq!(poly, p);
        assert!(annihilates(&poly, &seq, len));
    }
}

#[test]
fn annihilates_detects_mismatch() {
    let p = hex("13");
    let mut reg = lfsr(&p, 1);
    let seq = collect_sequence(&mut reg, 30);
    assert!(annihilates(&p, &seq, 30));
    assert!(!annihilates(&hex("19"), &seq, 30));
    assert!(!annihilates(&F2Poly::one(), &seq, 30));
    assert!(annihilates(&F2Poly::zero(), &seq, 30));
}

#[test]
fn calc_jump_values() {
    let p = F2Poly::from(0b10011u64);
    assert_eq!(calc_jump(&p, &BigUint::from(37u32)), F2Poly::from(0b1011u64));
    assert!(calc_jump(&p, &BigUint::from(15u32)).is_one());
    assert!(calc_jump(&p, &BigUint::from(0u32)).is_one());
    assert_eq!(calc_jump(&p, &BigUint::from(3u32)), F2Poly::monomial(3));
}

#[test]
#[should_panic(expected = "division by zero polynomial in calc_jump")]
fn calc_jump_zero_minpoly_panics() {
    calc_jump(&F2Poly::zero(), &BigUint::from(1u32));
}

#[test]
fn jump_matches_stepping() {
    let charpolys = [
        hex("13"),
        F2Poly::from(0b1111u64),
        hex("80000000000000000000000000000003"),
    ];
    for p in charpolys {
        for steps in [0u32, 1, 5, 1000] {
            let mut stepped = lfsr(&p, 0b101);
            for _ in 0..steps {
                stepped.step();
            }
            let mut jumped = lfsr(&p, 0b101);
            jumped.jump(&BigUint::from(steps));
            assert_eq!(jumped.state(), stepped.state(), "charpoly {p:x}, {steps} steps");
        }
    }
}

#[test]
fn jump_by_period_is_identity() {
    let p = hex("80000000000000000000000000000003");
    let mut reg = lfsr(&p, 0x1234_5678);
    let start = reg.state().clone();
    let period = (BigUint::from(1u32) << 127usize) - 1u32;
    reg.jump(&period);
    assert_eq!(reg.state(), &start);
}

#[test]
fn lfsr_accessors() {
    let p = hex("13");
    let reg = lfsr(&p, 0b1001);
    assert_eq!(reg.charpoly(), &p);
    assert_eq!(reg.degree(), 4);
    assert_eq!(reg.state(), &F2Poly::from(0b1001u64));
    assert_eq!(
        Lfsr::new(F2Poly::zero(), F2Poly::one()).unwrap_err(),
        Error::InvalidCharacteristic
    );
}
