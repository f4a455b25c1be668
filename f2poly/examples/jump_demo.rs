// examples/jump_demo.rs
//
// RUST_LOG=debug cargo run -p f2poly --example jump_demo

use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

use f2poly::recurrence::{Lfsr, RngBits, collect_sequence, minpoly, minpoly_from_source};
use f2poly::{F2Poly, calc_jump, is_irreducible, random_irreducible};

fn main() -> f2poly::Result<()> {
    env_logger::init();

    // Генератор с известным характеристическим полиномом
    let charpoly = F2Poly::from_hex_str("80000000000000000000000000000003")?;
    let mut reg = Lfsr::new(charpoly.clone(), F2Poly::from(0xdead_beefu64))?;
    let seq = collect_sequence(&mut reg.clone(), 2 * reg.degree());
    let recovered = minpoly(&seq, reg.degree());
    println!("recovered minpoly: {recovered:x}");
    println!("matches charpoly:  {}", recovered == charpoly);
    println!("irreducible:       {}", is_irreducible(&recovered));

    // Прыжок на 2^100 шагов
    let step = BigUint::from(1u32) << 100usize;
    let jump = calc_jump(&recovered, &step);
    println!("jump poly (x^2^100 mod p): {jump:x}");
    reg.jump(&step);
    println!("state after jump: {:x}", reg.state());

    // Случайный полином и последовательность из rand
    let mut rng = StdRng::seed_from_u64(2024);
    let p = random_irreducible(&mut rng, 89);
    println!("random irreducible of degree 89: {p:x}");
    let noise = minpoly_from_source(&mut RngBits(rng), 32);
    println!("minpoly of 64 random bits: {noise:b} (deg {})", noise.degree());

    Ok(())
}
