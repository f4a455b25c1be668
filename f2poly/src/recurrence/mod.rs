pub(crate) mod bit_source;
pub(crate) mod lfsr;
pub use bit_source::{BitSource, RngBits, collect_sequence};
pub use lfsr::Lfsr;

use num_bigint::BigUint;

use crate::arena::{Arena, slots};
use crate::arithmetic::powermod;
use crate::error::assert_nonzero;
use crate::euclid::exeuclid2;
use crate::poly::F2Poly;

/// Минимальный многочлен линейной рекуррентной последовательности.
///
/// Бит i полинома `seq` задаёт i-й элемент последовательности; используются
/// первые 2 * maxdeg элементов. Результат `a` таков, что
/// sum_j a_j * s_(n+j) = 0 для всех окон внутри этих 2 * maxdeg элементов.
/// Если элементов в действительности меньше, результат может оказаться
/// не минимальным.
///
/// Нулевая последовательность даёт полином 1.
pub fn minpoly(seq: &F2Poly, maxdeg: u64) -> F2Poly {
    log::debug!("minpoly: maxdeg = {maxdeg}");
    let len = 2 * maxdeg;
    let mut arena = Arena::new(slots::MINPOLY);
    let ([rseq, c, x2t], ws) = arena.scratch().claim::<3>();
    *x2t = F2Poly::monomial(len);
    rseq.set_zero();
    for i in 0..len {
        if seq.coefficient(i) {
            rseq.set_coefficient(len - 1 - i, true);
        }
    }
    if rseq.is_zero() {
        return F2Poly::one();
    }
    let mut poly = F2Poly::zero();
    exeuclid2(&mut poly, c, rseq, x2t, maxdeg, ws);
    log::debug!("minpoly: deg = {}, residue deg = {}", poly.degree(), c.degree());
    poly
}

/// Минимальный многочлен по 2 * maxdeg битам из источника.
pub fn minpoly_from_source<S: BitSource + ?Sized>(src: &mut S, maxdeg: u64) -> F2Poly {
    let seq = collect_sequence(src, 2 * maxdeg);
    minpoly(&seq, maxdeg)
}

/// Полином прыжка: x^step mod minpoly.
///
/// Состояние генератора через `step` шагов выражается через текущее
/// с этими коэффициентами за O(log step) умножений.
///
/// # Panics
/// Если `minpoly == 0`.
pub fn calc_jump(minpoly: &F2Poly, step: &BigUint) -> F2Poly {
    assert_nonzero(minpoly, "calc_jump");
    log::debug!("calc_jump: deg = {}, step = {step}", minpoly.degree());
    let mut arena = Arena::new(slots::CALC_JUMP);
    let ([x], ws) = arena.scratch().claim::<1>();
    *x = F2Poly::x();
    let mut jump = F2Poly::zero();
    powermod(&mut jump, x, step, minpoly, ws);
    jump
}

/// Проверяет, что `poly` аннулирует первые `len` элементов `seq`:
/// sum_j poly_j * s_(n+j) = 0 для каждого окна длины deg(poly) + 1.
pub fn annihilates(poly: &F2Poly, seq: &F2Poly, len: u64) -> bool {
    let deg = poly.degree();
    if deg < 0 {
        return true;
    }
    let span = deg as u64 + 1;
    if len < span {
        return true;
    }
    let mut window = seq.clone();
    for _ in 0..=(len - span) {
        if window.dot(poly) {
            return false;
        }
        window.rshift(1);
    }
    true
}
