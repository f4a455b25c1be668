use std::mem;

use rand::Rng;

use crate::arena::{Arena, Scratch, slots};
use crate::arithmetic::{add, mod_assign, square};
use crate::euclid::gcd;
use crate::poly::F2Poly;

/// Проверка неприводимости над GF(2) (тест Рабина).
///
/// Для m = 1..deg/2 проверяется gcd(p, x^(2^m) + x) = 1,
/// где x^(2^m) mod p получается последовательным возведением в квадрат.
/// Если степень неприводимого полинома — показатель Мерсенна,
/// то полином примитивный.
pub fn is_irreducible(p: &F2Poly) -> bool {
    log::debug!("is_irreducible: deg = {}", p.degree());
    let mut arena = Arena::new(slots::IRREDUCIBLE);
    is_irreducible_in(p, arena.scratch())
}

/// То же, что [`is_irreducible`], но на памяти вызывающего.
///
/// Использует 8 ячеек рабочей памяти.
pub fn is_irreducible_in(p: &F2Poly, ws: Scratch<'_>) -> bool {
    // 0 и константа 1 не неприводимы, x и x + 1 — да
    match p.degree() {
        d if d < 1 => return false,
        1 => return true,
        _ => {}
    }
    let ([t2m, t1, t, work], mut ws) = ws.claim::<4>();
    *t2m = F2Poly::monomial(2);
    *t1 = F2Poly::x();
    add(t, t2m, t1);
    let half = p.degree() / 2;
    for _ in 1..=half {
        // x^(2^m) ≡ x (mod p): p делит x^(2^m) - x, значит приводим
        if t.is_zero() {
            return false;
        }
        gcd(work, p, t, ws.reborrow());
        if !work.is_one() {
            return false;
        }
        square(work, t2m);
        mod_assign(work, p, ws.reborrow());
        mem::swap(t2m, work);
        add(t, t2m, t1);
    }
    true
}

/// Все неприводимые полиномы ровно степени `n`, по возрастанию.
pub fn list_irreducibles(n: u64) -> Vec<F2Poly> {
    log::debug!("list_irreducibles: degree {n}");
    let mut res = Vec::new();
    let mut arena = Arena::new(slots::IRREDUCIBLE);
    let mut candidate = F2Poly::monomial(n);
    // перебираем все младшие части при выставленном старшем коэффициенте
    while candidate.degree() == n as i64 {
        if is_irreducible_in(&candidate, arena.scratch()) {
            res.push(candidate.clone());
        }
        candidate = F2Poly::from(candidate.into_biguint() + 1u32);
    }
    res
}

/// Случайный неприводимый полином степени `degree` (перебор кандидатов).
///
/// # Panics
/// Если `degree == 0`.
pub fn random_irreducible<R: Rng + ?Sized>(rng: &mut R, degree: u64) -> F2Poly {
    assert!(degree > 0, "irreducible polynomial degree must be positive");
    let mut arena = Arena::new(slots::IRREDUCIBLE);
    loop {
        let mut candidate = F2Poly::random_with_degree(rng, degree);
        if degree > 1 {
            // иначе делится на x
            candidate.set_coefficient(0, true);
        }
        if is_irreducible_in(&candidate, arena.scratch()) {
            log::debug!("random_irreducible: found {candidate:x}");
            return candidate;
        }
    }
}
