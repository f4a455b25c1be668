use std::mem;

use crate::arena::{Arena, Scratch, slots};
use crate::arithmetic::{add, divrem, mod_assign, mul};
use crate::error::assert_nonzero;
use crate::poly::F2Poly;

// (p0, p1, p2) <- (p1, p2, мусор)
fn shift_down(p0: &mut F2Poly, p1: &mut F2Poly, p2: &mut F2Poly) {
    mem::swap(p0, p1);
    mem::swap(p1, p2);
}

/// Расширенный алгоритм Евклида.
/// Находит a, b, c такие, что a*x + b*y = c = gcd(x, y).
///
/// Использует 12 ячеек рабочей памяти.
///
/// # Panics
/// Если `x == 0` или `y == 0`.
pub fn exeuclid(
    a: &mut F2Poly,
    b: &mut F2Poly,
    c: &mut F2Poly,
    x: &F2Poly,
    y: &F2Poly,
    ws: Scratch<'_>,
) {
    assert_nonzero(x, "exeuclid");
    assert_nonzero(y, "exeuclid");
    log::trace!("exeuclid: x = {x}, y = {y}");
    let ([q, r0, r1, r2, a0, a1, a2, b0, b1, b2, tmp], mut ws) = ws.claim::<11>();
    r0.clone_from(x);
    r1.clone_from(y);
    a0.set_one();
    a1.set_zero();
    b0.set_zero();
    b1.set_one();
    while !r1.is_zero() {
        divrem(q, r2, r0, r1, ws.reborrow());
        mul(tmp, q, a1, ws.reborrow());
        add(a2, a0, tmp);
        mul(tmp, q, b1, ws.reborrow());
        add(b2, b0, tmp);
        shift_down(r0, r1, r2);
        shift_down(a0, a1, a2);
        shift_down(b0, b1, b2);
    }
    a.clone_from(a0);
    b.clone_from(b0);
    c.clone_from(r0);
    log::trace!("exeuclid: a = {a}, b = {b}, c = {c}");
}

/// Расширенный алгоритм Евклида, остановленный по степени остатка.
///
/// Отслеживается только коэффициент при x. Цикл прерывается, как только
/// степень нового остатка становится меньше `m`; тогда a*x ≡ c (mod y)
/// и deg(c) < m. На паре (развёрнутая последовательность, x^(2m)) это
/// алгоритм Берлекэмпа–Мэсси.
///
/// Использует 9 ячеек рабочей памяти.
///
/// # Panics
/// Если `x == 0` или `y == 0`.
pub fn exeuclid2(
    a: &mut F2Poly,
    c: &mut F2Poly,
    x: &F2Poly,
    y: &F2Poly,
    m: u64,
    ws: Scratch<'_>,
) {
    assert_nonzero(x, "exeuclid2");
    assert_nonzero(y, "exeuclid2");
    log::trace!("exeuclid2: x = {x}, y = {y}, m = {m}");
    let ([q, r0, r1, r2, a0, a1, a2, tmp], mut ws) = ws.claim::<8>();
    r0.clone_from(x);
    r1.clone_from(y);
    a0.set_one();
    a1.set_zero();
    let bound = m as i64;
    loop {
        divrem(q, r2, r0, r1, ws.reborrow());
        mul(tmp, q, a1, ws.reborrow());
        add(a2, a0, tmp);
        // нулевой остаток имеет степень -1 и тоже останавливает цикл
        if r2.degree() < bound {
            break;
        }
        shift_down(r0, r1, r2);
        shift_down(a0, a1, a2);
    }
    a.clone_from(a2);
    c.clone_from(r2);
}

/// Наибольший общий делитель, только через остатки.
///
/// Использует 4 ячейки рабочей памяти.
///
/// # Panics
/// Если `x == 0` или `y == 0`.
pub fn gcd(g: &mut F2Poly, x: &F2Poly, y: &F2Poly, ws: Scratch<'_>) {
    assert_nonzero(x, "gcd");
    assert_nonzero(y, "gcd");
    let ([r0, r1, r2], mut ws) = ws.claim::<3>();
    r0.clone_from(x);
    r1.clone_from(y);
    while !r1.is_zero() {
        r2.clone_from(r0);
        mod_assign(r2, r1, ws.reborrow());
        shift_down(r0, r1, r2);
    }
    g.clone_from(r0);
}

/// Обратный элемент: a⁻¹ mod modulus, если gcd(a, modulus) = 1.
///
/// # Panics
/// Если `modulus == 0`.
pub fn inverse_mod(a: &F2Poly, modulus: &F2Poly) -> Option<F2Poly> {
    assert_nonzero(modulus, "inverse_mod");
    if modulus.is_one() {
        return None;
    }
    let mut arena = Arena::new(slots::INVERSE_MOD);
    let ([reduced, b, c], mut ws) = arena.scratch().claim::<3>();
    reduced.clone_from(a);
    mod_assign(reduced, modulus, ws.reborrow());
    if reduced.is_zero() {
        return None;
    }
    let mut inv = F2Poly::zero();
    exeuclid(&mut inv, b, c, reduced, modulus, ws);
    if !c.is_one() {
        return None;
    }
    mod_assign(&mut inv, modulus, arena.scratch());
    Some(inv)
}
