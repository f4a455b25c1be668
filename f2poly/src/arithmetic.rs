use std::mem;
use std::ops::{Mul, Rem};

use num_bigint::BigUint;

use crate::arena::{Arena, Scratch, slots};
use crate::error::assert_nonzero;
use crate::poly::F2Poly;

/// r = a + b (XOR)
pub fn add(r: &mut F2Poly, a: &F2Poly, b: &F2Poly) {
    r.clone_from(a);
    *r ^= b;
}

/// Остаток от деления на месте: a %= b
///
/// Использует 1 ячейку рабочей памяти.
///
/// # Panics
/// Если `b == 0`.
pub fn mod_assign(a: &mut F2Poly, b: &F2Poly, ws: Scratch<'_>) {
    assert_nonzero(b, "mod");
    let ([x], _) = ws.claim::<1>();
    if b.is_one() {
        a.set_zero();
        return;
    }
    let deg = b.degree();
    let diff = a.degree() - deg;
    if diff < 0 {
        return;
    } else if diff == 0 {
        *a ^= b;
        return;
    }
    // выравниваем старший бит делителя по старшему биту a
    x.clone_from(b);
    x.lshift(diff as u64);
    *a ^= &*x;
    let mut zdeg = a.degree();
    while zdeg >= deg {
        x.rshift((x.degree() - zdeg) as u64);
        *a ^= &*x;
        zdeg = a.degree();
    }
}

/// Деление с остатком: a = q * b + r, deg(r) < deg(b)
///
/// Использует 1 ячейку рабочей памяти.
///
/// # Panics
/// Если `b == 0`.
pub fn divrem(q: &mut F2Poly, r: &mut F2Poly, a: &F2Poly, b: &F2Poly, ws: Scratch<'_>) {
    assert_nonzero(b, "divrem");
    log::trace!("divrem: a = {a}, b = {b}");
    let deg = b.degree();
    let diff = a.degree() - deg;
    if diff < 0 {
        r.clone_from(a);
        q.set_zero();
        return;
    } else if diff == 0 {
        add(r, a, b);
        q.set_one();
        return;
    } else if b.is_one() {
        r.set_zero();
        q.clone_from(a);
        return;
    }
    let ([x], _) = ws.claim::<1>();
    q.set_zero();
    r.clone_from(a);
    x.clone_from(b);
    let mut pos = diff;
    x.lshift(diff as u64);
    q.set_coefficient(pos as u64, true);
    *r ^= &*x;
    let mut zdeg = r.degree();
    while zdeg >= deg {
        let d = x.degree() - zdeg;
        pos -= d;
        x.rshift(d as u64);
        q.set_coefficient(pos as u64, true);
        *r ^= &*x;
        zdeg = r.degree();
    }
}

/// r = a * b
///
/// Итерация идёт по битам сомножителя меньшей степени.
/// Использует 1 ячейку рабочей памяти.
pub fn mul(r: &mut F2Poly, a: &F2Poly, b: &F2Poly, ws: Scratch<'_>) {
    let (a, b) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
    let ([v], _) = ws.claim::<1>();
    v.clone_from(a);
    r.set_zero();
    for bpos in 0..b.bit_len() {
        if b.coefficient(bpos) {
            *r ^= &*v;
        }
        v.lshift(1); // узкое место
    }
}

/// r = a^2 без приведения: коэффициент при x^i переходит в x^(2i)
pub fn square(r: &mut F2Poly, a: &F2Poly) {
    r.set_zero();
    for i in (0..a.bit_len()).rev() {
        if a.coefficient(i) {
            r.set_coefficient(2 * i, true);
        }
    }
}

/// r = (a * b) % modulus
///
/// Оба сомножителя сначала приводятся по модулю, затем сдвигаемая копия
/// складывается с модулем, как только её степень доходит до deg(modulus).
/// Использует 3 ячейки рабочей памяти.
///
/// # Panics
/// Если `modulus == 0`.
pub fn mulmod(r: &mut F2Poly, a: &F2Poly, b: &F2Poly, modulus: &F2Poly, ws: Scratch<'_>) {
    assert_nonzero(modulus, "mulmod");
    let (a, b) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
    let ([v, w], mut ws) = ws.claim::<2>();
    v.clone_from(a);
    w.clone_from(b);
    r.set_zero();
    mod_assign(v, modulus, ws.reborrow());
    mod_assign(w, modulus, ws);
    let mdeg = modulus.degree();
    for bpos in 0..w.bit_len() {
        if w.coefficient(bpos) {
            *r ^= &*v;
        }
        v.lshift(1); // узкое место
        if v.degree() == mdeg {
            *v ^= modulus;
        }
    }
}

/// r = (a * a) % modulus
///
/// Биты перебираются по самому `a`, сдвигается приведённая копия `a`.
/// Использует 2 ячейки рабочей памяти.
///
/// # Panics
/// Если `modulus == 0`.
pub fn pow2mod(r: &mut F2Poly, a: &F2Poly, modulus: &F2Poly, ws: Scratch<'_>) {
    assert_nonzero(modulus, "pow2mod");
    let ([v], ws) = ws.claim::<1>();
    v.clone_from(a);
    r.set_zero();
    mod_assign(v, modulus, ws);
    let mdeg = modulus.degree();
    for bpos in 0..a.bit_len() {
        if a.coefficient(bpos) {
            *r ^= &*v;
        }
        v.lshift(1);
        if v.degree() == mdeg {
            *v ^= modulus;
        }
    }
}

/// r = x^e % modulus, где e — обычное целое число (не полином).
///
/// Результат всегда приведён: deg(r) < deg(modulus), в том числе при e = 0.
/// Использует 5 ячеек рабочей памяти.
///
/// # Panics
/// Если `modulus == 0`.
pub fn powermod(r: &mut F2Poly, x: &F2Poly, e: &BigUint, modulus: &F2Poly, ws: Scratch<'_>) {
    assert_nonzero(modulus, "powermod");
    log::trace!("powermod: x = {x}, e = {e}, mod = {modulus}");
    let ([s, t], mut ws) = ws.claim::<2>();
    s.clone_from(x);
    r.set_one();
    mod_assign(r, modulus, ws.reborrow());
    let bits = e.bits();
    for bpos in 0..bits {
        if e.bit(bpos) {
            mulmod(t, r, s, modulus, ws.reborrow());
            mem::swap(r, t);
        }
        // последний квадрат не нужен
        if bpos + 1 < bits {
            pow2mod(t, s, modulus, ws.reborrow());
            mem::swap(s, t);
        }
    }
}

impl F2Poly {
    /// Частное и остаток, с собственной рабочей памятью.
    ///
    /// # Panics
    /// Если `divisor == 0`.
    pub fn div_rem(&self, divisor: &F2Poly) -> (F2Poly, F2Poly) {
        let mut arena = Arena::new(slots::DIVREM);
        let mut q = F2Poly::zero();
        let mut r = F2Poly::zero();
        divrem(&mut q, &mut r, self, divisor, arena.scratch());
        (q, r)
    }
}

impl<'b> Mul<&'b F2Poly> for &F2Poly {
    type Output = F2Poly;

    fn mul(self, rhs: &'b F2Poly) -> F2Poly {
        let mut arena = Arena::new(slots::MUL);
        let mut r = F2Poly::zero();
        mul(&mut r, self, rhs, arena.scratch());
        r
    }
}

impl<'b> Rem<&'b F2Poly> for &F2Poly {
    type Output = F2Poly;

    fn rem(self, modulus: &'b F2Poly) -> F2Poly {
        let mut arena = Arena::new(slots::MOD);
        let mut r = self.clone();
        mod_assign(&mut r, modulus, arena.scratch());
        r
    }
}
