use rand::RngCore;

use crate::poly::F2Poly;

/// Источник битов для построения последовательностей.
pub trait BitSource {
    fn next_bit(&mut self) -> bool;
}

/// Младший бит каждого 32-битного слова генератора `rand`.
pub struct RngBits<R>(pub R);

impl<R: RngCore> BitSource for RngBits<R> {
    fn next_bit(&mut self) -> bool {
        self.0.next_u32() & 1 == 1
    }
}

/// Читает `len` битов: i-й бит источника становится коэффициентом при x^i.
pub fn collect_sequence<S: BitSource + ?Sized>(src: &mut S, len: u64) -> F2Poly {
    let mut seq = F2Poly::zero();
    for i in 0..len {
        if src.next_bit() {
            seq.set_coefficient(i, true);
        }
    }
    seq
}
