use num_bigint::BigUint;

use super::{BitSource, calc_jump, collect_sequence};
use crate::error::{Error, Result};
use crate::poly::F2Poly;

/// Регистр сдвига с линейной обратной связью (схема Фибоначчи).
///
/// Для характеристического полинома p = x^d + sum c_i x^i выдаёт
/// последовательность s_(n+d) = sum c_i s_(n+i). В состоянии бит i хранит
/// s_(n+i), младший бит выдаётся следующим.
#[derive(Debug, Clone)]
pub struct Lfsr {
    charpoly: F2Poly,
    taps: F2Poly,
    state: F2Poly,
    degree: u64,
}

impl Lfsr {
    pub fn new(charpoly: F2Poly, seed: F2Poly) -> Result<Self> {
        let degree = charpoly.degree();
        if degree < 1 {
            return Err(Error::InvalidCharacteristic);
        }
        let degree = degree as u64;
        if seed.is_zero() || seed.degree() >= degree as i64 {
            return Err(Error::InvalidSeed { degree });
        }
        let mut taps = charpoly.clone();
        taps.set_coefficient(degree, false);
        Ok(Self {
            charpoly,
            taps,
            state: seed,
            degree,
        })
    }

    /// Выдаёт s_n и сдвигает окно на один элемент.
    pub fn step(&mut self) -> bool {
        let out = self.state.coefficient(0);
        let feedback = self.state.dot(&self.taps);
        self.state.rshift(1);
        if feedback {
            self.state.set_coefficient(self.degree - 1, true);
        }
        out
    }

    pub fn state(&self) -> &F2Poly {
        &self.state
    }

    pub fn charpoly(&self) -> &F2Poly {
        &self.charpoly
    }

    pub fn degree(&self) -> u64 {
        self.degree
    }

    /// Переход на `steps` шагов вперёд через полином прыжка x^steps mod p.
    ///
    /// Новое состояние: s_(n+k+i) = sum_j J_j s_(n+i+j), где J это полином
    /// прыжка; для этого хватает 2d - 1 ближайших элементов.
    pub fn jump(&mut self, steps: &BigUint) {
        let jump = calc_jump(&self.charpoly, steps);
        let mut probe = self.clone();
        let window = collect_sequence(&mut probe, 2 * self.degree - 1);
        let mut state = F2Poly::zero();
        for i in 0..self.degree {
            if (&window >> i).dot(&jump) {
                state.set_coefficient(i, true);
            }
        }
        log::debug!("lfsr jump: {steps} steps, state {state:x}");
        self.state = state;
    }
}

impl BitSource for Lfsr {
    fn next_bit(&mut self) -> bool {
        self.step()
    }
}
