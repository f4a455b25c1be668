use std::fmt;
use std::ops::{BitXor, BitXorAssign, Shl, Shr};
use std::str::FromStr;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::error::{Error, Result};

/// Полином над GF(2), хранящийся как BigUint.
/// Бит i — коэффициент при x^i.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct F2Poly(BigUint);

impl F2Poly {
    pub fn zero() -> Self {
        F2Poly(BigUint::zero())
    }

    pub fn one() -> Self {
        F2Poly(BigUint::one())
    }

    /// Полином x
    pub fn x() -> Self {
        Self::monomial(1)
    }

    /// Одночлен x^n
    pub fn monomial(n: u64) -> Self {
        let mut p = BigUint::zero();
        p.set_bit(n, true);
        F2Poly(p)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Степень полинома.
    ///
    /// Для нулевого полинома возвращает -1, а не 0:
    /// все алгоритмы крейта рассчитаны на это соглашение.
    pub fn degree(&self) -> i64 {
        self.0.bits() as i64 - 1
    }

    /// Количество значащих бит (degree + 1, для нуля 0)
    pub fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Коэффициент при x^index; за пределами степени всегда 0
    pub fn coefficient(&self, index: u64) -> bool {
        self.0.bit(index)
    }

    pub fn set_coefficient(&mut self, index: u64, value: bool) {
        self.0.set_bit(index, value);
    }

    pub fn set_zero(&mut self) {
        self.0 = BigUint::zero();
    }

    pub fn set_one(&mut self) {
        self.0 = BigUint::one();
    }

    /// Умножение на x^n на месте
    pub fn lshift(&mut self, n: u64) {
        self.0 <<= n;
    }

    /// Деление на x^n на месте, младшие коэффициенты отбрасываются
    pub fn rshift(&mut self, n: u64) {
        self.0 >>= n;
    }

    /// Скалярное произведение над GF(2): чётность числа общих единичных коэффициентов.
    pub fn dot(&self, other: &F2Poly) -> bool {
        (&self.0 & &other.0).count_ones() % 2 == 1
    }

    /// Случайный полином ровно заданной степени (старший коэффициент выставлен)
    pub fn random_with_degree<R: Rng + ?Sized>(rng: &mut R, degree: u64) -> Self {
        let mut p = rng.gen_biguint(degree + 1);
        p.set_bit(degree, true);
        F2Poly(p)
    }

    /// Разбор строки из '0'/'1', старший коэффициент первым.
    pub fn from_bin_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 2)
    }

    /// Разбор шестнадцатеричной строки, старшая тетрада первой.
    pub fn from_hex_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 16)
    }

    fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::EmptyEncoding);
        }
        let mut digits = Vec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found.to_digit(radix) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(Error::MalformedEncoding {
                        radix,
                        position,
                        found,
                    })
                }
            }
        }
        BigUint::from_radix_be(&digits, radix)
            .map(F2Poly)
            .ok_or(Error::MalformedEncoding {
                radix,
                position: 0,
                found: s.chars().next().unwrap_or('\0'),
            })
    }

    pub fn to_bin_string(&self) -> String {
        self.0.to_str_radix(2)
    }

    pub fn to_hex_string(&self) -> String {
        self.0.to_str_radix(16)
    }
}

impl From<u64> for F2Poly {
    fn from(bits: u64) -> Self {
        F2Poly(BigUint::from(bits))
    }
}

impl From<BigUint> for F2Poly {
    fn from(bits: BigUint) -> Self {
        F2Poly(bits)
    }
}

impl FromStr for F2Poly {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bin_str(s)
    }
}

impl fmt::Display for F2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

impl fmt::Debug for F2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F2Poly({}, {:b})", self.degree(), self.0)
    }
}

impl fmt::Binary for F2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for F2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

// Сложение в GF(2)[x] = XOR
impl<'b> BitXor<&'b F2Poly> for &F2Poly {
    type Output = F2Poly;

    fn bitxor(self, rhs: &'b F2Poly) -> F2Poly {
        F2Poly(&self.0 ^ &rhs.0)
    }
}

impl BitXorAssign<&F2Poly> for F2Poly {
    fn bitxor_assign(&mut self, rhs: &F2Poly) {
        self.0 ^= &rhs.0;
    }
}

impl Shl<u64> for &F2Poly {
    type Output = F2Poly;

    fn shl(self, n: u64) -> F2Poly {
        F2Poly(&self.0 << n)
    }
}

impl Shr<u64> for &F2Poly {
    type Output = F2Poly;

    fn shr(self, n: u64) -> F2Poly {
        F2Poly(&self.0 >> n)
    }
}
