use thiserror::Error;

use crate::poly::F2Poly;

/// Ошибки, которые возвращаются вызывающему коду (разбор строк, параметры LFSR).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty polynomial string")]
    EmptyEncoding,

    #[error("invalid character {found:?} at position {position} for base {radix}")]
    MalformedEncoding {
        radix: u32,
        position: usize,
        found: char,
    },

    #[error("characteristic polynomial must have degree at least 1")]
    InvalidCharacteristic,

    #[error("LFSR seed must be non-zero and of degree below {degree}")]
    InvalidSeed { degree: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Нарушения контракта вызывающей стороной.
/// Никогда не возвращаются как `Err`: только текст паники.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("division by zero polynomial in {0}")]
    DivisionByZero(&'static str),

    #[error("scratch arena exhausted: {requested} slots requested, capacity is {capacity}")]
    ArenaExhausted { requested: usize, capacity: usize },
}

/// Паника с `Fault::DivisionByZero`, если `p == 0`.
#[track_caller]
pub(crate) fn assert_nonzero(p: &F2Poly, op: &'static str) {
    if p.is_zero() {
        panic!("{}", Fault::DivisionByZero(op));
    }
}
