//! Арифметика полиномов над GF(2) на длинных целых.
//!
//! Бит i числа — коэффициент при x^i. Ядро работает в стиле
//! "выход первым аргументом" и берёт черновики из общей [`Arena`].

pub mod arena;
pub mod arithmetic;
pub mod error;
pub mod euclid;
pub mod irreducible;
pub mod poly;
pub mod recurrence;

pub use arena::{Arena, Scratch};
pub use error::{Error, Fault, Result};
pub use irreducible::{is_irreducible, list_irreducibles, random_irreducible};
pub use poly::F2Poly;
pub use recurrence::{BitSource, Lfsr, RngBits, calc_jump, minpoly};
