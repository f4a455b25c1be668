use crate::error::Fault;
use crate::poly::F2Poly;

/// Сколько ячеек рабочей памяти нужно каждой операции,
/// включая самый глубокий вызов внутри неё.
pub mod slots {
    pub const MOD: usize = 1;
    pub const DIVREM: usize = 1;
    pub const MUL: usize = 1;
    pub const MULMOD: usize = 2 + MOD;
    pub const POW2MOD: usize = 1 + MOD;
    pub const POWERMOD: usize = 2 + MULMOD;
    pub const GCD: usize = 3 + MOD;
    pub const EXEUCLID: usize = 11 + DIVREM;
    pub const EXEUCLID2: usize = 8 + DIVREM;
    pub const INVERSE_MOD: usize = 3 + EXEUCLID;
    pub const IRREDUCIBLE: usize = 4 + GCD;
    pub const MINPOLY: usize = 3 + EXEUCLID2;
    pub const CALC_JUMP: usize = 1 + POWERMOD;
}

/// Общая рабочая память: фиксированный набор полиномов-черновиков.
///
/// Создаётся вызывающим кодом под самую глубокую цепочку вызовов
/// и никогда не растёт.
pub struct Arena {
    slots: Vec<F2Poly>,
}

impl Arena {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![F2Poly::zero(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Вся память, курсор 0
    pub fn scratch(&mut self) -> Scratch<'_> {
        self.scratch_at(0)
    }

    /// Память начиная с ячейки `wp`
    pub fn scratch_at(&mut self, wp: usize) -> Scratch<'_> {
        let capacity = self.slots.len();
        if wp > capacity {
            panic!("{}", Fault::ArenaExhausted { requested: wp, capacity });
        }
        Scratch {
            slots: &mut self.slots[wp..],
            cursor: wp,
            capacity,
        }
    }
}

/// Свободный хвост рабочей памяти начиная с курсора.
///
/// Функция забирает себе ячейки через [`Scratch::claim`] и передаёт остаток
/// вызываемым функциям; их ячейки никогда не пересекаются со своими.
pub struct Scratch<'a> {
    slots: &'a mut [F2Poly],
    cursor: usize,
    capacity: usize,
}

impl<'a> Scratch<'a> {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    /// Забирает `N` ячеек `[cursor, cursor + N)` и возвращает остаток памяти.
    ///
    /// # Panics
    /// Если ячеек не хватает.
    #[track_caller]
    pub fn claim<const N: usize>(self) -> (&'a mut [F2Poly; N], Scratch<'a>) {
        let Scratch {
            slots,
            cursor,
            capacity,
        } = self;
        match slots.split_first_chunk_mut::<N>() {
            Some((own, rest)) => (
                own,
                Scratch {
                    slots: rest,
                    cursor: cursor + N,
                    capacity,
                },
            ),
            None => panic!(
                "{}",
                Fault::ArenaExhausted {
                    requested: cursor + N,
                    capacity,
                }
            ),
        }
    }

    /// Временная копия курсора для очередного вложенного вызова
    pub fn reborrow(&mut self) -> Scratch<'_> {
        Scratch {
            slots: &mut *self.slots,
            cursor: self.cursor,
            capacity: self.capacity,
        }
    }
}
