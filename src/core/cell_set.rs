use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面のマス数
pub const CELL_COUNT: usize = 9;

const FULL_MASK: u16 = (1 << CELL_COUNT) - 1;

/// マス番号 (0..=8) の集合。ビットiがマスiに対応する。
///
/// イテレーションは常に昇順。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellSet(u16);

impl CellSet {
    pub const EMPTY: CellSet = CellSet(0);
    pub const ALL: CellSet = CellSet(FULL_MASK);

    pub const fn new() -> Self {
        CellSet(0)
    }

    /// Builds a set from cell indices. Indices outside the board are ignored.
    pub const fn from_cells<const N: usize>(cells: [usize; N]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < N {
            if cells[i] < CELL_COUNT {
                bits |= 1 << cells[i];
            }
            i += 1;
        }
        CellSet(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, cell: usize) -> bool {
        cell < CELL_COUNT && self.0 & (1 << cell) != 0
    }

    /// 追加。新規に追加された場合 true
    pub fn insert(&mut self, cell: usize) -> bool {
        if cell >= CELL_COUNT || self.contains(cell) {
            return false;
        }
        self.0 |= 1 << cell;
        true
    }

    /// 削除。存在した場合 true
    pub fn remove(&mut self, cell: usize) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.0 &= !(1 << cell);
        true
    }

    /// Returns a copy with `cell` added.
    pub fn with(self, cell: usize) -> Self {
        let mut next = self;
        next.insert(cell);
        next
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    pub fn intersection(self, other: CellSet) -> CellSet {
        CellSet(self.0 & other.0)
    }

    pub fn difference(self, other: CellSet) -> CellSet {
        CellSet(self.0 & !other.0)
    }

    /// 補集合 (盤面内のみ)
    pub fn complement(self) -> CellSet {
        CellSet(!self.0 & FULL_MASK)
    }

    pub fn is_superset(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_disjoint(self, other: CellSet) -> bool {
        self.0 & other.0 == 0
    }

    /// 最小のマス番号
    pub fn first(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    pub fn iter(self) -> Cells {
        Cells(self.0)
    }
}

/// 昇順イテレータ
#[derive(Debug, Clone)]
pub struct Cells(u16);

impl Iterator for Cells {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let cell = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

impl IntoIterator for CellSet {
    type Item = usize;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl FromIterator<usize> for CellSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}}")
    }
}
