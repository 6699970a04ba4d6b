use crate::{Grid, Position, BOX_SIZE, SIZE};

/// A set of candidate digits 1–9, one bit per digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    pub const EMPTY: DigitSet = DigitSet(0);

    /// The full set {1..9}, built once as a constant.
    pub const ALL: DigitSet = DigitSet(0b11_1111_1110);

    pub fn insert(&mut self, digit: u8) {
        debug_assert!((1..=9).contains(&digit), "digit out of range: {digit}");
        self.0 |= 1 << digit;
    }

    pub fn remove(&mut self, digit: u8) {
        self.0 &= !(1 << digit);
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0 & (1 << digit) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Digits in `self` but not in `other`.
    pub fn difference(self, other: DigitSet) -> DigitSet {
        DigitSet(self.0 & !other.0)
    }

    pub fn iter(self) -> Digits {
        self.into_iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Digits {
    bits: u16,
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let digit = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(digit)
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        Digits { bits: self.0 }
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = DigitSet::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

/// Digits legally placeable at `pos` given the current grid state.
///
/// A stateless pure function: unions the non-zero digits already present in
/// the cell's row, column, and 3×3 box, and returns {1..9} minus that
/// union. A non-empty cell yields the empty set — only meaningful at
/// ordering time, never queried for assignment. No caching; every call
/// reads the live grid (9+9+9 cell scans).
pub fn assignable_values(grid: &Grid, pos: Position) -> DigitSet {
    if grid.get(pos) != 0 {
        return DigitSet::EMPTY;
    }

    let mut used = DigitSet::EMPTY;
    for i in 0..SIZE {
        let in_row = grid.get(Position::new(pos.row, i));
        if in_row != 0 {
            used.insert(in_row);
        }
        let in_col = grid.get(Position::new(i, pos.col));
        if in_col != 0 {
            used.insert(in_col);
        }
    }

    let origin = pos.box_origin();
    for dr in 0..BOX_SIZE {
        for dc in 0..BOX_SIZE {
            let in_box = grid.get(Position::new(origin.row + dr, origin.col + dc));
            if in_box != 0 {
                used.insert(in_box);
            }
        }
    }

    DigitSet::ALL.difference(used)
}
