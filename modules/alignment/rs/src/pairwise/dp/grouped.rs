use std::ops::RangeInclusive;

/// Coarse partition of DP rows `1..=len` into consecutive groups of (at most) `size` rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Groups {
    len: usize,
    size: usize,
}

impl Groups {
    pub fn new(len: usize, size: usize) -> Self {
        debug_assert!(size > 0);
        Self { len, size }
    }

    pub fn len(&self) -> usize {
        self.len.div_ceil(self.size)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rows covered by the group.
    pub fn rows(&self, group: usize) -> RangeInclusive<usize> {
        let first = group * self.size + 1;
        let last = (first + self.size - 1).min(self.len);
        first..=last
    }

    /// Index of the group covering the (non-boundary) row.
    pub fn of(&self, row: usize) -> usize {
        debug_assert!(row >= 1 && row <= self.len);
        (row - 1) / self.size
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, RangeInclusive<usize>)> + '_ {
        (0..self.len()).map(move |group| (group, self.rows(group)))
    }
}
