/// Partition of DP columns `1..=len` into strips: as many strips of `W` columns as fit, followed
/// by single-column strips for the remainder.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Strips<const W: usize> {
    next: usize,
    len: usize,
}

/// Strip of DP columns starting right after the given column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Strip {
    Wide(usize),
    Narrow(usize),
}

impl<const W: usize> Strips<W> {
    pub fn new(len: usize) -> Self {
        Self { next: 0, len }
    }
}

impl<const W: usize> Iterator for Strips<W> {
    type Item = Strip;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        let left = self.len - start;
        if left == 0 {
            None
        } else if left >= W {
            self.next += W;
            Some(Strip::Wide(start))
        } else {
            self.next += 1;
            Some(Strip::Narrow(start))
        }
    }
}

/// Copy `N` consecutive cells starting at `start` into a local strip cache.
#[inline(always)]
pub fn load<C: Copy, const N: usize>(cells: &[C], start: usize) -> [C; N] {
    std::array::from_fn(|ind| cells[start + ind])
}

/// Write the strip cache back.
#[inline(always)]
pub fn store<C: Copy, const N: usize>(cells: &mut [C], start: usize, cache: &[C; N]) {
    cells[start..start + N].copy_from_slice(cache);
}
