use std::ops::{Deref, DerefMut};

use eyre::Result;

/// Dense DP vector (a whole DP column or row) that keeps its allocation between alignments.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DpVector<C> {
    cells: Vec<C>,
}

impl<C> DpVector<C> {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Refill the vector with `len` cells produced by the boundary initializer.
    pub fn reset(&mut self, len: usize, mut init: impl FnMut(usize) -> Result<C>) -> Result<()> {
        self.cells.clear();
        self.cells.reserve(len);
        for ind in 0..len {
            self.cells.push(init(ind)?);
        }
        Ok(())
    }

    /// Swap the boundary (first) cell with the given one and return the previous boundary.
    pub fn replace_boundary(&mut self, cell: C) -> C {
        std::mem::replace(&mut self.cells[0], cell)
    }
}

impl<C> Deref for DpVector<C> {
    type Target = [C];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl<C> DerefMut for DpVector<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cells
    }
}
