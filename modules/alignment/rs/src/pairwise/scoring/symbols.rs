use alignkit_core_rs::rank::{Alphabet, Identity, RankMap};
use derive_getters::Getters;
use eyre::{ensure, Result};
use itertools::Itertools;

use crate::pairwise::scoring::Score;

/// Substitution scores between symbol ranks.
pub trait Scorer {
    type Score: Score;
    type Ranks: RankMap;

    /// Mapping used to turn raw symbols into ranks accepted by [`Scorer::substitution`].
    fn ranks(&self) -> &Self::Ranks;

    fn substitution(&self, rank1: u8, rank2: u8) -> Self::Score;

    /// The lowest and the highest substitution scores.
    fn bounds(&self) -> (Self::Score, Self::Score);
}

/// Unitary model: one score for identical symbols, another for everything else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Getters)]
pub struct Equality<S: Score> {
    equal: S,
    different: S,
}

impl<S: Score> Equality<S> {
    pub fn new(equal: S, different: S) -> Self {
        Self { equal, different }
    }
}

impl<S: Score> Scorer for Equality<S> {
    type Score = S;
    type Ranks = Identity;

    fn ranks(&self) -> &Self::Ranks {
        &Identity
    }

    #[inline(always)]
    fn substitution(&self, rank1: u8, rank2: u8) -> Self::Score {
        if rank1 == rank2 {
            self.equal
        } else {
            self.different
        }
    }

    fn bounds(&self) -> (Self::Score, Self::Score) {
        (self.equal.min(self.different), self.equal.max(self.different))
    }
}

/// Full `σ x σ` substitution table over an alphabet, row-major (`table[rank1 * σ + rank2]`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Matrix<S: Score> {
    alphabet: Alphabet,
    table: Vec<S>,
    bounds: (S, S),
}

impl<S: Score> Matrix<S> {
    pub fn new(alphabet: Alphabet, table: Vec<S>) -> Result<Self> {
        let size = alphabet.size();
        ensure!(
            table.len() == size * size,
            "Substitution table for {size} symbols must have {} entries, got {}",
            size * size,
            table.len()
        );
        let bounds = bounds(&table);
        Ok(Self {
            alphabet,
            table,
            bounds,
        })
    }

    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    pub fn table(&self) -> &[S] {
        &self.table
    }

    pub fn is_symmetric(&self) -> bool {
        let size = self.size();
        (0..size)
            .tuple_combinations()
            .all(|(i, j)| self.table[i * size + j] == self.table[j * size + i])
    }

    /// Compact copy of a symmetric table.
    pub fn triangular(&self) -> Result<Triangular<S>> {
        ensure!(
            self.is_symmetric(),
            "Only symmetric substitution tables can be stored as a triangle"
        );
        let size = self.size();
        let mut packed = Vec::with_capacity(size * (size + 1) / 2);
        for i in 0..size {
            packed.extend_from_slice(&self.table[i * size + i..(i + 1) * size]);
        }
        Ok(Triangular {
            alphabet: self.alphabet.clone(),
            packed,
            bounds: self.bounds,
        })
    }
}

impl<S: Score> Scorer for Matrix<S> {
    type Score = S;
    type Ranks = Alphabet;

    fn ranks(&self) -> &Self::Ranks {
        &self.alphabet
    }

    #[inline(always)]
    fn substitution(&self, rank1: u8, rank2: u8) -> Self::Score {
        self.table[rank1 as usize * self.size() + rank2 as usize]
    }

    fn bounds(&self) -> (Self::Score, Self::Score) {
        self.bounds
    }
}

/// Upper triangle of a symmetric substitution table, row by row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Triangular<S: Score> {
    alphabet: Alphabet,
    packed: Vec<S>,
    bounds: (S, S),
}

impl<S: Score> Triangular<S> {
    pub fn new(alphabet: Alphabet, table: Vec<S>) -> Result<Self> {
        Matrix::new(alphabet, table)?.triangular()
    }

    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    #[inline(always)]
    fn offset(&self, rank1: usize, rank2: usize) -> usize {
        let size = self.size();
        let (low, high) = if rank1 <= rank2 {
            (rank1, rank2)
        } else {
            (rank2, rank1)
        };
        let total = size * (size + 1) / 2;
        let tail = (size - low) * (size - low + 1) / 2;
        total - tail + (high - low)
    }
}

impl<S: Score> Scorer for Triangular<S> {
    type Score = S;
    type Ranks = Alphabet;

    fn ranks(&self) -> &Self::Ranks {
        &self.alphabet
    }

    #[inline(always)]
    fn substitution(&self, rank1: u8, rank2: u8) -> Self::Score {
        self.packed[self.offset(rank1 as usize, rank2 as usize)]
    }

    fn bounds(&self) -> (Self::Score, Self::Score) {
        self.bounds
    }
}

fn bounds<S: Score>(table: &[S]) -> (S, S) {
    table
        .iter()
        .copied()
        .minmax()
        .into_option()
        .unwrap_or((S::zero(), S::zero()))
}
