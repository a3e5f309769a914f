use std::fmt::{Debug, Formatter};

use eyre::{ensure, Result};
use impl_tools::autoimpl;

/// Maps raw sequence symbols to dense ranks `0..size`.
#[autoimpl(for<T: trait + ?Sized> &T, Box<T>)]
pub trait RankMap {
    /// Rank of the symbol or None if the symbol is not part of the mapping.
    fn rank(&self, symbol: u8) -> Option<u8>;

    /// Number of distinct ranks produced by the mapping.
    fn size(&self) -> usize;
}

/// Every byte is its own rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Identity;

impl RankMap for Identity {
    #[inline(always)]
    fn rank(&self, symbol: u8) -> Option<u8> {
        Some(symbol)
    }

    #[inline(always)]
    fn size(&self) -> usize {
        256
    }
}

/// Case-insensitive mapping from an ordered list of symbols to their positions in the list.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<u8>,
    lookup: [Option<u8>; 256],
}

impl Alphabet {
    pub fn new(symbols: &[u8]) -> Result<Self> {
        ensure!(!symbols.is_empty(), "Alphabet must contain at least one symbol");
        ensure!(
            symbols.len() < 256,
            "Alphabet can't contain more than 255 symbols, got {}",
            symbols.len()
        );

        let alphabet = Self::build(symbols);
        for (ind, symbol) in symbols.iter().enumerate() {
            ensure!(
                alphabet.lookup[*symbol as usize] == Some(ind as u8),
                "Symbol {:?} is present in the alphabet more than once",
                *symbol as char
            );
        }
        Ok(alphabet)
    }

    pub fn dna4() -> Self {
        Self::build(b"ACGT")
    }

    pub fn dna5() -> Self {
        Self::build(b"ACGTN")
    }

    /// Amino acids in the order used by the NCBI BLOSUM tables.
    pub fn protein() -> Self {
        Self::build(b"ARNDCQEGHILKMFPSTWYVBJZX*")
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    // Later duplicates (after case folding) don't override earlier ones
    fn build(symbols: &[u8]) -> Self {
        let mut lookup = [None; 256];
        for (ind, symbol) in symbols.iter().enumerate() {
            for variant in [symbol.to_ascii_uppercase(), symbol.to_ascii_lowercase()] {
                if lookup[variant as usize].is_none() {
                    lookup[variant as usize] = Some(ind as u8);
                }
            }
        }
        Self {
            symbols: symbols.to_vec(),
            lookup,
        }
    }
}

impl RankMap for Alphabet {
    #[inline(always)]
    fn rank(&self, symbol: u8) -> Option<u8> {
        self.lookup[symbol as usize]
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.symbols.len()
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Alphabet({:?})", String::from_utf8_lossy(&self.symbols))
    }
}
