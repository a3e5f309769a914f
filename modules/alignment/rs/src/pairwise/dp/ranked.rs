use alignkit_core_rs::alignment::Alignable;
use alignkit_core_rs::rank::RankMap;
use eyre::{ensure, eyre, Result};

use crate::simd::Lanes;

/// Rank-transform a sequence into the reusable buffer.
pub fn transform<A, M>(seq: &A, ranks: &M, into: &mut Vec<u8>) -> Result<()>
where
    A: Alignable<Symbol = u8> + ?Sized,
    M: RankMap + ?Sized,
{
    into.clear();
    into.reserve(seq.len());
    for pos in 0..seq.len() {
        let symbol = *seq.at(pos);
        let rank = ranks.rank(symbol).ok_or_else(|| {
            eyre!(
                "Symbol {:?} at position {pos} is not part of the alphabet",
                symbol as char
            )
        })?;
        into.push(rank);
    }
    Ok(())
}

/// Rank-transformed pair of sequences.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Ranked {
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
}

impl Ranked {
    pub fn fill<A1, A2, M>(&mut self, seq1: &A1, seq2: &A2, ranks: &M) -> Result<()>
    where
        A1: Alignable<Symbol = u8> + ?Sized,
        A2: Alignable<Symbol = u8> + ?Sized,
        M: RankMap + ?Sized,
    {
        transform(seq1, ranks, &mut self.seq1)?;
        transform(seq2, ranks, &mut self.seq2)
    }
}

/// Structure-of-arrays view of up to `V::LANES` pairs: position `i` of every lane is packed into
/// a single vector. Shorter sequences are padded with rank 0.
#[derive(Clone, Debug)]
pub struct RankedBatch<V: Lanes> {
    pub seq1: Vec<V>,
    pub seq2: Vec<V>,
    pub lens1: Vec<usize>,
    pub lens2: Vec<usize>,
    scratch: Vec<u8>,
}

impl<V: Lanes> Default for RankedBatch<V> {
    fn default() -> Self {
        Self {
            seq1: Vec::new(),
            seq2: Vec::new(),
            lens1: Vec::new(),
            lens2: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

impl<V: Lanes> RankedBatch<V> {
    pub fn fill<A1, A2, M>(&mut self, pairs: &[(A1, A2)], ranks: &M) -> Result<()>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
        M: RankMap + ?Sized,
    {
        ensure!(
            pairs.len() <= V::LANES,
            "Batch of {} pairs doesn't fit into {} lanes",
            pairs.len(),
            V::LANES
        );

        self.lens1.clear();
        self.lens2.clear();
        self.lens1.resize(V::LANES, 0);
        self.lens2.resize(V::LANES, 0);
        for (lane, (seq1, seq2)) in pairs.iter().enumerate() {
            self.lens1[lane] = seq1.len();
            self.lens2[lane] = seq2.len();
        }

        let len1 = self.lens1.iter().copied().max().unwrap_or(0);
        pack(pairs.iter().map(|x| &x.0), ranks, len1, &mut self.scratch, &mut self.seq1)?;
        let len2 = self.lens2.iter().copied().max().unwrap_or(0);
        pack(pairs.iter().map(|x| &x.1), ranks, len2, &mut self.scratch, &mut self.seq2)
    }
}

fn pack<'a, V, A, M>(
    seqs: impl Iterator<Item = &'a A>,
    ranks: &M,
    len: usize,
    scratch: &mut Vec<u8>,
    into: &mut Vec<V>,
) -> Result<()>
where
    V: Lanes,
    A: Alignable<Symbol = u8> + 'a,
    M: RankMap + ?Sized,
{
    let mut arrays = vec![V::Array::default(); len];
    for (lane, seq) in seqs.enumerate() {
        transform(seq, ranks, scratch)?;
        for (pos, rank) in scratch.iter().enumerate() {
            arrays[pos].as_mut()[lane] = V::from_rank(*rank);
        }
    }
    into.clear();
    into.extend(arrays.into_iter().map(V::from_array));
    Ok(())
}
