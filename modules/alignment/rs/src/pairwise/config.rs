use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Method {
    /// Both sequences are aligned end to end (Needleman-Wunsch/Gotoh).
    #[default]
    Global,
    /// Best-scoring pair of substrings (Smith-Waterman/Gotoh).
    Local,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EndGap {
    Free,
    #[default]
    Penalized,
}

/// Policy for gaps touching the ends of each sequence. A "free" leading (trailing) gap lets the
/// alignment skip the prefix (suffix) of the sequence at no cost.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor, Getters, Dissolve)]
pub struct EndGaps {
    seq1_leading: EndGap,
    seq1_trailing: EndGap,
    seq2_leading: EndGap,
    seq2_trailing: EndGap,
}

impl EndGaps {
    pub fn penalized() -> Self {
        Self::new(
            EndGap::Penalized,
            EndGap::Penalized,
            EndGap::Penalized,
            EndGap::Penalized,
        )
    }

    pub fn free() -> Self {
        Self::new(EndGap::Free, EndGap::Free, EndGap::Free, EndGap::Free)
    }

    /// `seq2` must be fully aligned inside `seq1`, the flanks of `seq1` are free.
    pub fn semi_global() -> Self {
        Self::new(
            EndGap::Free,
            EndGap::Free,
            EndGap::Penalized,
            EndGap::Penalized,
        )
    }

    /// Suffix of one sequence overlaps the prefix of the other.
    pub fn overlap() -> Self {
        Self::free()
    }

    pub fn is_free(&self) -> bool {
        *self == Self::free()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor, Getters, Dissolve)]
pub struct Config {
    method: Method,
    end_gaps: EndGaps,
    /// Keep the terminal DP column and row in the outcome.
    vectors: bool,
}

impl Config {
    pub fn global() -> Self {
        Self::new(Method::Global, EndGaps::penalized(), false)
    }

    pub fn semi_global() -> Self {
        Self::new(Method::Global, EndGaps::semi_global(), false)
    }

    pub fn overlap() -> Self {
        Self::new(Method::Global, EndGaps::overlap(), false)
    }

    pub fn local() -> Self {
        Self::new(Method::Local, EndGaps::free(), false)
    }

    pub fn with_vectors(mut self, vectors: bool) -> Self {
        self.vectors = vectors;
        self
    }

    pub fn with_end_gaps(mut self, end_gaps: EndGaps) -> Self {
        self.end_gaps = end_gaps;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.method == Method::Global || self.end_gaps.is_free(),
            "Local alignment implies free end gaps, got {:?}",
            self.end_gaps
        );
        Ok(())
    }
}
