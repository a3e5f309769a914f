use wide::i8x16;

use crate::pairwise::config::{EndGap, EndGaps};
use crate::pairwise::dp::saturated::{Wide, LANES};
use crate::pairwise::dp::{ColumnCell, DpScore, RowCell, Saturated};
use crate::simd::Lanes;

use super::Tracker;

/// Trackers for the saturated engine. Scores passed to [`Tracker::track`] are relative to the
/// offset of the group being processed, so the trackers are notified whenever a group or a
/// column is finished.
pub trait SaturatedTracker: Tracker<i8x16, Output = Vec<i32>> {
    /// Group of rows is done for the current column, `offset` is its frame.
    fn group(&mut self, offset: &Wide);

    /// Column `col` is done.
    fn column(&mut self, col: usize, column: &Saturated);
}

/// Global alignment: per-lane terminal row and column are read back in actual values.
#[derive(Clone, Debug)]
pub struct SaturatedGlobal {
    end_gaps: EndGaps,
    lens1: Vec<usize>,
    lens2: Vec<usize>,
    // H(0, c) of the boundary row
    top: Vec<i32>,
    last_row: Vec<Vec<i32>>,
    last_col: Vec<Vec<i32>>,
}

impl SaturatedGlobal {
    pub fn new(end_gaps: EndGaps, lens1: &[usize], lens2: &[usize], top: Vec<i32>) -> Self {
        Self {
            end_gaps,
            lens1: lens1.to_vec(),
            lens2: lens2.to_vec(),
            top,
            last_row: lens2.iter().map(|x| vec![0; x + 1]).collect(),
            last_col: lens1.iter().map(|x| vec![0; x + 1]).collect(),
        }
    }

    fn actual(&self, row: usize, col: usize, lane: usize, column: &Saturated) -> i32 {
        if row == 0 {
            self.top[col]
        } else {
            column.actual(row)[lane]
        }
    }
}

impl Tracker<i8x16> for SaturatedGlobal {
    type Output = Vec<i32>;

    #[inline(always)]
    fn track(&mut self, _: usize, _: usize, score: i8x16) -> i8x16 {
        score
    }

    fn max_score(self, _: &[ColumnCell<i8x16>], _: &[RowCell<i8x16>]) -> Self::Output {
        (0..LANES)
            .map(|lane| {
                let (last_row, last_col) = (&self.last_row[lane], &self.last_col[lane]);
                let mut best = last_col[self.lens1[lane]];
                if *self.end_gaps.seq1_trailing() == EndGap::Free {
                    best = last_col.iter().copied().fold(best, i32::max);
                }
                if *self.end_gaps.seq2_trailing() == EndGap::Free {
                    best = last_row.iter().copied().fold(best, i32::max);
                }
                best
            })
            .collect()
    }
}

impl SaturatedTracker for SaturatedGlobal {
    #[inline(always)]
    fn group(&mut self, _: &Wide) {}

    fn column(&mut self, col: usize, column: &Saturated) {
        for lane in 0..LANES {
            let (len1, len2) = (self.lens1[lane], self.lens2[lane]);
            if col <= len2 {
                self.last_row[lane][col] = self.actual(len1, col, lane, column);
            }
            if col == len2 {
                for row in 0..=len1 {
                    self.last_col[lane][row] = self.actual(row, col, lane, column);
                }
            }
        }
    }
}

/// Local alignment: the group-relative maximum is flushed to actual values after each group.
#[derive(Clone, Debug)]
pub struct SaturatedLocal {
    best: Wide,
    group: i8x16,
    lowest: i8x16,
    rows: Vec<i8x16>,
    cols: Vec<i8x16>,
}

impl SaturatedLocal {
    pub fn new(lens1: &[usize], lens2: &[usize]) -> Self {
        let within = |lens: &[usize]| {
            let len = lens.iter().copied().max().unwrap_or(0);
            (0..=len)
                .map(|ind| i8x16::mask(|lane| ind <= lens[lane]))
                .collect::<Vec<_>>()
        };
        let lowest = i8x16::splat(i8::MIN);
        Self {
            best: [i32::MIN; LANES],
            group: lowest,
            lowest,
            rows: within(lens1),
            cols: within(lens2),
        }
    }
}

impl Tracker<i8x16> for SaturatedLocal {
    type Output = Vec<i32>;

    #[inline(always)]
    fn track(&mut self, row: usize, col: usize, score: i8x16) -> i8x16 {
        let inside = self.rows[row] & self.cols[col];
        self.group = self.group.maximum(inside.blend(score, self.lowest));
        score
    }

    fn max_score(self, _: &[ColumnCell<i8x16>], _: &[RowCell<i8x16>]) -> Self::Output {
        self.best.to_vec()
    }
}

impl SaturatedTracker for SaturatedLocal {
    fn group(&mut self, offset: &Wide) {
        for (lane, relative) in self.group.to_array().into_iter().enumerate() {
            // Cells inside the matrix never reach the saturation limit
            if relative != i8::MIN {
                self.best[lane] = self.best[lane].max(relative as i32 + offset[lane]);
            }
        }
        self.group = self.lowest;
    }

    #[inline(always)]
    fn column(&mut self, _: usize, _: &Saturated) {}
}
