use crate::pairwise::config::{EndGap, EndGaps};
use crate::pairwise::dp::{ColumnCell, RowCell};
use crate::simd::Lanes;

use super::Tracker;

/// Global alignment of a batch with one pair per lane.
///
/// Lanes end at different rows/columns, so the terminal vectors of every lane are snapshotted
/// during the sweep: `last_row[c]` keeps `H(len1, c)` and `last_col[r]` keeps `H(r, len2)` of the
/// lanes that end there.
#[derive(Clone, Debug)]
pub struct BulkGlobal<V: Lanes> {
    end_gaps: EndGaps,
    lens1: Vec<usize>,
    lens2: Vec<usize>,
    row_ends: Vec<Option<V>>,
    col_ends: Vec<Option<V>>,
    last_row: Vec<V>,
    last_col: Vec<V>,
}

impl<V: Lanes> BulkGlobal<V> {
    /// `column` and `row` are the boundary values `H(r, 0)` and `H(0, c)` of the padded matrix.
    pub fn new(
        end_gaps: EndGaps,
        lens1: &[usize],
        lens2: &[usize],
        column: &[ColumnCell<V>],
        row: &[RowCell<V>],
    ) -> Self {
        let ends = |lens: &[usize], len: usize| {
            (0..len)
                .map(|ind| {
                    lens.iter()
                        .any(|x| *x == ind)
                        .then(|| V::mask(|lane| lens[lane] == ind))
                })
                .collect::<Vec<_>>()
        };
        let row_ends = ends(lens1, column.len());
        let col_ends = ends(lens2, row.len());

        let mut last_row = row.iter().map(|x| x.diagonal).collect::<Vec<_>>();
        let mut last_col = column.iter().map(|x| x.current).collect::<Vec<_>>();

        // Corner cases of the terminal vectors lie on the opposite boundary
        let (column, row) = (
            column.iter().map(|x| x.current.to_array()).collect::<Vec<_>>(),
            row.iter().map(|x| x.diagonal.to_array()).collect::<Vec<_>>(),
        );
        let mut first_row = V::Array::default();
        let mut first_col = V::Array::default();
        for lane in 0..V::LANES {
            first_row.as_mut()[lane] = column[lens1[lane]].as_ref()[lane];
            first_col.as_mut()[lane] = row[lens2[lane]].as_ref()[lane];
        }
        last_row[0] = V::from_array(first_row);
        last_col[0] = V::from_array(first_col);

        Self {
            end_gaps,
            lens1: lens1.to_vec(),
            lens2: lens2.to_vec(),
            row_ends,
            col_ends,
            last_row,
            last_col,
        }
    }
}

impl<V: Lanes> Tracker<V> for BulkGlobal<V> {
    type Output = Vec<V::Scalar>;

    #[inline(always)]
    fn track(&mut self, row: usize, col: usize, score: V) -> V {
        if let Some(mask) = self.row_ends[row] {
            self.last_row[col] = mask.blend(score, self.last_row[col]);
        }
        if let Some(mask) = self.col_ends[col] {
            self.last_col[row] = mask.blend(score, self.last_col[row]);
        }
        score
    }

    fn max_score(self, _: &[ColumnCell<V>], _: &[RowCell<V>]) -> Self::Output {
        let last_row = self.last_row.iter().map(|x| x.to_array()).collect::<Vec<_>>();
        let last_col = self.last_col.iter().map(|x| x.to_array()).collect::<Vec<_>>();

        (0..V::LANES)
            .map(|lane| {
                let (len1, len2) = (self.lens1[lane], self.lens2[lane]);
                let mut best = last_col[len1].as_ref()[lane];
                if *self.end_gaps.seq1_trailing() == EndGap::Free {
                    for scores in &last_col[..=len1] {
                        best = best.max(scores.as_ref()[lane]);
                    }
                }
                if *self.end_gaps.seq2_trailing() == EndGap::Free {
                    for scores in &last_row[..=len2] {
                        best = best.max(scores.as_ref()[lane]);
                    }
                }
                best
            })
            .collect()
    }
}

/// Local alignment of a batch: lane-wise running maximum restricted to the cells that belong
/// to the lane's own matrix.
#[derive(Clone, Debug)]
pub struct BulkLocal<V: Lanes> {
    best: V,
    lowest: V,
    rows: Vec<V>,
    cols: Vec<V>,
}

impl<V: Lanes> BulkLocal<V> {
    pub fn new(lens1: &[usize], lens2: &[usize]) -> Self {
        let within = |lens: &[usize]| {
            let len = lens.iter().copied().max().unwrap_or(0);
            (0..=len)
                .map(|ind| V::mask(|lane| ind <= lens[lane]))
                .collect::<Vec<_>>()
        };
        let lowest = V::splat(<V::Scalar as num::Bounded>::min_value());
        Self {
            best: lowest,
            lowest,
            rows: within(lens1),
            cols: within(lens2),
        }
    }
}

impl<V: Lanes> Tracker<V> for BulkLocal<V> {
    type Output = Vec<V::Scalar>;

    #[inline(always)]
    fn track(&mut self, row: usize, col: usize, score: V) -> V {
        let inside = self.rows[row] & self.cols[col];
        self.best = self.best.maximum(inside.blend(score, self.lowest));
        score
    }

    fn max_score(self, _: &[ColumnCell<V>], _: &[RowCell<V>]) -> Self::Output {
        self.best.to_array().as_ref().to_vec()
    }
}
