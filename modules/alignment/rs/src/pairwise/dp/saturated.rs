use eyre::{ensure, Result};
use wide::i8x16;

use super::{ColumnCell, DpScore, Groups};

/// Number of alignments processed together by the saturated engine.
pub const LANES: usize = 16;

/// Actual (wide) per-lane scores.
pub type Wide = [i32; LANES];

/// DP column of 8-bit lanes. Every group of rows stores its scores relative to a per-lane `i32`
/// offset: `actual = relative + offset`.
///
/// Row 0 is not stored, the boundary row is generated by the caller.
#[derive(Clone, Debug, Default)]
pub struct Saturated {
    cells: Vec<ColumnCell<i8x16>>,
    offsets: Vec<Wide>,
    groups: Option<Groups>,
}

impl Saturated {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill rows `1..=rows` with the boundary column `H(r, 0) = init(r)`, grouped by `size` rows.
    pub fn reset(
        &mut self,
        rows: usize,
        size: usize,
        mut init: impl FnMut(usize) -> Result<i32>,
        shadow: i8,
    ) -> Result<()> {
        let groups = Groups::new(rows, size);
        self.groups = Some(groups);

        self.offsets.clear();
        self.cells.clear();
        self.cells.push(ColumnCell::default());
        for (_, rows) in groups.iter() {
            let offset = init(*rows.start())?;
            self.offsets.push([offset; LANES]);

            for r in rows {
                let relative = init(r)? - offset;
                ensure!(
                    (i8::MIN as i32..=i8::MAX as i32).contains(&relative),
                    "Boundary score {} doesn't fit into a saturated block",
                    relative + offset
                );
                let current = i8x16::splat(relative as i8);
                self.cells.push(ColumnCell::boundary(current, i8x16::splat(shadow)));
            }
        }
        Ok(())
    }

    pub fn groups(&self) -> Groups {
        self.groups.unwrap_or_else(|| Groups::new(0, 1))
    }

    pub fn offset(&self, group: usize) -> &Wide {
        &self.offsets[group]
    }

    pub fn cells_mut(&mut self) -> &mut [ColumnCell<i8x16>] {
        &mut self.cells
    }

    /// Move the zero of the group to its first cell.
    pub fn rebase(&mut self, group: usize) {
        let rows = self.groups().rows(group);
        let delta = self.cells[*rows.start()].current;

        for (offset, shift) in self.offsets[group].iter_mut().zip(delta.to_array()) {
            *offset += shift as i32;
        }
        for cell in &mut self.cells[rows] {
            cell.current = cell.current.sub(delta);
            cell.left = cell.left.sub(delta);
        }
    }

    /// Actual scores `H(row, c)` of the last processed column (row > 0).
    pub fn actual(&self, row: usize) -> Wide {
        let offset = self.offset(self.groups().of(row));
        widen(self.cells[row].current, offset)
    }

    /// Express actual scores relative to the group's offset, clamping to the 8-bit range.
    pub fn narrow(&self, group: usize, actual: &Wide) -> i8x16 {
        narrow(actual, self.offset(group))
    }
}

pub fn widen(relative: i8x16, offset: &Wide) -> Wide {
    let relative = relative.to_array();
    std::array::from_fn(|lane| relative[lane] as i32 + offset[lane])
}

pub fn narrow(actual: &Wide, offset: &Wide) -> i8x16 {
    let relative: [i8; LANES] = std::array::from_fn(|lane| {
        (actual[lane] - offset[lane]).clamp(i8::MIN as i32, i8::MAX as i32) as i8
    });
    i8x16::new(relative)
}

/// Cross-check that actual scores are representable in the group's frame without clamping.
pub fn validate(actual: &Wide, offset: &Wide) -> Result<()> {
    for lane in 0..LANES {
        let relative = actual[lane] - offset[lane];
        ensure!(
            relative > i8::MIN as i32 && relative < i8::MAX as i32,
            "Saturated overflow in lane {lane}: score {} is {relative} away from the block offset {}",
            actual[lane],
            offset[lane]
        );
    }
    Ok(())
}

/// Relative scores must never reach the saturation limits.
pub fn validate_relative(relative: i8x16, offset: &Wide) -> Result<()> {
    validate(&widen(relative, offset), offset)
}
