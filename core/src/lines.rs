use alloc::collections::BTreeSet;
use core::fmt;
use core::iter::FusedIterator;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rows, then columns, then both diagonals.
pub const LINE_COUNT: usize = 2 * GRID_SIZE as usize + 2;

const LINE_LEN: usize = GRID_SIZE as usize;

/// Identifies one of the winning lines. Ordering follows [`all_lines`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LineId {
    Row(Coord),
    Column(Coord),
    /// `0` runs from the top-left corner, `1` from the top-right corner.
    Diagonal(u8),
}

impl LineId {
    pub fn cells(self) -> [CellIndex; LINE_LEN] {
        let mut cells = [0; LINE_LEN];
        for (i, cell) in (0..GRID_SIZE).zip(cells.iter_mut()) {
            *cell = match self {
                Self::Row(row) => index_of((row, i)),
                Self::Column(col) => index_of((i, col)),
                Self::Diagonal(0) => index_of((i, i)),
                Self::Diagonal(_) => index_of((i, GRID_SIZE - 1 - i)),
            };
        }
        cells
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row-{}", row),
            Self::Column(col) => write!(f, "col-{}", col),
            Self::Diagonal(diag) => write!(f, "diag-{}", diag),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub cells: [CellIndex; LINE_LEN],
}

impl Line {
    fn nth(n: u8) -> Option<Self> {
        let id = match n {
            n if n < GRID_SIZE => LineId::Row(n),
            n if n < 2 * GRID_SIZE => LineId::Column(n - GRID_SIZE),
            n if usize::from(n) < LINE_COUNT => LineId::Diagonal(n - 2 * GRID_SIZE),
            _ => return None,
        };
        Some(Self {
            id,
            cells: id.cells(),
        })
    }

    pub fn is_complete(&self, marks: &MarkState) -> bool {
        self.cells.iter().all(|&index| marks.is_marked(index))
    }
}

/// Every winning line, always in the same order.
pub fn all_lines() -> LineIter {
    LineIter { index: 0 }
}

#[derive(Debug)]
pub struct LineIter {
    index: u8,
}

impl Iterator for LineIter {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        let line = Line::nth(self.index)?;
        self.index += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = LINE_COUNT.saturating_sub(self.index.into());
        (left, Some(left))
    }
}

impl ExactSizeIterator for LineIter {}

impl FusedIterator for LineIter {}

/// Per-cell mark flags, index-aligned with the card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkState {
    marks: Array2<bool>,
}

impl MarkState {
    pub fn new() -> Self {
        let side = usize::from(GRID_SIZE);
        Self {
            marks: Array2::default((side, side)),
        }
    }

    /// # Panics
    ///
    /// If `index` is not below [`CELL_COUNT`].
    pub fn is_marked(&self, index: CellIndex) -> bool {
        self.marks[index.to_nd_index()]
    }

    /// # Panics
    ///
    /// If `index` is not below [`CELL_COUNT`].
    pub fn set(&mut self, index: CellIndex, marked: bool) {
        self.marks[index.to_nd_index()] = marked;
    }

    /// Flips the flag and returns the new value.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`CELL_COUNT`].
    pub fn toggle(&mut self, index: CellIndex) -> bool {
        let mark = &mut self.marks[index.to_nd_index()];
        *mark = !*mark;
        *mark
    }

    pub fn marked_count(&self) -> usize {
        self.marks.iter().filter(|&&marked| marked).count()
    }
}

impl Default for MarkState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines whose every cell is marked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedLines {
    ids: BTreeSet<LineId>,
}

impl CompletedLines {
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.ids.contains(&id)
    }

    /// Whether the cell belongs to at least one completed line.
    pub fn contains_cell(&self, index: CellIndex) -> bool {
        self.ids.iter().any(|id| id.cells().contains(&index))
    }

    pub fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<LineId> for CompletedLines {
    fn from_iter<I: IntoIterator<Item = LineId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Full recomputation over every line, no state carried between calls.
pub fn count_completed_lines(marks: &MarkState) -> CompletedLines {
    all_lines()
        .filter(|line| line.is_complete(marks))
        .map(|line| line.id)
        .collect()
}
