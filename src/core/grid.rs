use super::constants::{COLS, ROWS};
use smallvec::SmallVec;

/// One 9×16 plane of cells.
pub type Plane = [[bool; COLS]; ROWS];

pub const EMPTY_PLANE: Plane = [[false; COLS]; ROWS];

/// Address of a single cell in the layer stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub layer: usize,
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub const fn new(layer: usize, row: usize, col: usize) -> Self {
        Self { layer, row, col }
    }
}

/// A cell whose value differs from the last rendered snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub cell: CellIndex,
    pub active: bool,
}

/// Changes produced by one render pass. A handful per tick is typical.
pub type ChangeList = SmallVec<[CellChange; 32]>;

/// Direction a shift cascades through the layer stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Layer N copies into N+1, trails move away from the viewer.
    TowardLast,
    /// Layer N+1 copies into N, trails move toward the viewer.
    TowardFirst,
}

/// Anything that can display a cell as lit or unlit.
pub trait CellView {
    fn set_active(&mut self, cell: CellIndex, active: bool);
}

/// Layer stack plus the snapshot that was last handed to a renderer.
///
/// Both buffers are allocated once in [`GridState::new`]; every later
/// operation overwrites them in place.
///
/// Indexing precondition: `layer < layer_count()`, `row < ROWS`, `col < COLS`.
/// Violations panic on the slice access (and trip a `debug_assert!` first in
/// debug builds).
#[derive(Clone, Debug)]
pub struct GridState {
    current: Vec<Plane>,
    previous: Vec<Plane>,
}

impl GridState {
    pub fn new(layers: usize) -> Self {
        assert!(layers >= 2, "a layer stack needs at least two layers");
        Self {
            current: vec![EMPTY_PLANE; layers],
            previous: vec![EMPTY_PLANE; layers],
        }
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn last_layer(&self) -> usize {
        self.current.len() - 1
    }

    #[inline]
    pub fn cell(&self, layer: usize, row: usize, col: usize) -> bool {
        self.debug_check(layer, row, col);
        self.current[layer][row][col]
    }

    #[inline]
    pub fn set_cell(&mut self, layer: usize, row: usize, col: usize, value: bool) {
        self.debug_check(layer, row, col);
        self.current[layer][row][col] = value;
    }

    pub fn plane(&self, layer: usize) -> &Plane {
        &self.current[layer]
    }

    /// Last snapshot committed by [`GridState::commit_changes`].
    pub fn rendered_plane(&self, layer: usize) -> &Plane {
        &self.previous[layer]
    }

    /// Reset every layer to unlit. The rendered snapshot is left alone so the
    /// next render turns the lit elements off.
    pub fn clear(&mut self) {
        for plane in self.current.iter_mut() {
            *plane = EMPTY_PLANE;
        }
    }

    pub fn active_count(&self) -> usize {
        self.current
            .iter()
            .flat_map(|p| p.iter())
            .flat_map(|r| r.iter())
            .filter(|c| **c)
            .count()
    }

    /// Cascade every layer one step in `direction`. The source edge layer
    /// (first for `TowardLast`, last for `TowardFirst`) keeps its cells.
    pub fn shift(&mut self, direction: ShiftDirection) {
        let n = self.current.len();
        match direction {
            ShiftDirection::TowardLast => self.current.copy_within(0..n - 1, 1),
            ShiftDirection::TowardFirst => self.current.copy_within(1..n, 0),
        }
    }

    /// Collect cells that differ from the rendered snapshot, then overwrite
    /// the snapshot with the current grid.
    pub fn commit_changes(&mut self) -> ChangeList {
        let mut changes = ChangeList::new();
        for (layer, (cur, prev)) in self.current.iter().zip(self.previous.iter()).enumerate() {
            if cur == prev {
                continue;
            }
            for row in 0..ROWS {
                for col in 0..COLS {
                    let active = cur[row][col];
                    if active != prev[row][col] {
                        changes.push(CellChange {
                            cell: CellIndex::new(layer, row, col),
                            active,
                        });
                    }
                }
            }
        }
        self.previous.copy_from_slice(&self.current);
        changes
    }

    /// Diff against the snapshot and push only the changed cells to `view`.
    /// Returns how many cells were touched.
    pub fn render_into<V: CellView>(&mut self, view: &mut V) -> usize {
        let changes = self.commit_changes();
        for change in &changes {
            view.set_active(change.cell, change.active);
        }
        changes.len()
    }

    #[inline]
    fn debug_check(&self, layer: usize, row: usize, col: usize) {
        debug_assert!(
            layer < self.current.len() && row < ROWS && col < COLS,
            "cell ({layer}, {row}, {col}) out of range"
        );
    }
}
