use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::{Cell, Vec2};

/// Row-major tile matrix. Sized once at load, mutated in place afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    bounds: BoundsOriginRoot,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32, default: Cell) -> Self {
        let bounds = BoundsOriginRoot::new(width, height);
        let cells = vec![default; bounds.area().max(0) as usize];
        Grid { bounds, cells }
    }

    /// Builds a grid from `width * height` cells in row-major order.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        let bounds = BoundsOriginRoot::new(width, height);
        debug_assert_eq!(bounds.area().max(0) as usize, cells.len());
        Grid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    /// Caller must have bounds-checked `pos`.
    pub fn index_of(&self, pos: &Vec2) -> usize {
        (pos.x + pos.y * self.bounds.extent.x) as usize
    }

    pub fn cell_of(&self, index: usize) -> Vec2 {
        let width = self.bounds.extent.x as usize;
        Vec2 {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }

    pub fn tile_at(&self, pos: &Vec2) -> Cell {
        self[pos]
    }

    pub fn set_tile(&mut self, pos: &Vec2, cell: Cell) {
        self[pos] = cell;
    }

    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.cell_of(i), c))
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Cell;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let i = self.index_of(index);
        &mut self.cells[i]
    }
}
