use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{MapCell, Pos};

/// Row-major grid. Indexing with `Pos` panics outside the grid, `get` doesn't.
#[derive(Clone, PartialEq, Eq)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.index_of(pos).map(|i| &self.data[i])
    }

    pub(crate) fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        match self.index_of(pos) {
            Some(i) => Some(&mut self.data[i]),
            None => None,
        }
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Pos::new((i / cols) as i32, (i % cols) as i32))
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        if pos.r < 0 || pos.c < 0 {
            return None;
        }
        let (r, c) = (pos.r as usize, pos.c as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }
}

impl Vec2d<MapCell> {
    /// Rows shorter than the longest one are padded with empty cells.
    pub fn new(grid: &[Vec<MapCell>]) -> Self {
        let rows = grid.len();
        let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..cols {
                data.push(MapCell::Empty);
            }
        }
        Vec2d { data, rows, cols }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        let index = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("{:?} outside of {}x{} grid", pos, self.rows, self.cols));
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let index = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("{:?} outside of {}x{} grid", pos, self.rows, self.cols));
        &mut self.data[index]
    }
}

impl Display for Vec2d<MapCell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            for &cell in row {
                let c = match cell {
                    MapCell::Wall => '#',
                    MapCell::Empty => ' ',
                    MapCell::Goal => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<MapCell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
