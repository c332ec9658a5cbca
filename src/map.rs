use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The immutable part of a level - walls, floor and goals.
#[derive(Clone)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
}

impl GoalMap {
    /// Goals can be given in the list, as `MapCell::Goal` cells or both.
    /// Listed goals outside the grid or on walls are kept so validation can reject them.
    pub fn new(mut grid: Vec2d<MapCell>, mut goals: Vec<Pos>) -> Self {
        for pos in grid.positions() {
            if grid[pos] == MapCell::Goal {
                goals.push(pos);
            }
        }
        goals.sort();
        goals.dedup();
        for &goal in &goals {
            if let Some(cell) = grid.get_mut(goal) {
                if *cell == MapCell::Empty {
                    *cell = MapCell::Goal;
                }
            }
        }
        GoalMap { grid, goals }
    }

    pub fn grid(&self) -> &Vec2d<MapCell> {
        &self.grid
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    /// Anything outside the grid counts as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |cell| cell.is_wall())
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None))
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
