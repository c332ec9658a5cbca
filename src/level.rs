use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::map::GoalMap;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::transition;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayErr {
    IllegalMove(usize, Dir),
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ReplayErr::IllegalMove(index, dir) => {
                write!(f, "Illegal move {} at index {}", dir, index)
            }
        }
    }
}

impl Error for ReplayErr {}

/// Everything needed to start solving: the map and the initial state.
#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    pub fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.xsb_with_state(&self.state)
    }

    /// Plays the moves from the initial state.
    ///
    /// Returns all visited states including the initial one
    /// so the result is always one longer than `moves`.
    pub fn replay(&self, moves: &Moves) -> Result<Vec<State>, ReplayErr> {
        let mut states = Vec::with_capacity(moves.move_cnt() + 1);
        states.push(self.state.clone());
        for (i, dir) in moves.dirs().enumerate() {
            let last = states.last().expect("There must be at least one state");
            let (new_state, _) =
                transition::apply(&self.map, last, dir).ok_or(ReplayErr::IllegalMove(i, dir))?;
            states.push(new_state);
        }
        Ok(states)
    }

    pub fn format_solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves, include_steps)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
