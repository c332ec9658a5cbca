use std::fmt::{self, Debug, Display, Formatter};

use crate::level::Level;
use crate::moves::Moves;

/// Renders the initial state and then the state after every move
/// (or only after pushes when `include_steps` is false).
pub struct SolutionFormatter<'a> {
    level: &'a Level,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(level: &'a Level, moves: &'a Moves, include_steps: bool) -> Self {
        Self {
            level,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // moves can come from anywhere, replay checks them
        let states = match self.level.replay(self.moves) {
            Ok(states) => states,
            Err(err) => return writeln!(f, "{}", err),
        };

        writeln!(f, "{}", self.level.map.xsb_with_state(&states[0]))?;
        for (mov, state) in self.moves.iter().zip(&states[1..]) {
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.level.map.xsb_with_state(state))?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
