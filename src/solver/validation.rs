use log::debug;

use crate::level::Level;

use super::SolverErr;

/// Makes sure the goal test means what it should:
/// everything is on the floor, boxes don't overlap and there's a goal for each box.
pub(crate) fn check_level(level: &Level) -> Result<(), SolverErr> {
    let map = &level.map;
    let state = &level.state;

    if map.is_wall(state.player_pos) {
        return Err(SolverErr::PlayerOnWall(state.player_pos));
    }
    if let Some(&b) = state.boxes.iter().find(|&&b| map.is_wall(b)) {
        return Err(SolverErr::BoxOnWall(b));
    }
    if let Some(&g) = map.goals.iter().find(|&&g| map.is_wall(g)) {
        return Err(SolverErr::GoalOnWall(g));
    }

    // boxes are sorted so duplicates are next to each other
    if let Some(pair) = state.boxes.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(SolverErr::DuplicateBox(pair[0]));
    }
    if state.has_box(state.player_pos) {
        return Err(SolverErr::PlayerOnBox);
    }

    if state.boxes.len() != map.goals.len() {
        return Err(SolverErr::BoxesGoals(state.boxes.len(), map.goals.len()));
    }

    debug!(
        "Level is {}x{} with {} boxes",
        map.grid.rows(),
        map.grid.cols(),
        state.boxes.len()
    );
    Ok(())
}
