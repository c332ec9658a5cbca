use crate::data::Dir;
use crate::map::GoalMap;
use crate::moves::Move;
use crate::state::State;

/// Moves the player one cell, pushing a box if there is one.
///
/// Returns `None` if the player would walk into a wall
/// or push a box into a wall or another box.
/// Doesn't know anything about dead ends - a legal push can make the level unsolvable.
pub(crate) fn apply(map: &GoalMap, state: &State, dir: Dir) -> Option<(State, Move)> {
    let new_player_pos = state.player_pos + dir;
    if map.is_wall(new_player_pos) {
        return None;
    }

    match state.box_index(new_player_pos) {
        None => {
            // step
            let new_state = State {
                player_pos: new_player_pos,
                boxes: state.boxes.clone(),
            };
            Some((new_state, Move::new(dir, false)))
        }
        Some(box_index) => {
            let push_dest = new_player_pos + dir;
            if map.is_wall(push_dest) || state.has_box(push_dest) {
                return None;
            }
            let new_state = state.with_moved_box(new_player_pos, box_index, push_dest);
            Some((new_state, Move::new(dir, true)))
        }
    }
}

/// All boxes are on goals.
///
/// This tests boxes, not goals, so it relies on validation
/// having checked there's the same number of both.
pub(crate) fn solved(map: &GoalMap, state: &State) -> bool {
    state.boxes.iter().all(|&b| map.is_goal(b))
}
