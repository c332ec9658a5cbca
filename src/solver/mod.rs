mod backtracking;
mod frontier;
mod heuristics;
mod stats;
pub(crate) mod transition;
mod tree;
mod validation;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::{debug, info, trace};
use typed_arena::Arena;

use crate::config::{Heuristic, Method};
use crate::data::{Pos, DIRECTIONS};
use crate::level::Level;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

use self::frontier::{Fifo, Frontier, Lifo, Prioritized};
use self::tree::SearchTree;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    PlayerOnWall(Pos),
    BoxOnWall(Pos),
    GoalOnWall(Pos),
    DuplicateBox(Pos),
    PlayerOnBox,
    BoxesGoals(usize, usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::PlayerOnWall(pos) => write!(
                f,
                "Player at [{}, {}] is on a wall or outside the map",
                pos.r, pos.c
            ),
            SolverErr::BoxOnWall(pos) => write!(
                f,
                "Box at [{}, {}] is on a wall or outside the map",
                pos.r, pos.c
            ),
            SolverErr::GoalOnWall(pos) => write!(
                f,
                "Goal at [{}, {}] is on a wall or outside the map",
                pos.r, pos.c
            ),
            SolverErr::DuplicateBox(pos) => {
                write!(f, "More than one box at [{}, {}]", pos.r, pos.c)
            }
            SolverErr::PlayerOnBox => write!(f, "Player is on a box"),
            SolverErr::BoxesGoals(boxes, goals) => write!(
                f,
                "Different number of boxes ({}) and goals ({})",
                boxes, goals
            ),
        }
    }
}

impl Error for SolverErr {}

/// Result of a search that ran to completion.
///
/// `moves` is `None` when the whole reachable state space
/// was explored without finding a solution.
pub struct SolverOk {
    pub moves: Option<Moves>,
    /// States from the initial one to the solved one, one more than moves.
    pub path_states: Option<Vec<State>>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(solution: Option<(Moves, Vec<State>)>, stats: Stats, method: Method) -> Self {
        let (moves, path_states) = match solution {
            Some((moves, states)) => (Some(moves), Some(states)),
            None => (None, None),
        };
        Self {
            moves,
            path_states,
            stats,
            method,
        }
    }

    pub fn steps(&self) -> Option<usize> {
        self.moves.as_ref().map(Moves::move_cnt)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.method, moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method) -> Result<SolverOk, SolverErr> {
        solve(self, method)
    }
}

pub fn solve(level: &Level, method: Method) -> Result<SolverOk, SolverErr> {
    debug!("Checking level...");
    validation::check_level(level)?;
    debug!("Searching using {}", method);

    let (solution, stats) = match method {
        Method::BreadthFirst => search(level, Fifo::default(), None),
        Method::DepthFirst => search(level, Lifo::default(), None),
        Method::Greedy(h) => search(level, Prioritized::greedy(), Some(h)),
        Method::AStar(h) => search(level, Prioritized::a_star(), Some(h)),
    };

    match solution {
        Some((ref moves, _)) => info!(
            "{}: solved in {} moves, {} nodes expanded",
            method,
            moves.move_cnt(),
            stats.total_expanded()
        ),
        None => info!(
            "{}: no solution, {} nodes expanded",
            method,
            stats.total_expanded()
        ),
    }
    Ok(SolverOk::new(solution, stats, method))
}

/// The loop shared by all algorithms, the frontier decides the order of expansion.
fn search<F: Frontier>(
    level: &Level,
    mut frontier: F,
    heuristic: Option<Heuristic>,
) -> (Option<(Moves, Vec<State>)>, Stats) {
    let estimate = |state: &State| {
        heuristic.map_or(0.0, |h| h.estimate(&state.boxes, &level.map.goals))
    };

    let mut stats = Stats::new();

    // states live in the arena, nodes only point to them
    let arena = Arena::new();
    let mut tree = SearchTree::new();
    // best known distance to each discovered state
    let mut dists: FnvHashMap<&State, u32> = FnvHashMap::default();

    let start: &State = arena.alloc(level.state.clone());
    let root = tree.add_root(start);
    dists.insert(start, 0);
    stats.add_created(0);
    frontier.push(root, 0, estimate(start));

    while let Some(cur) = frontier.pop() {
        let cur_state = tree[cur].state;
        let cur_dist = tree[cur].dist;

        // every pop counts, even when a cheaper node with the same state
        // was queued after this one
        if stats.add_expanded(cur_dist) {
            debug!("Expanded new depth: {}", cur_dist);
            trace!("{:?}", stats);
        }

        if transition::solved(&level.map, cur_state) {
            debug!("Solved, backtracking path");
            stats.set_frontier_size(frontier.len());
            return (Some(backtracking::reconstruct(&tree, cur)), stats);
        }

        let new_dist = cur_dist + 1;
        for &dir in &DIRECTIONS {
            let (new_state, mov) = match transition::apply(&level.map, cur_state, dir) {
                Some(next) => next,
                None => continue,
            };

            let new_state: &State = match dists.get_key_value(&new_state) {
                None => &*arena.alloc(new_state),
                Some((&known, &old_dist)) => {
                    if !F::REVISIT_CHEAPER || new_dist >= old_dist {
                        stats.add_reached_duplicate(new_dist);
                        continue;
                    }
                    trace!("Reopening state at depth {} (was {})", new_dist, old_dist);
                    known
                }
            };

            dists.insert(new_state, new_dist);
            let node = tree.add(new_state, cur, mov);
            stats.add_created(new_dist);
            frontier.push(node, new_dist, estimate(new_state));
        }
    }

    debug!("Frontier exhausted");
    stats.set_frontier_size(frontier.len());
    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Heuristic::{Euclidean, Manhattan};
    use crate::data::Dir;

    fn all_methods() -> Vec<Method> {
        Method::all()
    }

    #[test]
    fn simplest() {
        let level: Level = r"
#####
#@$.#
#####
"
        .parse()
        .unwrap();

        for method in all_methods() {
            let solution = solve(&level, method).unwrap();
            let moves = solution.moves.as_ref().unwrap();
            assert_eq!(moves.dirs().collect::<Vec<_>>(), vec![Dir::Right], "{}", method);
            assert_eq!(moves.to_string(), "R");
            assert_eq!(solution.steps(), Some(1));
            assert_eq!(solution.stats.total_created(), 2);
            assert_eq!(solution.stats.total_expanded(), 2);
            assert_eq!(solution.stats.frontier_size(), 0);

            let states = solution.path_states.as_ref().unwrap();
            assert_eq!(states.len(), 2);
            assert_eq!(states[1].boxes(), &[Pos::new(1, 3)]);
        }
    }

    #[test]
    fn already_solved() {
        let level: Level = "####\n#@*#\n####".parse().unwrap();
        for method in all_methods() {
            let solution = solve(&level, method).unwrap();
            assert_eq!(solution.steps(), Some(0));
            assert_eq!(solution.stats.total_expanded(), 1);
            assert_eq!(solution.path_states.unwrap(), vec![level.state.clone()]);
        }
    }

    #[test]
    fn two_boxes_opposite_directions() {
        let level: Level = r"
#######
#.$@$.#
#######
"
        .parse()
        .unwrap();

        // left is expanded before right
        let solution = solve(&level, Method::BreadthFirst).unwrap();
        assert_eq!(solution.moves.unwrap().to_string(), "LrR");

        // depth-first takes the newest node so right goes first
        let solution = solve(&level, Method::DepthFirst).unwrap();
        assert_eq!(solution.moves.unwrap().to_string(), "RlL");
    }

    #[test]
    fn no_solution() {
        // box in a corner
        let level: Level = r"
#####
#$  #
#  @#
#  .#
#####
"
        .parse()
        .unwrap();

        for method in all_methods() {
            let solution = solve(&level, method).unwrap();
            assert!(solution.moves.is_none(), "{}", method);
            assert!(solution.path_states.is_none());
            assert_eq!(solution.steps(), None);
            assert_eq!(solution.stats.frontier_size(), 0);
            // the player can reach all 8 free cells, nothing else changes
            assert_eq!(solution.stats.total_expanded(), 8, "{}", method);
        }
    }

    #[test]
    fn invalid_level_fails_before_search() {
        let level: Level = "######\n#@$$.#\n######".parse().unwrap();
        for method in all_methods() {
            assert_eq!(
                solve(&level, method).unwrap_err(),
                SolverErr::BoxesGoals(2, 1)
            );
        }
    }

    #[test]
    fn informed_solutions_are_valid() {
        let level: Level = r"
######
#    #
# $$ #
#@ ..#
######
"
        .parse()
        .unwrap();

        for &h in &[Manhattan, Euclidean] {
            for &method in &[Method::Greedy(h), Method::AStar(h)] {
                let solution = solve(&level, method).unwrap();
                let moves = solution.moves.unwrap();
                let states = level.replay(&moves).unwrap();
                assert!(transition::solved(&level.map, states.last().unwrap()));
                assert_eq!(&states, solution.path_states.as_ref().unwrap());
            }
        }
    }

    #[test]
    fn a_star_is_optimal_here() {
        // with a single box in a corridor the heuristic is exact
        let level: Level = r"
########
#@ $  .#
########
"
        .parse()
        .unwrap();

        for &h in &[Manhattan, Euclidean] {
            let solution = solve(&level, Method::AStar(h)).unwrap();
            assert_eq!(solution.moves.unwrap().to_string(), "rRRR");
        }
        let bfs = solve(&level, Method::BreadthFirst).unwrap();
        assert_eq!(bfs.moves.unwrap().to_string(), "rRRR");
    }

    #[test]
    fn cheaper_paths_are_reopened() {
        // unsolvable (the top box is stuck in a corner) so every search runs out
        let level: Level = r"
  ####
###$ ####
#.    $ #
# #  #$ #
# . .#@ #
#########
"
        .parse()
        .unwrap();

        // without revisiting each reachable state gets exactly one node
        for &method in &[Method::BreadthFirst, Method::DepthFirst, Method::AStar(Manhattan)] {
            let solution = solve(&level, method).unwrap();
            assert!(solution.moves.is_none());
            assert_eq!(solution.stats.total_created(), 502, "{}", method);
            assert_eq!(solution.stats.total_expanded(), 502, "{}", method);
        }

        // greedy finds 27 states again by shorter paths, each gets another node
        // and another frontier entry and every one of them is popped and expanded
        for &h in &[Manhattan, Euclidean] {
            let solution = solve(&level, Method::Greedy(h)).unwrap();
            assert!(solution.moves.is_none());
            assert_eq!(solution.stats.total_created(), 502 + 27, "{}", h);
            assert_eq!(solution.stats.total_expanded(), 502 + 27, "{}", h);
            assert_eq!(solution.stats.total_reached_duplicates(), 693, "{}", h);
            assert_eq!(solution.stats.frontier_size(), 0);
        }
    }

    #[test]
    fn stale_nodes_are_expanded() {
        let level: Level = r"
  ####
###  ####
#     $ #
# #  #$ #
# . .#@ #
#########
"
        .parse()
        .unwrap();

        for &(h, expanded, created) in &[(Manhattan, 809, 855), (Euclidean, 782, 820)] {
            let solution = solve(&level, Method::Greedy(h)).unwrap();
            assert_eq!(solution.stats.total_expanded(), expanded, "{}", h);
            assert_eq!(solution.stats.total_created(), created, "{}", h);
            // everything created was either popped or is still queued
            assert_eq!(solution.stats.frontier_size(), created - expanded);

            let moves = solution.moves.unwrap();
            assert_eq!(moves.move_cnt(), 59);
            let states = level.replay(&moves).unwrap();
            assert!(transition::solved(&level.map, states.last().unwrap()));
        }

        let bfs = solve(&level, Method::BreadthFirst).unwrap();
        assert_eq!(bfs.steps(), Some(41));
        assert_eq!(bfs.stats.total_expanded(), 1773);
    }

    #[test]
    fn formatting_errors() {
        assert_eq!(
            SolverErr::BoxOnWall(Pos::new(2, 3)).to_string(),
            "Box at [2, 3] is on a wall or outside the map"
        );
        assert_eq!(
            SolverErr::BoxesGoals(3, 2).to_string(),
            "Different number of boxes (3) and goals (2)"
        );
    }
}
