// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;
pub mod vec2d;

use std::error::Error;
use std::fs;

use crate::config::Method;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl LoadLevel for str {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, method: Method) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use crate::solver::transition;

    use super::*;

    const LEVELS: [&str; 6] = [
        "levels/01-simplest.txt",
        "levels/02-one-way.txt",
        "levels/03-two-boxes.txt",
        "levels/04-dead-corner.txt",
        "levels/05-two-goals.txt",
        "levels/06-microban-1.txt",
    ];

    const UNSOLVABLE: &str = "levels/04-dead-corner.txt";

    #[test]
    fn all_methods_on_all_levels() {
        for &level_path in &LEVELS {
            let level = level_path.load_level().unwrap();
            for method in Method::all() {
                check_solution(&level, level_path, method);
            }
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn check_solution(level: &Level, level_path: &str, method: Method) {
        println!("Solving {} using {}", level_path, method);
        let started = Instant::now();
        let solution = level.solve(method).unwrap();

        // innacurate, only useful to quickly see which levels are difficult
        println!(
            "Solved {} using {} in approximately {} ms, {} expanded",
            level_path,
            method,
            (started.elapsed().as_millis() as u64).separated_string(),
            solution.stats.total_expanded().separated_string(),
        );

        // every created node is queued once and either popped or left in the frontier
        assert_eq!(
            solution.stats.total_created(),
            solution.stats.total_expanded() + solution.stats.frontier_size(),
            "{}",
            method
        );

        let moves = match solution.moves {
            None => {
                assert_eq!(level_path, UNSOLVABLE, "{}", method);
                assert!(solution.path_states.is_none());
                return;
            }
            Some(ref moves) => moves,
        };
        assert_ne!(level_path, UNSOLVABLE, "{}", method);

        // every move is legal and the last state is solved
        let replayed = level.replay(moves).unwrap();
        assert!(transition::solved(&level.map, replayed.last().unwrap()));

        let path_states = solution.path_states.as_ref().unwrap();
        assert_eq!(path_states.len(), moves.move_cnt() + 1);
        assert_eq!(&replayed, path_states);
        assert_eq!(path_states[0], level.state);
    }

    #[test]
    fn breadth_first_is_move_optimal() {
        let levels = [
            ("levels/01-simplest.txt", "R", 2),
            ("levels/02-one-way.txt", "UUU", 5),
            ("levels/03-two-boxes.txt", "LrR", 6),
            ("levels/05-two-goals.txt", "uurDldRuRurD", 429),
            (
                "levels/06-microban-1.txt",
                "dlUrrrdLullddrUluRuulDrddrruLdlUU",
                572,
            ),
        ];

        for &(level_path, expected, expanded) in &levels {
            let level = level_path.load_level().unwrap();
            let solution = level.solve(Method::BreadthFirst).unwrap();
            assert_eq!(solution.moves.unwrap().to_string(), expected, "{}", level_path);
            assert_eq!(solution.stats.total_expanded(), expanded, "{}", level_path);

            // nothing else can be shorter
            for method in Method::all() {
                let other = level.solve(method).unwrap();
                assert!(other.steps().unwrap() >= expected.len(), "{}", method);
            }
        }
    }

    #[test]
    fn deterministic() {
        let level = "levels/06-microban-1.txt".load_level().unwrap();
        for method in Method::all() {
            let first = level.solve(method).unwrap();
            let second = level.solve(method).unwrap();
            assert_eq!(
                first.moves.as_ref().map(ToString::to_string),
                second.moves.as_ref().map(ToString::to_string),
                "{}",
                method
            );
            assert_eq!(first.stats.total_expanded(), second.stats.total_expanded());
            assert_eq!(first.stats.total_created(), second.stats.total_created());
        }
    }

    #[test]
    fn unsolvable_exhausts_frontier() {
        let level = UNSOLVABLE.load_level().unwrap();
        for method in Method::all() {
            let solution = level.solve(method).unwrap();
            assert!(solution.moves.is_none(), "{}", method);
            assert_eq!(solution.stats.frontier_size(), 0);
            assert_eq!(format!("{:?}", solution).lines().next(), Some("No solution"));
        }
    }

    #[test]
    fn simplest_scenario() {
        let level = "levels/01-simplest.txt".load_level().unwrap();
        let solution = level.solve(Method::BreadthFirst).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.dirs().collect::<Vec<_>>(), vec![data::Dir::Right]);
        assert_eq!(moves.push_cnt(), 1);

        let last = solution.path_states.unwrap().pop().unwrap();
        assert!(level.map.is_goal(last.boxes()[0]));
    }

    #[test]
    fn levels_can_be_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Level>();
        assert_send_sync::<SolverOk>();
    }

    #[test]
    fn loading_missing_file_fails() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }
}
