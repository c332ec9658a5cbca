// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

#[macro_use]
extern crate prettytable;

use std::env;
use std::error::Error;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches};
use log::info;
use prettytable::{format, Table};
use separator::Separatable;

use sokoban_search::config::Method;
use sokoban_search::level::Level;
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("Martin Taibr <taibr.martin@gmail.com>")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sokoban levels with uninformed and informed state space search")
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .default_value("bfs")
                .help("bfs, dfs, greedy or astar"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("e")
                .long("heuristic")
                .takes_value(true)
                .help("manhattan or euclidean, required by greedy and astar"),
        )
        .arg(
            Arg::with_name("pushes-only")
                .long("pushes-only")
                .help("only print states after pushes"),
        )
        .arg(
            Arg::with_name("compare")
                .long("compare")
                .help("run all algorithms and heuristics and print a table"),
        )
        .arg(
            Arg::with_name("runs")
                .long("runs")
                .takes_value(true)
                .default_value("1")
                .help("with --compare, solve with each method N times and report mean and std"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let path = matches.value_of("file").expect("file is required");

    let level = path.load_level().map_err(|err| {
        let current_dir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "unknown directory".to_owned());
        format!("Can't load level {} in {}: {}", path, current_dir, err)
    })?;

    if matches.is_present("compare") {
        let runs = matches.value_of("runs").unwrap_or("1");
        let runs = match runs.parse::<usize>() {
            Ok(runs) if runs > 0 => runs,
            _ => return Err(format!("Invalid number of runs: {}", runs).into()),
        };
        return compare(&level, path, runs);
    }

    let method = Method::from_names(
        matches.value_of("algorithm").unwrap_or("bfs"),
        matches.value_of("heuristic"),
    )?;
    let include_steps = !matches.is_present("pushes-only");

    println!("Solving {} using {}...", path, method);
    let started = Instant::now();
    let solution = level.solve(method)?;
    info!("Search took {} ms", millis(started));

    println!("{}", solution.stats);
    match solution.moves {
        None => println!("No solution"),
        Some(ref moves) => {
            print!("{}", level.format_solution(moves, include_steps));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
    }
    Ok(())
}

fn compare(level: &Level, path: &str, runs: usize) -> Result<(), Box<dyn Error>> {
    println!("Comparing all methods on {} ({} runs each)", path, runs);

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row![
        "Method",
        "Moves mean",
        "Moves std",
        "Pushes",
        "Expanded",
        "Frontier",
        "Time mean (ms)",
        "Time std (ms)"
    ]);

    for method in Method::all() {
        let mut times = Vec::with_capacity(runs);
        let mut lengths = Vec::with_capacity(runs);
        let mut last = None;
        for _ in 0..runs {
            let started = Instant::now();
            let solution = level.solve(method)?;
            times.push(started.elapsed().as_secs_f64() * 1000.0);
            if let Some(ref moves) = solution.moves {
                lengths.push(moves.move_cnt() as f64);
            }
            last = Some(solution);
        }
        let solution = match last {
            Some(solution) => solution,
            None => continue,
        };

        let (time_mean, time_std) = mean_std(&times);
        let (moves_mean, moves_std, pushes) = match solution.moves {
            None => ("-".to_owned(), "-".to_owned(), "-".to_owned()),
            Some(ref moves) => {
                let (mean, std) = mean_std(&lengths);
                (format!("{:.1}", mean), format!("{:.1}", std), moves.push_cnt().to_string())
            }
        };
        table.add_row(row![
            method,
            r->moves_mean,
            r->moves_std,
            r->pushes,
            r->solution.stats.total_expanded().separated_string(),
            r->solution.stats.frontier_size().separated_string(),
            r->format!("{:.3}", time_mean),
            r->format!("{:.3}", time_std)
        ]);
    }

    table.printstd();
    Ok(())
}

/// Mean and population standard deviation, zeros for no values.
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

fn millis(started: Instant) -> u64 {
    let elapsed = started.elapsed();
    elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis())
}
