use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_breadth_first() {
    let output = r"Solving levels/01-simplest.txt using breadth-first...
States created total: 2
Nodes expanded total: 2
Reached duplicates total: 0
Left in frontier: 0

Depth          Created        Expanded       Duplicates
0:             1              1              0
1:             1              1              0

#####
#@$.#
#####

#####
# @*#
#####

R
Moves: 1
Pushes: 1
";

    Command::main_binary()
        .unwrap()
        .arg("levels/01-simplest.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_a_star_pushes_only() {
    let output = r"Solving levels/02-one-way.txt using a-star-manhattan...
States created total: 6
Nodes expanded total: 4
Reached duplicates total: 0
Left in frontier: 2

Depth          Created        Expanded       Duplicates
0:             1              1              0
1:             1              1              0
2:             2              1              0
3:             2              1              0

###
#.#
# #
# #
#$#
#@#
###

###
#.#
# #
#$#
#@#
# #
###

###
#.#
#$#
#@#
# #
# #
###

###
#*#
#@#
# #
# #
# #
###

UUU
Moves: 3
Pushes: 3
";

    Command::main_binary()
        .unwrap()
        .arg("-a")
        .arg("astar")
        .arg("-e")
        .arg("manhattan")
        .arg("--pushes-only")
        .arg("levels/02-one-way.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = Command::main_binary()
        .unwrap()
        .arg("-a")
        .arg("dfs")
        .arg("levels/04-dead-corner.txt")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Solving levels/04-dead-corner.txt using depth-first...\n"));
    assert!(stdout.contains("Nodes expanded total: 8\n"));
    assert!(stdout.ends_with("\nNo solution\n"));
}

#[test]
fn run_unknown_algorithm() {
    Command::main_binary()
        .unwrap()
        .arg("-a")
        .arg("dijkstra")
        .arg("levels/01-simplest.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_greedy_without_heuristic() {
    Command::main_binary()
        .unwrap()
        .arg("-a")
        .arg("greedy")
        .arg("levels/01-simplest.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_compare_averaged() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--compare")
        .arg("--runs")
        .arg("2")
        .arg("levels/03-two-boxes.txt")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Comparing all methods on levels/03-two-boxes.txt (2 runs each)\n"));
    assert!(stdout.contains("Time mean (ms)"));
    assert!(stdout.contains("Time std (ms)"));
    assert!(stdout.contains("Moves std"));
    for method in &["breadth-first", "depth-first", "greedy-euclidean", "a-star-manhattan"] {
        assert!(stdout.contains(method), "{}", method);
    }
}

#[test]
fn run_compare_zero_runs() {
    Command::main_binary()
        .unwrap()
        .arg("--compare")
        .arg("--runs")
        .arg("0")
        .arg("levels/01-simplest.txt")
        .assert()
        .failure()
        .stdout("");
}
