use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownAlgorithm(String),
    UnknownHeuristic(String),
    MissingHeuristic(Algorithm),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::UnknownAlgorithm(ref name) => write!(
                f,
                "Unknown algorithm '{}' - use bfs, dfs, greedy or astar",
                name
            ),
            ConfigErr::UnknownHeuristic(ref name) => write!(
                f,
                "Unknown heuristic '{}' - use manhattan or euclidean",
                name
            ),
            ConfigErr::MissingHeuristic(algorithm) => {
                write!(f, "{} needs a heuristic (manhattan or euclidean)", algorithm)
            }
        }
    }
}

impl Error for ConfigErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Greedy,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    pub fn is_informed(self) -> bool {
        match self {
            Algorithm::BreadthFirst | Algorithm::DepthFirst => false,
            Algorithm::Greedy | Algorithm::AStar => true,
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "greedy" => Ok(Algorithm::Greedy),
            "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ConfigErr::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Algorithm::BreadthFirst => write!(f, "breadth-first"),
            Algorithm::DepthFirst => write!(f, "depth-first"),
            Algorithm::Greedy => write!(f, "greedy"),
            Algorithm::AStar => write!(f, "a-star"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Euclidean];
}

impl FromStr for Heuristic {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(ConfigErr::UnknownHeuristic(s.to_string())),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
        }
    }
}

/// A validated algorithm choice - informed algorithms always carry a heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    BreadthFirst,
    DepthFirst,
    Greedy(Heuristic),
    AStar(Heuristic),
}

impl Method {
    pub fn new(algorithm: Algorithm, heuristic: Option<Heuristic>) -> Result<Method, ConfigErr> {
        match (algorithm, heuristic) {
            (Algorithm::Greedy, Some(h)) => Ok(Method::Greedy(h)),
            (Algorithm::AStar, Some(h)) => Ok(Method::AStar(h)),
            (Algorithm::Greedy, None) | (Algorithm::AStar, None) => {
                Err(ConfigErr::MissingHeuristic(algorithm))
            }
            (Algorithm::BreadthFirst, h) | (Algorithm::DepthFirst, h) => {
                if let Some(h) = h {
                    debug!("Ignoring heuristic {} for {}", h, algorithm);
                }
                Ok(if algorithm == Algorithm::BreadthFirst {
                    Method::BreadthFirst
                } else {
                    Method::DepthFirst
                })
            }
        }
    }

    /// Parses both names at once so a bad heuristic is reported even for uninformed algorithms.
    pub fn from_names(algorithm: &str, heuristic: Option<&str>) -> Result<Method, ConfigErr> {
        let algorithm = algorithm.parse()?;
        let heuristic = match heuristic {
            Some(name) => Some(name.parse()?),
            None => None,
        };
        Method::new(algorithm, heuristic)
    }

    /// Every algorithm, informed ones with every heuristic.
    pub fn all() -> Vec<Method> {
        let mut methods = vec![Method::BreadthFirst, Method::DepthFirst];
        for &h in &Heuristic::ALL {
            methods.push(Method::Greedy(h));
        }
        for &h in &Heuristic::ALL {
            methods.push(Method::AStar(h));
        }
        methods
    }

    pub fn algorithm(self) -> Algorithm {
        match self {
            Method::BreadthFirst => Algorithm::BreadthFirst,
            Method::DepthFirst => Algorithm::DepthFirst,
            Method::Greedy(_) => Algorithm::Greedy,
            Method::AStar(_) => Algorithm::AStar,
        }
    }

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Method::BreadthFirst | Method::DepthFirst => None,
            Method::Greedy(h) | Method::AStar(h) => Some(h),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.heuristic() {
            None => write!(f, "{}", self.algorithm()),
            Some(h) => write!(f, "{}-{}", self.algorithm(), h),
        }
    }
}
