use crate::config::Heuristic;
use crate::data::Pos;

impl Heuristic {
    /// Estimated remaining cost, less is better.
    ///
    /// Each box is matched with its closest goal independently of the others
    /// so two boxes can claim the same goal. Walls are ignored.
    /// This is not a lower bound on the real number of moves.
    pub fn estimate(self, boxes: &[Pos], goals: &[Pos]) -> f64 {
        match self {
            Heuristic::Manhattan => {
                closest_goal_sum(boxes, goals, |a, b| f64::from(a.manhattan(b)))
            }
            Heuristic::Euclidean => closest_goal_sum(boxes, goals, Pos::euclidean),
        }
    }
}

fn closest_goal_sum<D>(boxes: &[Pos], goals: &[Pos], dist: D) -> f64
where
    D: Fn(Pos, Pos) -> f64,
{
    let mut goal_dist_sum = 0.0;
    for &box_pos in boxes {
        let mut min = f64::INFINITY;
        for &goal in goals {
            let d = dist(box_pos, goal);
            if d < min {
                min = d;
            }
        }
        goal_dist_sum += min;
    }
    goal_dist_sum
}
