use crate::moves::{Move, Moves};
use crate::state::State;

use super::tree::{NodeId, SearchNode, SearchTree};

/// Moves from the root to `goal` and all states along the way, root included.
///
/// There is always exactly one more state than moves.
pub(crate) fn reconstruct(tree: &SearchTree<'_>, goal: NodeId) -> (Moves, Vec<State>) {
    let nodes = backtrack_nodes(tree, goal);

    // the root is the only node without a move
    let moves: Vec<Move> = nodes.iter().filter_map(|node| node.mov).collect();
    let states = nodes.iter().map(|node| node.state.clone()).collect();

    (Moves::new(moves), states)
}

fn backtrack_nodes<'t, 'a>(tree: &'t SearchTree<'a>, goal: NodeId) -> Vec<&'t SearchNode<'a>> {
    let mut nodes = Vec::new();
    let mut cur = Some(goal);
    while let Some(id) = cur {
        let node = &tree[id];
        nodes.push(node);
        cur = node.prev;
    }
    nodes.reverse();
    nodes
}
