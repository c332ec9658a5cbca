use std::ops::Index;

use crate::moves::Move;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One discovery of a state. The same state can have several nodes
/// when a cheaper path to it is found later.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) prev: Option<NodeId>,
    /// The move that led here from `prev`.
    pub(crate) mov: Option<Move>,
    pub(crate) dist: u32,
}

/// Nodes only ever get added, links point from children to parents.
#[derive(Debug)]
pub(crate) struct SearchTree<'a> {
    nodes: Vec<SearchNode<'a>>,
}

impl<'a> SearchTree<'a> {
    pub(crate) fn new() -> Self {
        SearchTree { nodes: Vec::new() }
    }

    pub(crate) fn add_root(&mut self, state: &'a State) -> NodeId {
        self.push(SearchNode {
            state,
            prev: None,
            mov: None,
            dist: 0,
        })
    }

    pub(crate) fn add(&mut self, state: &'a State, prev: NodeId, mov: Move) -> NodeId {
        let dist = self[prev].dist + 1;
        self.push(SearchNode {
            state,
            prev: Some(prev),
            mov: Some(mov),
            dist,
        })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, node: SearchNode<'a>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

impl<'a> Index<NodeId> for SearchTree<'a> {
    type Output = SearchNode<'a>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
