use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Node counts per depth (number of moves from the initial state).
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created: Vec<usize>,
    expanded: Vec<usize>,
    duplicates: Vec<usize>,
    frontier_size: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created: vec![],
            expanded: vec![],
            duplicates: vec![],
            frontier_size: 0,
        }
    }

    pub fn total_created(&self) -> usize {
        self.created.iter().sum()
    }

    /// Nodes taken from the frontier and checked for being a goal,
    /// including the goal node itself.
    pub fn total_expanded(&self) -> usize {
        self.expanded.iter().sum()
    }

    /// Generated successors dropped because their state was already discovered
    /// (and, for greedy and A*, not reached by a strictly shorter path).
    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicates.iter().sum()
    }

    /// Nodes still queued when the search ended.
    pub fn frontier_size(&self) -> usize {
        self.frontier_size
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicates, depth)
    }

    pub(crate) fn set_frontier_size(&mut self, frontier_size: usize) {
        self.frontier_size = frontier_size;
    }

    /// Returns true when this is the first node at this depth.
    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because greedy and depth-first search can skip depths
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "total created: {}", self.total_created())?;
        writeln!(f, "total expanded: {}", self.total_expanded())?;
        writeln!(f, "total reached duplicates: {}", self.total_reached_duplicates())?;
        writeln!(f, "frontier size: {}", self.frontier_size)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Nodes expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "Left in frontier: {}", self.frontier_size.separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{:<15}{}", "Depth", "Created", "Expanded", "Duplicates")?;
        // duplicates can be one deeper than anything created
        let depths = self.created.len().max(self.duplicates.len());
        for depth in 0..depths {
            let created = self.created.get(depth).cloned().unwrap_or(0);
            let expanded = self.expanded.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicates.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                expanded.separated_string(),
                duplicates.separated_string()
            )?;
        }
        Ok(())
    }
}
