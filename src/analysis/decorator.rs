/// Selection and flag decoration of an overview graph.

use crate::core::types::{NodeId, OverviewGraph};
use std::collections::{HashSet, VecDeque};

/// Externally chosen selected and flagged pathway ids.
#[derive(Debug, Clone, Default)]
pub struct Decorator {
    selected: HashSet<NodeId>,
    flags: HashSet<NodeId>,
}

impl Decorator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected<I: IntoIterator<Item = NodeId>>(mut self, ids: I) -> Self {
        self.selected.extend(ids);
        self
    }

    pub fn with_flags<I: IntoIterator<Item = NodeId>>(mut self, ids: I) -> Self {
        self.flags.extend(ids);
        self
    }

    /// Ids the caller selected explicitly, before propagation.
    pub fn selected(&self) -> &HashSet<NodeId> {
        &self.selected
    }

    pub fn flags(&self) -> &HashSet<NodeId> {
        &self.flags
    }

    /// Reset every flag in `graph`, then mark selected and flagged nodes
    /// together with all their ancestors and the edges leading to them.
    pub fn apply(&self, graph: &mut OverviewGraph) {
        let selected = propagate(graph, &self.selected);
        let flagged = propagate(graph, &self.flags);

        for node in &mut graph.nodes {
            node.selected = selected.nodes.contains(&node.id);
            node.flagged = flagged.nodes.contains(&node.id);
        }
        for (i, edge) in graph.edges.iter_mut().enumerate() {
            edge.selected = selected.edges.contains(&i);
            edge.flagged = flagged.edges.contains(&i);
        }

        log::debug!(
            "decorated {} selected / {} flagged nodes from {} + {} ids",
            selected.nodes.len(),
            flagged.nodes.len(),
            self.selected.len(),
            self.flags.len()
        );
    }
}

struct Reached {
    nodes: HashSet<NodeId>,
    edges: HashSet<usize>,
}

/// Walk edges backwards from `seeds` to collect ancestors and traversed edges.
fn propagate(graph: &OverviewGraph, seeds: &HashSet<NodeId>) -> Reached {
    let mut reached = Reached {
        nodes: HashSet::new(),
        edges: HashSet::new(),
    };
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for &id in seeds {
        if graph.find_node(id).is_none() {
            log::warn!("decorated id {} is not in the graph", id);
            continue;
        }
        if reached.nodes.insert(id) {
            queue.push_back(id);
        }
    }

    while let Some(id) = queue.pop_front() {
        for (i, edge) in graph.edges.iter().enumerate() {
            if edge.to != id {
                continue;
            }
            reached.edges.insert(i);
            if reached.nodes.insert(edge.from) {
                queue.push_back(edge.from);
            }
        }
    }

    reached
}
