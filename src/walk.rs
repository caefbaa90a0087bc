use serde::{Deserialize, Serialize};

use crate::graph::{EdgeId, NodeId, TorsionGraph};

/// A walk in a [`TorsionGraph`], given by its start node and the edges it traverses. Nodes and
/// edges may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walk {
    pub start: NodeId,
    pub steps: Vec<EdgeId>,
}

impl Walk {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The visited nodes, starting with `start`. There is one more node than there are steps.
    pub fn nodes<'a>(&'a self, graph: &'a TorsionGraph) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::once(self.start).chain(self.steps.iter().map(move |&edge| graph.edge(edge).target))
    }

    pub fn end(&self, graph: &TorsionGraph) -> NodeId {
        self.steps
            .last()
            .map_or(self.start, |&edge| graph.edge(edge).target)
    }

    /// Render as `A ---label---> B ---label---> C`.
    pub fn display(&self, graph: &TorsionGraph) -> String {
        let mut result = graph.node(self.start).to_string();
        for &id in &self.steps {
            let edge = graph.edge(id);
            result.push_str(&format!(" ---{}---> {}", edge.kind, graph.node(edge.target)));
        }
        result
    }
}

/// All walks with exactly `length` edges from `start`, in depth first order.
#[tracing::instrument(skip(graph))]
pub fn walks(graph: &TorsionGraph, start: NodeId, length: usize) -> Vec<Walk> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(length);
    extend(graph, start, length, &mut current, &mut result);
    tracing::trace!(count = result.len(), "enumerated walks");

    result
        .into_iter()
        .map(|steps| Walk { start, steps })
        .collect()
}

fn extend(
    graph: &TorsionGraph,
    node: NodeId,
    length: usize,
    current: &mut Vec<EdgeId>,
    result: &mut Vec<Vec<EdgeId>>,
) {
    if current.len() == length {
        result.push(current.clone());
        return;
    }
    for edge in graph.out_edges(node) {
        current.push(edge);
        extend(graph, graph.edge(edge).target, length, current, result);
        current.pop();
    }
}
