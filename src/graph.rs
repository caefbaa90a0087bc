//! The multigraph $G(\mathcal{C})$ whose walks describe the $d$-torsion classes.
//!
//! A vertex records which modules of a single diagonal lie in the torsion class, and an edge
//! records which modules strictly between two consecutive diagonals do. Edges that share a source
//! and target are still distinct, since they add different modules.
//!
//! The graph only depends on $l$ and $d$. Nothing here checks that the pair is admissible; see
//! [`nakayama::Parameters::validate`].

use serde::{Deserialize, Serialize};

pub type NodeId = usize;
pub type EdgeId = usize;

/// The state of a single diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// $l = 2$: the simple of the diagonal is not in the class.
    Empty,
    /// $l = 2$: the simple of the diagonal is in the class.
    Full,
    EvenFull,
    EvenEmpty,
    /// The $h$ modules of an even diagonal closest to its simple.
    Even(u32),
    OddFull,
    OddOne,
    OddEmpty,
    /// The modules of an odd diagonal of length at least $h$.
    Odd(u32),
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "DEmpty"),
            Self::Full => write!(f, "DFull"),
            Self::EvenFull => write!(f, "DEvenFull"),
            Self::EvenEmpty => write!(f, "DEvenEmpty"),
            Self::Even(h) => write!(f, "DEven{h}"),
            Self::OddFull => write!(f, "DOddFull"),
            Self::OddOne => write!(f, "DOddOne"),
            Self::OddEmpty => write!(f, "DOddEmpty"),
            Self::Odd(h) => write!(f, "DOdd{h}"),
        }
    }
}

/// The transition between two consecutive diagonals. The integer parameters determine how many
/// modules between the diagonals are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    // l = 2
    Gamma,
    Epsilon,
    Beta,
    Delta(u32),

    // l > 2, leaving an odd diagonal
    Iota,
    Eta,
    OddGamma,
    OddBeta(u32),
    OddDelta(u32),
    OddEpsilon(u32),

    // l > 2, leaving an even diagonal
    IotaMinus,
    BetaMinus,
    GammaMinus,
    EtaMinus,
    DeltaMinus(u32),
    Kappa(u32),
    Zeta { h: u32, k: u32 },
    Theta(u32),
    Lambda { h: u32, k: u32 },
    /// Only present when $d = 2$.
    Mu { h: u32, m: u32, k: u32 },
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gamma | Self::OddGamma => write!(f, "γ"),
            Self::Epsilon => write!(f, "ε"),
            Self::Beta => write!(f, "β"),
            Self::Delta(h) | Self::OddDelta(h) => write!(f, "δ_{h}"),
            Self::Iota => write!(f, "ι"),
            Self::Eta => write!(f, "η"),
            Self::OddBeta(h) => write!(f, "β_{h}"),
            Self::OddEpsilon(h) => write!(f, "ε_{h}"),
            Self::IotaMinus => write!(f, "ι⁻"),
            Self::BetaMinus => write!(f, "β⁻"),
            Self::GammaMinus => write!(f, "γ⁻"),
            Self::EtaMinus => write!(f, "η⁻"),
            Self::DeltaMinus(h) => write!(f, "δ⁻_{h}"),
            Self::Kappa(h) => write!(f, "κ_{h}"),
            Self::Zeta { h, k } => write!(f, "ζ_{{{h},{k}}}"),
            Self::Theta(h) => write!(f, "θ_{h}"),
            Self::Lambda { h, k } => write!(f, "λ_{{{h},{k}}}"),
            Self::Mu { h, m, k } => write!(f, "μ_{{{h},{m}}}^{{{k}}}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

/// A directed multigraph on a handful of nodes.
///
/// The out-edges of a node are grouped by target, with the groups ordered by when the target was
/// first connected to and the edges of a group in insertion order. Walks are enumerated in this
/// order, which fixes the order in which torsion classes are listed.
#[derive(Debug, Clone)]
pub struct TorsionGraph {
    l: u32,
    d: u32,
    nodes: Vec<NodeKind>,
    edges: Vec<Edge>,
    successors: Vec<Vec<(NodeId, Vec<EdgeId>)>>,
    odd_nodes: Vec<NodeId>,
    even_nodes: Vec<NodeId>,
}

impl TorsionGraph {
    #[tracing::instrument]
    pub fn new(l: u32, d: u32) -> Self {
        let mut graph = Self {
            l,
            d,
            nodes: Vec::new(),
            edges: Vec::new(),
            successors: Vec::new(),
            odd_nodes: Vec::new(),
            even_nodes: Vec::new(),
        };
        if l == 2 {
            graph.build_short(d);
        } else {
            graph.build_long(l, d);
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        graph
    }

    fn add_node(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(kind);
        self.successors.push(Vec::new());
        self.nodes.len() - 1
    }

    fn add_edge(&mut self, source: NodeId, target: NodeId, kind: EdgeKind) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            kind,
        });
        let groups = &mut self.successors[source];
        match groups.iter_mut().find(|(t, _)| *t == target) {
            Some((_, ids)) => ids.push(id),
            None => groups.push((target, vec![id])),
        }
        id
    }

    /// Relations of length 2. Every diagonal consists of its simple alone.
    fn build_short(&mut self, d: u32) {
        let empty = self.add_node(NodeKind::Empty);
        let full = self.add_node(NodeKind::Full);
        self.odd_nodes = vec![empty, full];
        self.even_nodes = vec![empty, full];

        self.add_edge(empty, empty, EdgeKind::Gamma);
        self.add_edge(full, full, EdgeKind::Epsilon);
        self.add_edge(full, empty, EdgeKind::Beta);
        for h in 0..=d {
            self.add_edge(empty, full, EdgeKind::Delta(h));
        }
    }

    fn build_long(&mut self, l: u32, d: u32) {
        let even_full = self.add_node(NodeKind::EvenFull);
        let even_empty = self.add_node(NodeKind::EvenEmpty);
        // even[h - 1] is DEven{h}
        let even: Vec<NodeId> = (1..l.saturating_sub(1))
            .map(|h| self.add_node(NodeKind::Even(h)))
            .collect();
        let odd_full = self.add_node(NodeKind::OddFull);
        let odd_one = self.add_node(NodeKind::OddOne);
        let odd_empty = self.add_node(NodeKind::OddEmpty);
        // odd[h - 2] is DOdd{h}
        let odd: Vec<NodeId> = (2..l).map(|h| self.add_node(NodeKind::Odd(h))).collect();

        self.even_nodes = [even_full, even_empty]
            .into_iter()
            .chain(even.iter().copied())
            .collect();
        self.odd_nodes = [odd_full, odd_one, odd_empty]
            .into_iter()
            .chain(odd.iter().copied())
            .collect();

        self.add_edge(even_full, odd_full, EdgeKind::IotaMinus);
        self.add_edge(even_full, odd_empty, EdgeKind::BetaMinus);
        self.add_edge(even_empty, odd_empty, EdgeKind::GammaMinus);
        self.add_edge(even_empty, odd_one, EdgeKind::EtaMinus);
        for h in 0..=d * l / 2 {
            self.add_edge(even_empty, odd_full, EdgeKind::Kappa(h));
        }
        for h in 2..l {
            let odd_h = odd[(h - 2) as usize];
            self.add_edge(odd_h, even_full, EdgeKind::OddEpsilon(h));
            for k in 0..=l - h {
                self.add_edge(even_empty, odd_h, EdgeKind::Zeta { h, k });
            }
        }
        for h in 1..l.saturating_sub(1) {
            let even_h = even[(h - 1) as usize];
            self.add_edge(even_h, odd_one, EdgeKind::Theta(h));
            self.add_edge(even_h, odd_empty, EdgeKind::DeltaMinus(h));
            self.add_edge(odd_empty, even_h, EdgeKind::OddDelta(h));
            for k in 0..l - h {
                self.add_edge(even_h, odd_full, EdgeKind::Lambda { h, k });
            }
        }
        self.add_edge(odd_one, even_empty, EdgeKind::Eta);
        self.add_edge(odd_full, even_full, EdgeKind::Iota);
        self.add_edge(odd_empty, even_empty, EdgeKind::OddGamma);
        // Truncates towards zero, and is empty when d < 2 makes it negative
        let odd_betas = ((i64::from(d) - 2) * i64::from(l) + 6) / 2;
        for h in 0..u32::try_from(odd_betas).unwrap_or(0) {
            self.add_edge(odd_empty, even_full, EdgeKind::OddBeta(h));
        }
        if d == 2 {
            for h in 1..l.saturating_sub(2) {
                for k in 2..l - h {
                    for m in 0..l - (h + k) {
                        self.add_edge(
                            even[(h - 1) as usize],
                            odd[(k - 2) as usize],
                            EdgeKind::Mu { h, m, k },
                        );
                    }
                }
            }
        }
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn d(&self) -> u32 {
        self.d
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> NodeKind {
        self.nodes[id]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// The nodes that may describe an odd diagonal. Walks giving torsion classes start here.
    pub fn odd_nodes(&self) -> &[NodeId] {
        &self.odd_nodes
    }

    pub fn even_nodes(&self) -> &[NodeId] {
        &self.even_nodes
    }

    pub fn find_node(&self, kind: NodeKind) -> Option<NodeId> {
        self.nodes.iter().position(|&n| n == kind)
    }

    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.successors[node]
            .iter()
            .flat_map(|(_, ids)| ids.iter().copied())
    }

    /// All edges, listed node by node in out-edge order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.successors
            .iter()
            .flatten()
            .flat_map(|(_, ids)| ids)
            .map(move |&id| &self.edges[id])
    }

    /// One line `source -> target: label` per edge.
    pub fn edge_listing(&self) -> String {
        let mut result = String::new();
        for edge in self.edges() {
            result.push_str(&format!(
                "{} -> {}: {}\n",
                self.nodes[edge.source], self.nodes[edge.target], edge.kind
            ));
        }
        result
    }

    pub fn node_names(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes.iter().map(|&n| self.nodes[n].to_string()).collect()
    }
}
