//! Turning a walk into the list of modules of the torsion class it describes.
//!
//! The node at position $i$ contributes modules of the $i$th diagonal, anchored at the vertex
//! $s_i$ of its simple. The edge leaving position $i$ contributes modules lying strictly between
//! diagonals $i$ and $i + 1$. Each family of edges has its own formula, and we keep them separate.

use nakayama::{Module, ModuleError, NakayamaAlgebra};

use crate::graph::{EdgeKind, NodeKind, TorsionGraph};
use crate::walk::Walk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The walk visits more diagonals than the algebra has.
    MissingDiagonal { position: usize, diagonals: u32 },
    Module(ModuleError),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDiagonal {
                position,
                diagonals,
            } => write!(
                f,
                "Walk reaches diagonal {position} but the algebra only has {diagonals}"
            ),
            Self::Module(e) => write!(f, "Walk produces an invalid module: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingDiagonal { .. } => None,
            Self::Module(e) => Some(e),
        }
    }
}

impl From<ModuleError> for DecodeError {
    fn from(e: ModuleError) -> Self {
        Self::Module(e)
    }
}

/// The coordinates contributed by a node on a diagonal anchored at `base`. Odd diagonals consist
/// of modules $M(s, s + h)$ and even ones of modules $M(s - h, s)$.
pub fn node_coordinates(kind: NodeKind, base: i64, l: i64) -> Vec<(i64, i64)> {
    match kind {
        NodeKind::Empty | NodeKind::EvenEmpty | NodeKind::OddEmpty => Vec::new(),
        NodeKind::Full | NodeKind::OddOne => vec![(base, base)],
        NodeKind::OddFull => (0..l - 1).map(|h| (base, base + h)).collect(),
        NodeKind::Odd(h) => (i64::from(h) - 1..l - 1)
            .map(|offset| (base, base + offset))
            .collect(),
        NodeKind::EvenFull => (0..l - 1).map(|h| (base - h, base)).collect(),
        NodeKind::Even(h) => (0..i64::from(h))
            .map(|offset| (base - offset, base))
            .collect(),
    }
}

/// `count` modules of length $l$ starting at `start`, moving up.
fn sliding_from(start: i64, count: i64, l: i64) -> Vec<(i64, i64)> {
    (0..count).map(|j| (start + j, start + l - 1 + j)).collect()
}

/// `count` modules of length $l$ ending at `end`, moving down.
fn sliding_to(end: i64, count: i64, l: i64) -> Vec<(i64, i64)> {
    (0..count).map(|j| (end - (l - 1) - j, end - j)).collect()
}

/// The coordinates contributed by an edge from the diagonal anchored at `start` to the one
/// anchored at `end`.
pub fn edge_coordinates(kind: EdgeKind, start: i64, end: i64, l: i64, d: i64) -> Vec<(i64, i64)> {
    // Number of modules strictly between an odd diagonal and the next one
    let odd_gap = (d - 2) * l / 2 + 2;
    // ... and between an even diagonal and the next one
    let even_gap = d * l / 2;

    match kind {
        EdgeKind::Epsilon => sliding_from(start, d, l),
        EdgeKind::Delta(h) => sliding_to(end, i64::from(h), l),

        EdgeKind::Iota | EdgeKind::OddEpsilon(_) => sliding_from(start, odd_gap, l),
        EdgeKind::OddBeta(h) => sliding_to(end, i64::from(h), l),

        EdgeKind::IotaMinus => sliding_from(start - l + 2, even_gap, l),
        EdgeKind::Kappa(h) => sliding_to(end + l - 2, i64::from(h), l),
        EdgeKind::Zeta { k, .. } => sliding_to(end + l - 2, i64::from(k), l),
        EdgeKind::Lambda { h, k } => {
            sliding_to(end + l - 2, even_gap - (l - 1) + i64::from(h + k), l)
        }
        EdgeKind::Mu { h, m, .. } => {
            sliding_to(end + l - 2, even_gap - (l - 1) + i64::from(h + m), l)
        }

        EdgeKind::Gamma
        | EdgeKind::Beta
        | EdgeKind::Eta
        | EdgeKind::OddGamma
        | EdgeKind::OddDelta(_)
        | EdgeKind::BetaMinus
        | EdgeKind::GammaMinus
        | EdgeKind::EtaMinus
        | EdgeKind::DeltaMinus(_)
        | EdgeKind::Theta(_) => Vec::new(),
    }
}

fn push_all(modules: &mut Vec<Module>, coordinates: Vec<(i64, i64)>) -> Result<(), ModuleError> {
    for (a, b) in coordinates {
        modules.push(Module::new(a, b)?);
    }
    Ok(())
}

/// Decode a walk into its torsion class. The modules are listed node, edge, node, ..., node, in
/// the order of the walk.
pub fn decode_walk(
    algebra: &NakayamaAlgebra,
    graph: &TorsionGraph,
    walk: &Walk,
) -> Result<Vec<Module>, DecodeError> {
    let l = i64::from(algebra.l());
    let d = i64::from(algebra.d());
    let base = |position: usize| {
        algebra
            .diagonal_base(position)
            .map(i64::from)
            .ok_or(DecodeError::MissingDiagonal {
                position,
                diagonals: algebra.p(),
            })
    };

    let mut modules = Vec::new();
    let mut node = walk.start;
    for (i, &id) in walk.steps.iter().enumerate() {
        let position = i + 1;
        let edge = graph.edge(id);
        let (start, end) = (base(position)?, base(position + 1)?);

        push_all(&mut modules, node_coordinates(graph.node(node), start, l))?;
        push_all(&mut modules, edge_coordinates(edge.kind, start, end, l, d))?;
        node = edge.target;
    }
    let last = base(walk.len() + 1)?;
    push_all(&mut modules, node_coordinates(graph.node(node), last, l))?;

    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::walks;
    use expect_test::{expect, Expect};
    use itertools::Itertools;
    use nakayama::notation::additive_closure_string;

    #[test]
    fn test_node_coordinates() {
        assert!(node_coordinates(NodeKind::Empty, 3, 2).is_empty());
        assert_eq!(node_coordinates(NodeKind::Full, 3, 2), [(3, 3)]);
        assert_eq!(
            node_coordinates(NodeKind::OddFull, 7, 4),
            [(7, 7), (7, 8), (7, 9)]
        );
        assert_eq!(node_coordinates(NodeKind::Odd(2), 7, 4), [(7, 8), (7, 9)]);
        assert_eq!(node_coordinates(NodeKind::Odd(3), 7, 4), [(7, 9)]);
        assert_eq!(node_coordinates(NodeKind::OddOne, 7, 4), [(7, 7)]);
        assert_eq!(
            node_coordinates(NodeKind::EvenFull, 11, 4),
            [(11, 11), (10, 11), (9, 11)]
        );
        assert_eq!(node_coordinates(NodeKind::Even(2), 11, 4), [(11, 11), (10, 11)]);
    }

    #[test]
    fn test_edge_coordinates() {
        let check = |kind, start, end, l, d, output: Expect| {
            let coordinates = edge_coordinates(kind, start, end, l, d);
            output.assert_eq(&format!("{coordinates:?}"));
        };

        // l = 2, d = 3: diagonals at 1, 4
        check(EdgeKind::Epsilon, 1, 4, 2, 3, expect![[r#"[(1, 2), (2, 3), (3, 4)]"#]]);
        check(EdgeKind::Delta(2), 1, 4, 2, 3, expect![[r#"[(3, 4), (2, 3)]"#]]);
        check(EdgeKind::Delta(0), 1, 4, 2, 3, expect![[r#"[]"#]]);
        check(EdgeKind::Beta, 1, 4, 2, 3, expect![[r#"[]"#]]);

        // l = 3, d = 2: diagonals at 1, 4, 6, 9
        check(EdgeKind::Iota, 1, 4, 3, 2, expect![[r#"[(1, 3), (2, 4)]"#]]);
        check(EdgeKind::OddEpsilon(2), 6, 9, 3, 2, expect![[r#"[(6, 8), (7, 9)]"#]]);
        check(EdgeKind::OddBeta(1), 1, 4, 3, 2, expect![[r#"[(2, 4)]"#]]);
        check(EdgeKind::IotaMinus, 4, 6, 3, 2, expect![[r#"[(3, 5), (4, 6), (5, 7)]"#]]);
        check(EdgeKind::Kappa(2), 4, 6, 3, 2, expect![[r#"[(5, 7), (4, 6)]"#]]);
        check(EdgeKind::Zeta { h: 2, k: 1 }, 4, 6, 3, 2, expect![[r#"[(5, 7)]"#]]);
        check(
            EdgeKind::Lambda { h: 1, k: 1 },
            4,
            6,
            3,
            2,
            expect![[r#"[(5, 7), (4, 6), (3, 5)]"#]],
        );
        check(EdgeKind::Theta(1), 4, 6, 3, 2, expect![[r#"[]"#]]);

        // l = 4, d = 2: diagonals at 1, 5, 7, 11
        check(
            EdgeKind::Mu { h: 1, m: 0, k: 2 },
            5,
            7,
            4,
            2,
            expect![[r#"[(6, 9), (5, 8)]"#]],
        );
    }

    #[test]
    fn test_decode_short_relations() {
        let algebra = NakayamaAlgebra::new(2, 2, 2).unwrap();
        let graph = TorsionGraph::new(2, 2);
        let output = graph
            .odd_nodes()
            .iter()
            .flat_map(|&start| walks(&graph, start, 1))
            .map(|walk| {
                let modules = decode_walk(&algebra, &graph, &walk).unwrap();
                format!("{}: {}", walk.display(&graph), additive_closure_string(&modules))
            })
            .join("\n");

        expect![[r#"
            DEmpty ---γ---> DEmpty: add(0)
            DEmpty ---δ_0---> DFull: add(M(3,3))
            DEmpty ---δ_1---> DFull: add(M(2,3) ⊕ M(3,3))
            DEmpty ---δ_2---> DFull: add(M(2,3) ⊕ M(1,2) ⊕ M(3,3))
            DFull ---ε---> DFull: add(M(1,1) ⊕ M(1,2) ⊕ M(2,3) ⊕ M(3,3))
            DFull ---β---> DEmpty: add(M(1,1))"#]]
        .assert_eq(&output);
    }

    #[test]
    fn test_decode_long_relations() {
        let algebra = NakayamaAlgebra::new(3, 2, 2).unwrap();
        let graph = TorsionGraph::new(3, 2);
        let output = graph
            .odd_nodes()
            .iter()
            .flat_map(|&start| walks(&graph, start, 1))
            .map(|walk| {
                let modules = decode_walk(&algebra, &graph, &walk).unwrap();
                format!("{}: {}", walk.display(&graph), additive_closure_string(&modules))
            })
            .join("\n");

        expect![[r#"
            DOddFull ---ι---> DEvenFull: add(M(1,1) ⊕ M(1,2) ⊕ M(1,3) ⊕ M(2,4) ⊕ M(4,4) ⊕ M(3,4))
            DOddOne ---η---> DEvenEmpty: add(M(1,1))
            DOddEmpty ---δ_1---> DEven1: add(M(4,4))
            DOddEmpty ---γ---> DEvenEmpty: add(0)
            DOddEmpty ---β_0---> DEvenFull: add(M(4,4) ⊕ M(3,4))
            DOddEmpty ---β_1---> DEvenFull: add(M(2,4) ⊕ M(4,4) ⊕ M(3,4))
            DOddEmpty ---β_2---> DEvenFull: add(M(2,4) ⊕ M(1,3) ⊕ M(4,4) ⊕ M(3,4))
            DOdd2 ---ε_2---> DEvenFull: add(M(1,2) ⊕ M(1,3) ⊕ M(2,4) ⊕ M(4,4) ⊕ M(3,4))"#]]
        .assert_eq(&output);
    }

    #[test]
    fn test_walk_too_long() {
        let algebra = NakayamaAlgebra::new(2, 2, 2).unwrap();
        let graph = TorsionGraph::new(2, 2);
        let walk = walks(&graph, graph.odd_nodes()[0], 2).remove(0);
        assert_eq!(
            decode_walk(&algebra, &graph, &walk),
            Err(DecodeError::MissingDiagonal {
                position: 3,
                diagonals: 2
            })
        );
    }

    #[test]
    fn test_decode_is_deterministic() {
        let algebra = NakayamaAlgebra::new(4, 2, 4).unwrap();
        let graph = TorsionGraph::new(4, 2);
        for walk in walks(&graph, graph.odd_nodes()[2], 3).iter().take(50) {
            assert_eq!(
                decode_walk(&algebra, &graph, walk),
                decode_walk(&algebra, &graph, walk)
            );
        }
    }
}
