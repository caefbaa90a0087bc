//! Enumeration of $d$-torsion classes, and queries against the resulting list.
//!
//! The $d$-torsion classes are in bijection with the walks of length $p - 1$ in
//! [`TorsionGraph`] starting at an odd node. The list is recomputed on every call to
//! [`all_torsion_classes`]; callers that need it more than once should keep the result.

use nakayama::{Module, NakayamaAlgebra, ParameterError};
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;

use crate::decode::{decode_walk, DecodeError};
use crate::graph::TorsionGraph;
use crate::walk::{walks, Walk};

/// A $d$-torsion class together with the walk it was decoded from.
///
/// The modules are in the order the walk produces them. As a subcategory the class is
/// determined by the underlying set, so comparisons between classes should go through
/// [`TorsionClass::same_class`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TorsionClass {
    pub modules: Vec<Module>,
    pub walk: Walk,
}

impl TorsionClass {
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn module_set(&self) -> HashSet<Module> {
        self.modules.iter().copied().collect()
    }

    /// Whether every module of `modules` lies in this class.
    pub fn contains_all(&self, modules: &[Module]) -> bool {
        let set = self.module_set();
        modules.iter().all(|module| set.contains(module))
    }

    /// Whether this class and `modules` have the same underlying set.
    pub fn same_class(&self, modules: &[Module]) -> bool {
        self.module_set() == modules.iter().copied().collect()
    }
}

#[tracing::instrument(skip_all, fields(params = %algebra.parameters()))]
pub fn all_torsion_classes(
    algebra: &NakayamaAlgebra,
    graph: &TorsionGraph,
) -> Result<Vec<TorsionClass>, DecodeError> {
    let length = algebra.p() as usize - 1;
    let mut result = Vec::new();
    for &start in graph.odd_nodes() {
        for walk in walks(graph, start, length) {
            let modules = decode_walk(algebra, graph, &walk)?;
            result.push(TorsionClass { modules, walk });
        }
    }
    tracing::info!(count = result.len(), "enumerated torsion classes");
    Ok(result)
}

/// The smallest class in `classes` containing every module of `modules`. If several classes of
/// the same size qualify, the first one in the order of `classes` is returned.
pub fn minimal_containing_class<'a>(
    modules: &[Module],
    classes: &'a [TorsionClass],
) -> Option<&'a TorsionClass> {
    let mut minimal: Option<&TorsionClass> = None;
    for class in classes {
        if class.contains_all(modules) && minimal.map_or(true, |m| class.len() < m.len()) {
            minimal = Some(class);
        }
    }
    minimal
}

/// The modules of the minimal torsion class containing `modules`, or `None` if no class in
/// `classes` contains them. The empty collection lies in the zero class, so yields an empty
/// result whatever `classes` is.
pub fn minimal_torsion_class<'a>(
    modules: &[Module],
    classes: &'a [TorsionClass],
) -> Option<&'a [Module]> {
    if modules.is_empty() {
        return Some(&[]);
    }
    minimal_containing_class(modules, classes).map(|class| class.modules.as_slice())
}

/// An algebra together with its graph. Both are fixed once constructed.
#[derive(Debug, Clone)]
pub struct TorsionTheory {
    algebra: NakayamaAlgebra,
    graph: TorsionGraph,
}

impl TorsionTheory {
    pub fn new(l: u32, d: u32, p: u32) -> Result<Self, ParameterError> {
        Ok(Self::from_algebra(NakayamaAlgebra::new(l, d, p)?))
    }

    pub fn from_algebra(algebra: NakayamaAlgebra) -> Self {
        let graph = TorsionGraph::new(algebra.l(), algebra.d());
        Self { algebra, graph }
    }

    pub fn algebra(&self) -> &NakayamaAlgebra {
        &self.algebra
    }

    pub fn graph(&self) -> &TorsionGraph {
        &self.graph
    }

    pub fn torsion_classes(&self) -> Result<Vec<TorsionClass>, DecodeError> {
        all_torsion_classes(&self.algebra, &self.graph)
    }

    pub fn decode(&self, walk: &Walk) -> Result<Vec<Module>, DecodeError> {
        decode_walk(&self.algebra, &self.graph, walk)
    }

    /// The class in `classes` with the same underlying set as `modules`, if any.
    pub fn find_class<'a>(
        &self,
        modules: &[Module],
        classes: &'a [TorsionClass],
    ) -> Option<&'a TorsionClass> {
        classes.iter().find(|class| class.same_class(modules))
    }
}
