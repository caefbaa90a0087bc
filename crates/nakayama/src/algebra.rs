use serde::{Deserialize, Serialize};

use crate::homological::{self, DiagonalError};
use crate::module::{Module, ModuleError};

/// The parameters of a linear Nakayama algebra $kA_n / R^l$ admitting a $d$-cluster tilting
/// subcategory with $p$ diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameters {
    /// The length of the zero relations.
    pub l: u32,
    /// The $d$ of the $d$-cluster tilting subcategory.
    pub d: u32,
    /// The number of diagonals.
    pub p: u32,
}

impl std::fmt::Display for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "l={}, d={}, p={}", self.l, self.d, self.p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    RelationLengthTooSmall { l: u32 },
    DegreeTooSmall { d: u32 },
    TooFewDiagonals { p: u32 },
    /// For odd $d$ and $l > 2$, $τ_d$ is given by a formula we do not implement.
    UnsupportedOddDegree { l: u32, d: u32 },
    OddDiagonalCount { l: u32, p: u32 },
    /// The quiver would have more vertices than fit in a `u32`.
    TooLarge { l: u32, d: u32, p: u32 },
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::RelationLengthTooSmall { l } => {
                write!(f, "l must be greater than or equal to 2, got {l}")
            }
            Self::DegreeTooSmall { d } => {
                write!(f, "d must be greater than or equal to 2, got {d}")
            }
            Self::TooFewDiagonals { p } => {
                write!(f, "p must be greater than or equal to 2, got {p}")
            }
            Self::UnsupportedOddDegree { l, d } => write!(
                f,
                "d must be an even number when l > 2, got d={d} with l={l}"
            ),
            Self::OddDiagonalCount { l, p } => write!(
                f,
                "p must be an even number when l > 2, got p={p} with l={l}"
            ),
            Self::TooLarge { l, d, p } => write!(
                f,
                "l={l}, d={d}, p={p} give more than {} vertices",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for ParameterError {}

impl Parameters {
    pub fn new(l: u32, d: u32, p: u32) -> Self {
        Self { l, d, p }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        let Self { l, d, p } = *self;
        if l < 2 {
            return Err(ParameterError::RelationLengthTooSmall { l });
        }
        if d < 2 {
            return Err(ParameterError::DegreeTooSmall { d });
        }
        if p < 2 {
            return Err(ParameterError::TooFewDiagonals { p });
        }
        if l > 2 && d % 2 == 1 {
            return Err(ParameterError::UnsupportedOddDegree { l, d });
        }
        if l > 2 && p % 2 == 1 {
            return Err(ParameterError::OddDiagonalCount { l, p });
        }
        // Twice the vertex count bounds every intermediate value in `vertex_count` and
        // `simple_vertex`
        let doubled = u64::from(d - 1)
            .checked_mul(u64::from(l))
            .and_then(|x| x.checked_add(2))
            .and_then(|x| x.checked_mul(u64::from(p - 1)))
            .and_then(|x| x.checked_add(u64::from(l)));
        if doubled.map_or(true, |x| x > u64::from(u32::MAX)) {
            return Err(ParameterError::TooLarge { l, d, p });
        }
        Ok(())
    }

    /// The number of vertices $n = (p - 1)(\frac{d - 1}{2} l + 1) + \frac{l}{2}$ of the quiver.
    /// This is an integer for every valid choice of parameters, and only fits in a `u32` once
    /// [`Parameters::validate`] has succeeded.
    pub fn vertex_count(&self) -> u32 {
        let (l, d, p) = (self.l, self.d, self.p);
        ((p - 1) * ((d - 1) * l + 2) + l) / 2
    }

    /// The vertex of the $i$th simple module, i.e. the anchor of the $i$th diagonal. Here $i$ is
    /// 1-based.
    pub fn simple_vertex(&self, i: u32) -> u32 {
        let (l, d) = (self.l, self.d);
        if i % 2 == 1 {
            (i - 1) * (d - 1) * l / 2 + i
        } else {
            ((i - 1) * ((d - 1) * l + 2) + l) / 2
        }
    }
}

/// A validated algebra $kA_n / R^l$ together with the data derived from its parameters: the
/// simples anchoring each diagonal, the projectives and the $d$-cluster tilting subcategory.
///
/// This is computed once and is read only afterwards.
#[derive(Debug, Clone)]
pub struct NakayamaAlgebra {
    params: Parameters,
    n: u32,
    simples: Vec<Module>,
    projectives: Vec<Module>,
    cluster_tilting: Vec<Module>,
}

impl NakayamaAlgebra {
    pub fn new(l: u32, d: u32, p: u32) -> Result<Self, ParameterError> {
        Self::from_parameters(Parameters::new(l, d, p))
    }

    #[tracing::instrument]
    pub fn from_parameters(params: Parameters) -> Result<Self, ParameterError> {
        params.validate()?;
        let n = params.vertex_count();
        let l = params.l;

        let simples: Vec<Module> = (1..=params.p)
            .map(|i| {
                let s = params.simple_vertex(i);
                Module::from_coordinates(s, s)
            })
            .collect();

        let projectives: Vec<Module> = (1..l)
            .map(|j| Module::from_coordinates(1, j))
            .chain((1..=n - l + 1).map(|i| Module::from_coordinates(i, i + l - 1)))
            .collect();

        let mut algebra = Self {
            params,
            n,
            simples,
            projectives,
            cluster_tilting: Vec::new(),
        };
        algebra.cluster_tilting = algebra.compute_cluster_tilting();

        tracing::debug!(
            n,
            cluster_tilting = algebra.cluster_tilting.len(),
            "constructed algebra"
        );
        Ok(algebra)
    }

    /// The cluster tilting subcategory is generated by the projectives and the injective
    /// non-projectives, which form the last diagonal. The remaining diagonals are obtained by
    /// applying $τ_d$ to the last one $p - 2$ times.
    fn compute_cluster_tilting(&self) -> Vec<Module> {
        let n = self.n;
        let mut result = self.projectives.clone();

        let last_diagonal: Vec<Module> = (0..self.params.l - 1)
            .map(|i| Module::from_coordinates(n - i, n))
            .collect();
        result.extend_from_slice(&last_diagonal);

        let mut current = last_diagonal;
        for _ in 0..self.params.p.saturating_sub(2) {
            current = current
                .into_iter()
                .filter_map(|module| self.tau_d(module))
                .collect();
            result.extend_from_slice(&current);
        }

        result.sort_unstable();
        result.dedup();
        result
    }

    pub fn parameters(&self) -> Parameters {
        self.params
    }

    pub fn l(&self) -> u32 {
        self.params.l
    }

    pub fn d(&self) -> u32 {
        self.params.d
    }

    pub fn p(&self) -> u32 {
        self.params.p
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn simples(&self) -> &[Module] {
        &self.simples
    }

    pub fn projectives(&self) -> &[Module] {
        &self.projectives
    }

    /// The $d$-cluster tilting subcategory, sorted lexicographically.
    pub fn cluster_tilting(&self) -> &[Module] {
        &self.cluster_tilting
    }

    pub fn in_cluster_tilting(&self, module: Module) -> bool {
        self.cluster_tilting.binary_search(&module).is_ok()
    }

    /// Construct a module of this algebra, i.e. one with $b \leq n$ and length at most $l$.
    pub fn module(&self, a: i64, b: i64) -> Result<Module, ModuleError> {
        Module::bounded(a, b, Some(self.n), Some(self.params.l))
    }

    /// The vertex of the simple anchoring the diagonal at the 1-based `position`.
    pub fn diagonal_base(&self, position: usize) -> Option<u32> {
        position
            .checked_sub(1)
            .and_then(|i| self.simples.get(i))
            .map(Module::a)
    }

    pub fn tau_d(&self, module: Module) -> Option<Module> {
        homological::tau_d(module, self.params.d, self.params.l)
    }

    pub fn is_projective(&self, module: Module) -> bool {
        homological::is_projective(module, self.params.l)
    }

    pub fn diagonal(&self, module: Module) -> Result<usize, DiagonalError> {
        homological::diagonal(module, &self.simples)
    }

    pub fn ext_d_is_zero(
        &self,
        source: impl Into<Option<Module>>,
        target: impl Into<Option<Module>>,
    ) -> Result<bool, DiagonalError> {
        homological::ext_d_is_zero(
            source,
            target,
            &self.simples,
            self.params.d,
            self.params.l,
            self.n,
        )
    }
}
