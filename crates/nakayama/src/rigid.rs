//! $τ_d$-rigid pairs and the summand-maximal pair attached to a $d$-torsion class.
//!
//! A pair $(M, P)$ is $τ_d$-rigid if
//!  1. $\Hom(M, τ_d M) = 0$,
//!  2. $P$ is projective, and
//!  3. $\Hom(P, M) = 0$.
//!
//! Given a $d$-torsion class $U$, the pair $(M^U, P^U)$ takes $M^U$ to be the
//! $\Ext^d$-projective generator of $U$ and $P^U$ the maximal projective with no maps to $M^U$.

use itertools::Itertools;
use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};

use crate::algebra::NakayamaAlgebra;
use crate::homological::{hom_is_zero, is_projective, tau_d, DiagonalError};
use crate::module::Module;

pub const RIGID_PAIR_CONFIRMATION: &str = "Valid τ_d-rigid pair: All conditions satisfied";

/// The first condition of a $τ_d$-rigid pair that fails, naming the offending modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidityViolation {
    /// $\Hom(M_1, τ_d M_2) \neq 0$.
    HomToTranslate { m1: Module, m2: Module },
    NotProjective { module: Module },
    /// $\Hom(P, M) \neq 0$.
    HomFromProjective { projective: Module, module: Module },
}

impl std::fmt::Display for RigidityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomToTranslate { m1, m2 } => {
                write!(f, "Condition 1 failed: Hom({m1}, τ_d({m2})) ≠ 0")
            }
            Self::NotProjective { module } => {
                write!(f, "Condition 2 failed: {module} is not projective")
            }
            Self::HomFromProjective { projective, module } => {
                write!(f, "Condition 3 failed: Hom({projective}, {module}) ≠ 0")
            }
        }
    }
}

impl std::error::Error for RigidityViolation {}

/// The $\Ext^d$-projective modules of `u`, i.e. those $X \in U$ with $\Ext^d(X, Y) = 0$ for every
/// other $Y \in U$. The order of `u` is preserved.
pub fn ext_d_projective_modules(
    u: &[Module],
    algebra: &NakayamaAlgebra,
) -> Result<Vec<Module>, DiagonalError> {
    let mut result = Vec::new();
    for &x in u {
        let mut projective = true;
        for &y in u {
            if y != x && !algebra.ext_d_is_zero(x, y)? {
                projective = false;
                break;
            }
        }
        if projective {
            result.push(x);
        }
    }
    Ok(result)
}

/// All projectives $P$ with $\Hom(P, M) = 0$ for every $M$ in `m`.
pub fn maximal_projective(m: &[Module], projectives: &[Module]) -> Vec<Module> {
    projectives
        .iter()
        .copied()
        .filter(|&projective| m.iter().all(|&module| hom_is_zero(projective, module)))
        .collect()
}

/// Check the three conditions for $(M, P)$ to be $τ_d$-rigid, in order, stopping at the first
/// failure. The first condition ranges over all ordered pairs of `m`, including $M_1 = M_2$.
pub fn is_tau_d_rigid_pair(
    m: &[Module],
    p: &[Module],
    l: u32,
    d: u32,
) -> Result<(), RigidityViolation> {
    for &m1 in m {
        for &m2 in m {
            if !hom_is_zero(m1, tau_d(m2, d, l)) {
                return Err(RigidityViolation::HomToTranslate { m1, m2 });
            }
        }
    }

    if let Some(&module) = p.iter().find(|&&module| !is_projective(module, l)) {
        return Err(RigidityViolation::NotProjective { module });
    }

    for (&projective, &module) in p.iter().cartesian_product(m) {
        if !hom_is_zero(projective, module) {
            return Err(RigidityViolation::HomFromProjective { projective, module });
        }
    }

    Ok(())
}

/// A pair $(M, P)$ of module collections, with $P$ intended to be projective.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RigidPair {
    pub m: Vec<Module>,
    pub p: Vec<Module>,
}

impl RigidPair {
    pub fn new(m: Vec<Module>, p: Vec<Module>) -> Self {
        Self { m, p }
    }

    /// Whether neither side repeats an indecomposable summand.
    pub fn is_basic(&self) -> bool {
        self.m.iter().all_unique() && self.p.iter().all_unique()
    }

    /// Remove repeated summands, keeping the first occurrence of each.
    pub fn basic(&self) -> Self {
        Self {
            m: self.m.iter().copied().unique().collect(),
            p: self.p.iter().copied().unique().collect(),
        }
    }

    /// The number of distinct indecomposable summands of $M \oplus P$.
    pub fn summand_count(&self) -> usize {
        self.m
            .iter()
            .chain(&self.p)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl NakayamaAlgebra {
    /// The summand-maximal $τ_d$-rigid pair $(M^U, P^U)$ attached to a $d$-torsion class `u`.
    pub fn summand_maximal_rigid_pair(&self, u: &[Module]) -> Result<RigidPair, DiagonalError> {
        let m = ext_d_projective_modules(u, self)?;
        let p = maximal_projective(&m, self.projectives());
        Ok(RigidPair { m, p })
    }

    pub fn check_rigid_pair(&self, pair: &RigidPair) -> Result<(), RigidityViolation> {
        is_tau_d_rigid_pair(&pair.m, &pair.p, self.l(), self.d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(a: i64, b: i64) -> Module {
        Module::new(a, b).unwrap()
    }

    #[test]
    fn test_summand_maximal_rigid_pair() {
        let algebra = NakayamaAlgebra::new(2, 2, 2).unwrap();

        let check = |u: &[Module], expected_m: &[Module], expected_p: &[Module]| {
            let pair = algebra.summand_maximal_rigid_pair(u).unwrap();
            assert_eq!(pair.m, expected_m);
            assert_eq!(pair.p, expected_p);
            assert_eq!(algebra.check_rigid_pair(&pair), Ok(()));
            assert_eq!(pair.summand_count(), algebra.n() as usize);
        };

        check(&[], &[], &[m(1, 1), m(1, 2), m(2, 3)]);
        check(&[m(3, 3)], &[m(3, 3)], &[m(1, 1), m(1, 2)]);
        check(&[m(2, 3), m(3, 3)], &[m(2, 3), m(3, 3)], &[m(1, 1)]);
        check(
            &[m(1, 1), m(1, 2), m(2, 3), m(3, 3)],
            &[m(1, 1), m(1, 2), m(2, 3)],
            &[],
        );
        check(&[m(1, 1)], &[m(1, 1)], &[m(1, 2), m(2, 3)]);
    }

    #[test]
    fn test_ext_d_projective_modules_excludes_self() {
        // l = 3, d = 2, p = 2. Ext^2(M(4, 4), M(2, 4)) vanishes since M(2, 4) is injective.
        let algebra = NakayamaAlgebra::new(3, 2, 2).unwrap();
        let u = [m(2, 4), m(1, 3), m(4, 4), m(3, 4)];
        assert_eq!(ext_d_projective_modules(&u, &algebra).unwrap(), u);
    }

    #[test]
    fn test_rigidity_violations() {
        // l = 2, d = 2, p = 3 so τ_2 M(5, 5) = M(3, 3).
        assert_eq!(
            is_tau_d_rigid_pair(&[m(3, 3), m(5, 5)], &[], 2, 2),
            Err(RigidityViolation::HomToTranslate {
                m1: m(3, 3),
                m2: m(5, 5)
            })
        );
        assert_eq!(
            is_tau_d_rigid_pair(&[], &[m(1, 2), m(3, 3)], 2, 2),
            Err(RigidityViolation::NotProjective { module: m(3, 3) })
        );
        assert_eq!(
            is_tau_d_rigid_pair(&[m(4, 5)], &[m(1, 1), m(3, 4)], 2, 2),
            Err(RigidityViolation::HomFromProjective {
                projective: m(3, 4),
                module: m(4, 5)
            })
        );
        assert_eq!(is_tau_d_rigid_pair(&[m(4, 5)], &[m(1, 1)], 2, 2), Ok(()));
    }

    #[test]
    fn test_violation_messages() {
        let check = |violation: RigidityViolation, expected: &str| {
            assert_eq!(violation.to_string(), expected);
        };
        check(
            RigidityViolation::HomToTranslate {
                m1: m(3, 3),
                m2: m(5, 5),
            },
            "Condition 1 failed: Hom(M(3,3), τ_d(M(5,5))) ≠ 0",
        );
        check(
            RigidityViolation::NotProjective { module: m(3, 3) },
            "Condition 2 failed: M(3,3) is not projective",
        );
        check(
            RigidityViolation::HomFromProjective {
                projective: m(3, 4),
                module: m(4, 5),
            },
            "Condition 3 failed: Hom(M(3,4), M(4,5)) ≠ 0",
        );
    }

    #[test]
    fn test_basic() {
        let pair = RigidPair::new(vec![m(1, 1), m(2, 3), m(1, 1)], vec![m(1, 2)]);
        assert!(!pair.is_basic());
        let basic = pair.basic();
        assert!(basic.is_basic());
        assert_eq!(basic.m, [m(1, 1), m(2, 3)]);
        assert_eq!(basic.p, [m(1, 2)]);
        assert_eq!(pair.summand_count(), 3);
    }
}
