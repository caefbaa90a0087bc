//! Indecomposable modules over the linear Nakayama algebras $kA_n / R^l$, together with the
//! homological operations ($τ_d$, Hom and $\Ext^d$ vanishing, rigidity) on their $d$-cluster
//! tilting subcategories.

pub mod algebra;
pub mod homological;
pub mod module;
pub mod notation;
pub mod rigid;

pub use crate::algebra::{NakayamaAlgebra, ParameterError, Parameters};
pub use crate::homological::{
    diagonal, ext_d_is_zero, hom_is_zero, is_injective, is_projective, tau_d, DiagonalError,
};
pub use crate::module::{Module, ModuleError};
pub use crate::notation::{parse_modules, ParseError};
pub use crate::rigid::{
    ext_d_projective_modules, is_tau_d_rigid_pair, maximal_projective, RigidPair,
    RigidityViolation, RIGID_PAIR_CONFIRMATION,
};
