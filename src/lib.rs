//! # tautilt
//!
//! Higher $τ$-tilting theory of the linear Nakayama algebras $kA_n / R^l$ with a
//! $d$-cluster tilting subcategory.
//!
//! The $d$-torsion classes are enumerated as walks in a small multigraph depending only on $l$
//! and $d$ (see [`graph`]). Each walk is decoded into a list of modules ([`decode`]), and each
//! class gives rise to a summand-maximal $τ_d$-rigid pair (see [`nakayama::rigid`]).
//!
//! ```
//! use tautilt::TorsionTheory;
//!
//! let theory = TorsionTheory::new(2, 2, 2).unwrap();
//! let classes = theory.torsion_classes().unwrap();
//! assert_eq!(classes.len(), 6);
//!
//! for class in &classes {
//!     let pair = theory.algebra().summand_maximal_rigid_pair(&class.modules).unwrap();
//!     assert!(theory.algebra().check_rigid_pair(&pair).is_ok());
//! }
//! ```

pub mod decode;
pub mod graph;
pub mod torsion;
pub mod utils;
pub mod verify;
pub mod walk;

pub use crate::decode::{decode_walk, DecodeError};
pub use crate::graph::{EdgeKind, NodeKind, TorsionGraph};
pub use crate::torsion::{
    all_torsion_classes, minimal_containing_class, minimal_torsion_class, TorsionClass,
    TorsionTheory,
};
pub use crate::verify::{expected_torsion_class_count, verify, VerificationReport};
pub use crate::walk::{walks, Walk};
