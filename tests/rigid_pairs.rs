use nakayama::{parse_modules, Module, RigidPair, RigidityViolation};
use proptest::prelude::*;
use tautilt::{minimal_containing_class, minimal_torsion_class, TorsionTheory};

fn modules(input: &str) -> Vec<Module> {
    parse_modules(input, None, None).unwrap()
}

#[test]
fn rigid_pair_of_each_class() {
    let theory = TorsionTheory::new(3, 2, 2).unwrap();
    let algebra = theory.algebra();
    let classes = theory.torsion_classes().unwrap();

    let pairs: Vec<RigidPair> = classes
        .iter()
        .map(|class| algebra.summand_maximal_rigid_pair(&class.modules).unwrap())
        .collect();

    // DOddFull ---ι---> DEvenFull is all of C, generated by the projectives
    assert_eq!(pairs[0].m, modules("M(1,1) ⊕ M(1,2) ⊕ M(1,3) ⊕ M(2,4)"));
    assert!(pairs[0].p.is_empty());
    // DOddEmpty ---γ---> DEvenEmpty is the zero class
    assert!(pairs[3].m.is_empty());
    assert_eq!(pairs[3].p, algebra.projectives());
    // DOddEmpty ---β_2---> DEvenFull
    assert_eq!(pairs[6].m, modules("M(2,4) ⊕ M(1,3) ⊕ M(4,4) ⊕ M(3,4)"));
    assert!(pairs[6].p.is_empty());

    for pair in &pairs {
        assert_eq!(algebra.check_rigid_pair(pair), Ok(()));
        assert_eq!(pair.summand_count(), algebra.n() as usize);
    }
}

#[test]
fn minimal_class_of_pair() {
    let theory = TorsionTheory::new(2, 2, 3).unwrap();
    let classes = theory.torsion_classes().unwrap();

    let m = modules("M-2-3");
    let class = minimal_containing_class(&m, &classes).unwrap();
    assert_eq!(class.modules, modules("M(2,3) ⊕ M(3,3)"));
    assert_eq!(class.walk.display(theory.graph()), "DEmpty ---δ_1---> DFull ---β---> DEmpty");

    assert_eq!(minimal_torsion_class(&[], &classes), Some(&[][..]));
}

#[test]
fn rejects_non_rigid_pair() {
    let theory = TorsionTheory::new(2, 2, 3).unwrap();
    let algebra = theory.algebra();
    let pair = RigidPair::new(modules("M(3,3) ⊕ M(5,5)"), vec![]);
    assert_eq!(
        algebra.check_rigid_pair(&pair),
        Err(RigidityViolation::HomToTranslate {
            m1: modules("M(3,3)")[0],
            m2: modules("M(5,5)")[0],
        })
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn minimal_class_is_minimal(index in 0..62usize, take in 0..6usize) {
        let theory = TorsionTheory::new(3, 2, 4).unwrap();
        let classes = theory.torsion_classes().unwrap();
        let subset: Vec<Module> = classes[index].modules.iter().copied().take(take).collect();

        let minimal = minimal_containing_class(&subset, &classes).unwrap();
        prop_assert!(minimal.contains_all(&subset));
        prop_assert!(minimal.len() <= classes[index].len());
        for class in &classes {
            if class.contains_all(&subset) {
                prop_assert!(class.len() >= minimal.len());
            }
        }
    }

    #[test]
    fn ext_projectives_generate(index in 0..96usize) {
        let theory = TorsionTheory::new(4, 2, 4).unwrap();
        let classes = theory.torsion_classes().unwrap();
        let class = &classes[index];
        let pair = theory.algebra().summand_maximal_rigid_pair(&class.modules).unwrap();

        let minimal = minimal_torsion_class(&pair.m, &classes).unwrap();
        prop_assert!(class.same_class(minimal));
    }
}
