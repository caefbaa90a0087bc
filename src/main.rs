use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use nakayama::notation::{additive_closure_string, convert, direct_sum_string};
use nakayama::{Module, RigidPair, RIGID_PAIR_CONFIRMATION};
use serde::Serialize;
use tautilt::utils::{init_logging, parse_algebra_modules};
use tautilt::{minimal_containing_class, verify, TorsionClass, TorsionTheory};

/// Parameter sets exercised by `verify --all`, as (d, l, p).
#[rustfmt::skip]
const STANDARD_CASES: &[(u32, u32, u32)] = &[
    (2, 2, 2), (2, 2, 3), (2, 2, 4), (2, 2, 5), (2, 2, 6),
    (2, 3, 2), (2, 3, 4), (2, 3, 6),
    (2, 4, 2), (2, 4, 4), (2, 4, 6),
    (2, 6, 2), (2, 6, 4), (2, 6, 6),
    (3, 2, 2), (3, 2, 3), (3, 2, 4), (3, 2, 5), (3, 2, 6),
    (4, 2, 2), (4, 2, 3), (4, 2, 4), (4, 2, 5), (4, 2, 6),
    (4, 3, 2), (4, 3, 4), (4, 3, 6),
    (4, 4, 2), (4, 4, 4), (4, 4, 6),
    (4, 5, 2), (4, 5, 4), (4, 5, 6),
    (4, 6, 2), (4, 6, 4), (4, 6, 6),
    (6, 2, 2), (6, 2, 3), (6, 2, 4), (6, 2, 5), (6, 2, 6),
    (6, 3, 2), (6, 3, 4), (6, 3, 6),
    (6, 4, 2), (6, 4, 4), (6, 4, 6),
    (6, 5, 2), (6, 5, 4), (6, 5, 6),
    (6, 6, 2), (6, 6, 4), (6, 6, 6),
];

/// Higher τ-tilting theory of linear Nakayama algebras kA_n/R^l with homogeneous relations
#[derive(Debug, Parser)]
#[command(name = "tautilt", version)]
struct Cli {
    /// Length of the zero relations
    #[arg(short, long, global = true, default_value_t = 2)]
    l: u32,

    /// The d of the d-cluster tilting subcategory
    #[arg(short, long, global = true, default_value_t = 2)]
    d: u32,

    /// Number of diagonals of the d-cluster tilting subcategory
    #[arg(short, long, global = true, default_value_t = 2)]
    p: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe the algebra, its cluster tilting subcategory and the graph G(C)
    Info,
    /// List all d-torsion classes
    TorsionClasses {
        #[arg(long)]
        json: bool,
    },
    /// Compute the summand maximal τ_d-rigid pair of a d-torsion class
    RigidPair {
        /// Position of the class in the output of `torsion-classes`
        #[arg(long, conflicts_with = "modules", required_unless_present = "modules")]
        class: Option<usize>,
        /// An additive generator of the class, e.g. "M(1,1) ⊕ M(1,2)" or "M-1-1,M-1-2"
        #[arg(long)]
        modules: Option<String>,
    },
    /// Find the minimal d-torsion class containing a τ_d-rigid pair (M, P)
    Minimal {
        #[arg(long)]
        modules: String,
        #[arg(long, default_value = "0")]
        projectives: String,
    },
    /// Check whether a pair (M, P) is τ_d-rigid
    CheckPair {
        #[arg(long)]
        modules: String,
        #[arg(long, default_value = "0")]
        projectives: String,
    },
    /// Convert a list of modules between "M(1,1) ⊕ M(1,2)" and "M-1-1,M-1-2"
    Convert { input: String },
    /// Check every d-torsion class against the expected properties of its rigid pair
    Verify {
        /// Run the standard list of parameters instead of the given ones
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    if let Command::Verify { all: true, json } = cli.command {
        return verify_all(json);
    }

    let theory = TorsionTheory::new(cli.l, cli.d, cli.p)
        .with_context(|| format!("Invalid parameters l={}, d={}, p={}", cli.l, cli.d, cli.p))?;

    match cli.command {
        Command::Info => info(&theory),
        Command::TorsionClasses { json } => torsion_classes(&theory, json)?,
        Command::RigidPair { class, modules } => rigid_pair(&theory, class, modules.as_deref())?,
        Command::Minimal {
            modules,
            projectives,
        } => minimal(&theory, &modules, &projectives)?,
        Command::CheckPair {
            modules,
            projectives,
        } => check_pair(&theory, &modules, &projectives)?,
        Command::Convert { input } => {
            let algebra = theory.algebra();
            println!("{}", convert(&input, Some(algebra.n()), Some(algebra.l()))?);
        }
        Command::Verify { json, .. } => {
            let report = verify(&theory)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            if !report.passed() {
                bail!("Verification failed");
            }
        }
    }
    Ok(())
}

fn info(theory: &TorsionTheory) {
    let algebra = theory.algebra();
    let graph = theory.graph();
    let (l, d, p, n) = (algebra.l(), algebra.d(), algebra.p(), algebra.n());

    println!("Computations correspond to the algebra kA_{n}/(paths of length {l})");
    println!("This algebra admits a {d}-cluster tilting subcategory with {p} diagonals");
    println!();
    println!("Indecomposable modules in the {d}-cluster tilting subcategory C:");
    println!("{}", algebra.cluster_tilting().iter().join(", "));
    println!(
        "Number of indecomposable modules in C: {}",
        algebra.cluster_tilting().len()
    );
    println!();
    println!("Simple modules:");
    println!("{}", algebra.simples().iter().join(", "));
    println!();
    println!("Projective modules:");
    println!("{}", algebra.projectives().iter().join(", "));
    println!();
    println!("Information about the graph G=G(C):");
    println!("Number of vertices: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());
    println!();
    println!("Odd nodes:");
    println!("{}", graph.node_names(graph.odd_nodes()).join(", "));
    println!();
    println!("Even nodes:");
    println!("{}", graph.node_names(graph.even_nodes()).join(", "));
    println!();
    println!("Edges and their labels:");
    print!("{}", graph.edge_listing());
}

#[derive(Serialize)]
struct ClassSummary<'a> {
    index: usize,
    modules: &'a [Module],
    walk: String,
}

fn print_class(theory: &TorsionTheory, class: &TorsionClass) {
    println!("Subcategory: {}", additive_closure_string(&class.modules));
    println!("Path in graph: {}", class.walk.display(theory.graph()));
}

fn torsion_classes(theory: &TorsionTheory, json: bool) -> anyhow::Result<()> {
    let d = theory.algebra().d();
    let classes = theory.torsion_classes()?;

    if json {
        let summaries: Vec<ClassSummary> = classes
            .iter()
            .enumerate()
            .map(|(i, class)| ClassSummary {
                index: i + 1,
                modules: &class.modules,
                walk: class.walk.display(theory.graph()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Found {} {d}-torsion classes:", classes.len());
    for (i, class) in classes.iter().enumerate() {
        println!();
        println!("{d}-torsion Class {}:", i + 1);
        print_class(theory, class);
    }
    Ok(())
}

fn rigid_pair(
    theory: &TorsionTheory,
    index: Option<usize>,
    modules: Option<&str>,
) -> anyhow::Result<()> {
    let algebra = theory.algebra();
    let d = algebra.d();
    let classes = theory.torsion_classes()?;

    let class = match (index, modules) {
        (Some(i), _) => i
            .checked_sub(1)
            .and_then(|i| classes.get(i))
            .ok_or_else(|| anyhow!("Please choose a class between 1 and {}", classes.len()))?,
        (None, Some(input)) => {
            let modules = parse_algebra_modules(algebra, input)?;
            theory
                .find_class(&modules, &classes)
                .ok_or_else(|| anyhow!("This is not a valid {d}-torsion class"))?
        }
        (None, None) => bail!("Either --class or --modules must be given"),
    };

    println!("The {d}-torsion class U:");
    print_class(theory, class);

    let pair = algebra.summand_maximal_rigid_pair(&class.modules)?;
    println!();
    println!("The summand maximal tau_{d}-rigid pair (M^U, P^U) is:");
    println!();
    println!("M^U = {}", direct_sum_string(&pair.m));
    println!("P^U = {}", direct_sum_string(&pair.p));
    Ok(())
}

fn read_pair(theory: &TorsionTheory, modules: &str, projectives: &str) -> anyhow::Result<RigidPair> {
    let algebra = theory.algebra();
    Ok(RigidPair::new(
        parse_algebra_modules(algebra, modules).context("Invalid M part")?,
        parse_algebra_modules(algebra, projectives).context("Invalid P part")?,
    ))
}

fn minimal(theory: &TorsionTheory, modules: &str, projectives: &str) -> anyhow::Result<()> {
    let algebra = theory.algebra();
    let d = algebra.d();
    let pair = read_pair(theory, modules, projectives)?.basic();

    algebra
        .check_rigid_pair(&pair)
        .context("The pair you entered is not tau_d-rigid")?;

    let classes = theory.torsion_classes()?;
    let class = minimal_containing_class(&pair.m, &classes)
        .ok_or_else(|| anyhow!("Could not find a torsion class containing this pair"))?;

    println!("Minimal {d}-torsion class containing (M,P):");
    print_class(theory, class);
    Ok(())
}

fn check_pair(theory: &TorsionTheory, modules: &str, projectives: &str) -> anyhow::Result<()> {
    let algebra = theory.algebra();
    let n = algebra.n();
    let pair = read_pair(theory, modules, projectives)?;
    let is_basic = pair.is_basic();
    let basic = pair.basic();

    if !is_basic {
        println!("Note: The pair you entered is not basic (contains repeated modules).");
        println!("The basic version of your pair is:");
        println!("M = {}", direct_sum_string(&basic.m));
        println!("P = {}", direct_sum_string(&basic.p));
        println!();
    }

    if let Err(violation) = algebra.check_rigid_pair(&basic) {
        println!("This is not a tau_d-rigid pair:");
        println!("{violation}");
        return Ok(());
    }

    println!("{RIGID_PAIR_CONFIRMATION}");
    let subject = if is_basic { "it is" } else { "its basic version is" };
    let count = basic.summand_count();
    if count == n as usize {
        println!("Moreover, {subject} summand maximal as it has {n} indecomposable summands.");
    } else {
        println!("However, {subject} not summand maximal (has {count} modules instead of {n}).");
    }
    Ok(())
}

fn verify_all(json: bool) -> anyhow::Result<()> {
    let mut reports = Vec::new();
    for &(d, l, p) in STANDARD_CASES {
        let theory = TorsionTheory::new(l, d, p)
            .with_context(|| format!("Invalid parameters l={l}, d={d}, p={p}"))?;
        let report = verify(&theory)?;
        if !json {
            println!("{report}");
            println!();
        }
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    if reports.iter().all(|report| report.passed()) {
        if !json {
            println!("All tests passed successfully!");
        }
        Ok(())
    } else {
        bail!("Some tests failed. Check the output above for details.")
    }
}
