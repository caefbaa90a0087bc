//! Parsing and printing of lists of modules.
//!
//! Two notations are accepted:
//!  - `M(1,1) ⊕ M(1,2) ⊕ ...`
//!  - `M-1-1,M-1-2,...`
//!
//! The empty list is written `0` (or left empty).

use itertools::Itertools;
use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    error::{ParseError as NomParseError, VerboseError},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair},
    IResult as IResultBase, Parser,
};

use crate::module::{Module, ModuleError};

type IResult<I, O> = IResultBase<I, O, VerboseError<I>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Syntax { input: String },
    InvalidModule { a: i64, b: i64, source: ModuleError },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { input } => write!(
                f,
                "Invalid module list '{input}'. Expected e.g. 'M(1,1) ⊕ M(1,2)' or 'M-1-1,M-1-2'"
            ),
            Self::InvalidModule { a, b, source } => write!(f, "Invalid module M({a},{b}): {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax { .. } => None,
            Self::InvalidModule { source, .. } => Some(source),
        }
    }
}

/// Pad both ends with whitespace
fn space<'a, O, E: NomParseError<&'a str>, F: Parser<&'a str, O, E>>(
    f: F,
) -> impl FnMut(&'a str) -> IResultBase<&'a str, O, E> {
    delimited(space0, f, space0)
}

fn coordinate(i: &str) -> IResult<&str, i64> {
    map_res(space(digit1), str::parse)(i)
}

/// `M(a,b)`
fn summand(i: &str) -> IResult<&str, (i64, i64)> {
    space(preceded(
        tag("M("),
        separated_pair(coordinate, char(','), coordinate).and(char(')')),
    ))
    .map(|(coordinates, _)| coordinates)
    .parse(i)
}

/// `M-a-b`
fn dashed(i: &str) -> IResult<&str, (i64, i64)> {
    space(preceded(
        tag("M-"),
        separated_pair(coordinate, char('-'), coordinate),
    ))(i)
}

fn direct_sum(i: &str) -> IResult<&str, Vec<(i64, i64)>> {
    separated_list1(char('⊕'), summand)(i)
}

fn dashed_list(i: &str) -> IResult<&str, Vec<(i64, i64)>> {
    separated_list1(char(','), dashed)(i)
}

/// Parse a list of modules, validating each against the vertex count `n` and relation length `l`
/// when these are given.
pub fn parse_modules(
    input: &str,
    n: Option<u32>,
    l: Option<u32>,
) -> Result<Vec<Module>, ParseError> {
    let input = input.trim();
    if input.is_empty() || input == "0" {
        return Ok(Vec::new());
    }

    let parsed = if input.contains('-') {
        all_consuming(dashed_list)(input)
    } else {
        all_consuming(direct_sum)(input)
    };
    let (_, coordinates) = parsed.map_err(|_| ParseError::Syntax {
        input: input.to_owned(),
    })?;

    coordinates
        .into_iter()
        .map(|(a, b)| {
            Module::bounded(a, b, n, l).map_err(|source| ParseError::InvalidModule { a, b, source })
        })
        .collect()
}

/// `M(1,1) ⊕ M(1,2)`, or `0` for the empty list.
pub fn direct_sum_string(modules: &[Module]) -> String {
    if modules.is_empty() {
        return "0".to_owned();
    }
    modules.iter().join(" ⊕ ")
}

/// `add(M(1,1) ⊕ M(1,2))`, the additive closure of the modules.
pub fn additive_closure_string(modules: &[Module]) -> String {
    format!("add({})", direct_sum_string(modules))
}

/// `M-1-1,M-1-2`, or `0` for the empty list.
pub fn dashed_string(modules: &[Module]) -> String {
    if modules.is_empty() {
        return "0".to_owned();
    }
    modules
        .iter()
        .map(|module| format!("M-{}-{}", module.a(), module.b()))
        .join(",")
}

/// Convert between the two notations: a list given in one is printed in the other.
pub fn convert(input: &str, n: Option<u32>, l: Option<u32>) -> Result<String, ParseError> {
    let modules = parse_modules(input, n, l)?;
    Ok(if input.contains('-') {
        direct_sum_string(&modules)
    } else {
        dashed_string(&modules)
    })
}
