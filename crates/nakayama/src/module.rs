use serde::{Deserialize, Serialize};

/// The indecomposable module $M(a, b)$, supported on the consecutive vertices $a, a + 1, ..., b$
/// of the linearly oriented quiver $A_n$.
///
/// Modules are plain values. Every algorithm in this crate produces new modules instead of
/// mutating existing ones, and two modules are equal exactly when their coordinates agree.
///
/// The derived ordering is lexicographic in $(a, b)$, which is the order used when listing the
/// cluster tilting subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(u32, u32)")]
pub struct Module {
    a: u32,
    b: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleError {
    NonPositive { a: i64, b: i64 },
    Reversed { a: i64, b: i64 },
    TooLarge { b: i64 },
    ExceedsVertexCount { b: i64, n: u32 },
    ExceedsLength { length: i64, l: u32 },
}

impl std::fmt::Display for ModuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NonPositive { a, b } => {
                write!(f, "Both a and b must be positive integers, got ({a}, {b})")
            }
            Self::Reversed { a, b } => {
                write!(f, "a must be less than or equal to b, got ({a}, {b})")
            }
            Self::TooLarge { b } => write!(f, "Coordinate {b} is too large"),
            Self::ExceedsVertexCount { b, n } => {
                write!(f, "b must be less than or equal to n={n}, got b={b}")
            }
            Self::ExceedsLength { length, l } => {
                write!(f, "Module length ({length}) cannot exceed l={l}")
            }
        }
    }
}

impl std::error::Error for ModuleError {}

impl Module {
    /// Construct $M(a, b)$ without reference to an ambient algebra.
    pub fn new(a: i64, b: i64) -> Result<Self, ModuleError> {
        Self::bounded(a, b, None, None)
    }

    /// Construct $M(a, b)$, additionally checking $b \leq n$ and $b - a + 1 \leq l$ for whichever
    /// of `n` and `l` is given.
    pub fn bounded(a: i64, b: i64, n: Option<u32>, l: Option<u32>) -> Result<Self, ModuleError> {
        if a <= 0 || b <= 0 {
            return Err(ModuleError::NonPositive { a, b });
        }
        if a > b {
            return Err(ModuleError::Reversed { a, b });
        }
        if let Some(n) = n {
            if b > i64::from(n) {
                return Err(ModuleError::ExceedsVertexCount { b, n });
            }
        }
        if let Some(l) = l {
            let length = b - a + 1;
            if length > i64::from(l) {
                return Err(ModuleError::ExceedsLength { length, l });
            }
        }
        // b fits implies a fits
        let b = u32::try_from(b).map_err(|_| ModuleError::TooLarge { b })?;
        Ok(Self { a: a as u32, b })
    }

    /// For coordinates that are valid by construction, such as the simples and projectives of an
    /// algebra.
    pub(crate) fn from_coordinates(a: u32, b: u32) -> Self {
        debug_assert!(0 < a && a <= b, "invalid module ({a}, {b})");
        Self { a, b }
    }

    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    /// The number of composition factors, $b - a + 1$.
    pub fn length(&self) -> u32 {
        self.b - self.a + 1
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.a, self.b)
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M({},{})", self.a, self.b)
    }
}

impl TryFrom<(i64, i64)> for Module {
    type Error = ModuleError;

    fn try_from((a, b): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<Module> for (u32, u32) {
    fn from(module: Module) -> Self {
        module.as_tuple()
    }
}
