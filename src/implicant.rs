//! Partial product terms: a set of covered minterms with its ternary pattern.

use crate::*;

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Progress of an implicant in the tabulation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Status {
    /// Not (yet) merged into a larger implicant
    #[default]
    Active,
    /// Merged into a larger implicant, it will not be part of the prime implicants
    Superseded,
}

/// Product term covering a set of minterms.
///
/// The covered minterms are kept in the order they were accumulated: the original minterm
/// first, then the minterms brought by successive merges. The associated [Pattern] is derived
/// from this set: a variable is fixed if all covered minterms agree on it, and free otherwise.
///
/// ```
/// use primekit::Implicant;
/// # use primekit::PrimekitError;
/// # fn main() -> Result<(), PrimekitError> {
///
/// let a = Implicant::new(0, 4)?;
/// let b = Implicant::new(1, 4)?;
/// assert!(a.reduces_with(&b));
///
/// let merged = Implicant::merge(&a, &b)?;
/// assert_eq!(merged.expression_str(), "[ 0 0 0 - ]");
/// assert_eq!(merged.minterm_str(), "Min(0, 1)");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Implicant {
    minterms: Vec<u64>,
    pattern: Pattern,
    status: Status,
}

/// Check that a number of variables is in the supported range
pub(crate) fn check_variable_count(num_variables: i64) -> Result<usize, PrimekitError> {
    match usize::try_from(num_variables) {
        Ok(n) if (1..=MAX_VARIABLES).contains(&n) => Ok(n),
        _ => Err(PrimekitError::InvalidVariableCount(num_variables)),
    }
}

/// Check that a minterm can be represented with the given number of variables
pub(crate) fn check_minterm(minterm: i64, num_variables: usize) -> Result<u64, PrimekitError> {
    match u64::try_from(minterm) {
        Ok(m) if m >> num_variables == 0 => Ok(m),
        _ => Err(PrimekitError::InvalidMinterm {
            minterm,
            num_variables,
        }),
    }
}

impl Implicant {
    /// Create an implicant covering a single minterm.
    ///
    /// Fails if the number of variables is not in ```1..=MAX_VARIABLES``` or
    /// if the minterm is not in ```0..2^num_variables```.
    pub fn new(minterm: i64, num_variables: i64) -> Result<Self, PrimekitError> {
        let n = check_variable_count(num_variables)?;
        let m = check_minterm(minterm, n)?;
        Ok(Self::leaf(m, n))
    }

    /// Create a single-minterm implicant from already validated values
    pub(crate) fn leaf(minterm: u64, num_variables: usize) -> Self {
        Self {
            minterms: vec![minterm],
            pattern: Pattern::from_minterm(minterm, num_variables),
            status: Status::Active,
        }
    }

    /// Create the implicant covering all minterms of a pattern (in increasing order).
    ///
    /// Fails if the pattern has more than ```MAX_FREE_VARIABLES``` free variables.
    pub fn from_pattern(pattern: Pattern) -> Result<Self, PrimekitError> {
        let free = pattern.num_free();
        if free > MAX_FREE_VARIABLES {
            return Err(PrimekitError::TooManyFreeVariables(free));
        }
        Ok(Self {
            minterms: pattern.minterms().collect(),
            pattern,
            status: Status::Active,
        })
    }

    /// Merge two implicants differing by a single variable.
    ///
    /// The minterms of ```a``` are followed by the new minterms of ```b```, and the
    /// pattern is recomputed from the merged set.
    pub fn merge(a: &Self, b: &Self) -> Result<Self, PrimekitError> {
        if !a.reduces_with(b) {
            return Err(PrimekitError::IncompatibleMerge);
        }
        Ok(Self::merge_compatible(a, b))
    }

    /// Merge two implicants already known to be compatible
    pub(crate) fn merge_compatible(a: &Self, b: &Self) -> Self {
        let mut minterms = a.minterms.clone();
        for m in &b.minterms {
            if !minterms.contains(m) {
                minterms.push(*m);
            }
        }
        let pattern = Pattern::from_minterms(&minterms, a.num_variables());
        Self {
            minterms,
            pattern,
            status: Status::Active,
        }
    }

    /// Test if the two implicants can be merged.
    ///
    /// They must use the same number of variables, have close numbers of ones, and
    /// their patterns must differ at exactly one position. Identical implicants can not be merged.
    pub fn reduces_with(&self, other: &Self) -> bool {
        if self.num_variables() != other.num_variables() {
            return false;
        }
        if self.num_ones().abs_diff(other.num_ones()) > 1 {
            return false;
        }
        self.pattern.distance(&other.pattern) == 1
    }

    /// The covered minterms, in accumulation order
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// The ternary vector derived from the covered minterms
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Number of variables of the function
    pub fn num_variables(&self) -> usize {
        self.pattern.num_variables()
    }

    /// Number of covered minterms (always a power of two)
    pub fn size(&self) -> usize {
        self.minterms.len()
    }

    /// Number of variables fixed at 1
    pub fn num_ones(&self) -> usize {
        self.pattern.num_ones()
    }

    /// Value of the variable at a given position (most significant first)
    pub fn value(&self, idx: usize) -> Ternary {
        self.pattern.value(idx)
    }

    /// Iterate over the values of all variables (most significant first)
    pub fn values(&self) -> impl Iterator<Item = Ternary> + '_ {
        self.pattern.values()
    }

    /// Progress of this implicant in the tabulation
    pub fn status(&self) -> Status {
        self.status
    }

    /// Return whether this implicant was merged into a larger one
    pub fn is_reduced(&self) -> bool {
        self.status == Status::Superseded
    }

    /// Mark this implicant as merged. This can not be reverted.
    pub(crate) fn supersede(&mut self) {
        self.status = Status::Superseded;
    }

    /// Check if a minterm is covered by this implicant
    pub fn covers(&self, minterm: u64) -> bool {
        self.pattern.contains_minterm(minterm)
    }

    /// Test if all minterms of another implicant are covered by this one
    pub fn contains(&self, other: &Self) -> bool {
        self.pattern.contains(&other.pattern)
    }

    /// Canonical display of the pattern, for example ```"[ 0 0 0 - ]"```
    pub fn expression_str(&self) -> String {
        self.pattern.to_string()
    }

    /// Canonical list of covered minterms, for example ```"Min(0, 1)"```
    pub fn minterm_str(&self) -> String {
        format!("Min({})", self.minterms.iter().join(", "))
    }
}

impl FromStr for Implicant {
    type Err = PrimekitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pattern(s.parse()?)
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}
