use thiserror::Error;

/// Error raised while validating minterms or combining implicants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimekitError {
    /// The number of variables is out of range
    #[error("Invalid number of variables: {0} (expected 1 to {max})", max = crate::MAX_VARIABLES)]
    InvalidVariableCount(i64),

    /// The minterm can not be represented with the selected number of variables
    #[error("Invalid minterm {minterm} for {num_variables} variable(s)")]
    InvalidMinterm { minterm: i64, num_variables: usize },

    /// No minterm to reduce
    #[error("Must be at least one minterm")]
    EmptyMintermSet,

    /// The two implicants do not differ by exactly one variable
    #[error("Irreducible pair of implicants")]
    IncompatibleMerge,

    /// The pattern covers too many minterms to list them
    #[error("Too many free variables: {0} (at most {max})", max = crate::MAX_FREE_VARIABLES)]
    TooManyFreeVariables(usize),

    /// The textual input could not be read
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error in the textual description of minterms or implicants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not follow the expected syntax
    #[error("Could not parse '{0}' as {1}")]
    SimpleParseError(String, &'static str),

    /// A number does not fit in the integer range
    #[error("Number out of range: '{0}'")]
    NumberOutOfRange(String),
}
