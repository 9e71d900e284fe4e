//! Compute the prime implicants of Boolean functions given as sums of minterms.
//!
//! A *minterm* is an integer in ```0..2^n``` identifying a row of the truth table of a Boolean function
//! over ```n``` variables: its binary digits give the value of each variable, the most significant bit
//! corresponding to the first variable. A function is described by the list of minterms for which it is true.
//!
//! An [Implicant] is a product term of the function, represented by the set of minterms it covers
//! and by a ternary [Pattern] where each variable is fixed at ```0```, fixed at ```1``` or free (```-```).
//!
//! ```
//! use primekit::Implicant;
//! # use primekit::PrimekitError;
//! # fn main() -> Result<(), PrimekitError> {
//!
//! // Create implicants covering single minterms over 4 variables
//! let a = Implicant::new(0, 4)?;
//! let b = Implicant::new(15, 4)?;
//! assert_eq!(a.expression_str(), "[ 0 0 0 0 ]");
//! assert_eq!(b.minterm_str(), "Min(15)");
//!
//! // These two implicants differ on all variables and can not be merged
//! assert!(!a.reduces_with(&b));
//! # Ok(())
//! # }
//! ```
//!
//! # Prime implicants
//!
//! Two implicants which differ on a single variable can be merged into a larger implicant
//! where this variable is free. An implicant which can not be merged with any other is *prime*.
//! The [Reducer] implements the tabulation method: implicants are grouped by number of ones and
//! the adjacent groups are combined until no merge is possible.
//!
//! ```
//! use primekit::Reducer;
//! # use primekit::PrimekitError;
//! # fn main() -> Result<(), PrimekitError> {
//!
//! let mut reducer = Reducer::new([0, 1, 5], 3)?;
//! let primes = reducer.reduce();
//!
//! assert_eq!(primes.len(), 2);
//! for p in primes {
//!     println!("{} {}", p.expression_str(), p.minterm_str());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The list of [prime implicants](Primes) covers the function but is not an essential cover:
//! selecting a minimal subset of primes is left to the caller. The same prime implicant can be
//! reached through several merge paths and is then listed once per path, unless the reduction
//! uses the [DISTINCT_PATTERNS] configuration.
//!
//! # Reading minterms from text
//!
//! A [Problem] can be parsed from the usual notations for sums of minterms,
//! with an optional prefix giving the number of variables.
//!
//! ```
//! use primekit::Problem;
//! # use primekit::PrimekitError;
//! # fn main() -> Result<(), PrimekitError> {
//!
//! let problem: Problem = "4: Min(4, 8, 10, 11, 12, 15)".parse()?;
//! let primes = problem.solve()?;
//! assert_eq!(primes.len(), 5);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod implicant;
mod parse;
mod pattern;
mod primes;
mod reducer;

use std::fmt;

#[macro_use]
extern crate pest_derive;

/// Largest supported number of variables: all minterms fit in a ```u64```.
pub const MAX_VARIABLES: usize = 63;

/// Largest number of free variables in a pattern whose minterms are listed in an [Implicant].
pub const MAX_FREE_VARIABLES: usize = 20;

// Export public structures and API
pub use config::{ReductionConfig, ALL_MERGE_PATHS, DEFAULT_REDUCTION, DISTINCT_PATTERNS};
pub use error::{ParseError, PrimekitError};
pub use implicant::{Implicant, Status};
pub use parse::Problem;
pub use pattern::{Pattern, Ternary};
pub use primes::Primes;
pub use reducer::{prime_implicants, Reducer};
