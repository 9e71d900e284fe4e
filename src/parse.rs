//! Read minterm lists from text

use crate::*;

use pest::{iterators, Parser};
use std::str::FromStr;

#[derive(Parser)]
#[grammar_inline = r####"
problem  = _{ SOI ~ (count ~ ":")? ~ minterms ~ EOI }
count    = @{ number }
minterms =  { list | bare }
list     = _{ (^"min" | ^"m") ~ "(" ~ bare? ~ ")" }
bare     = _{ number ~ (sep? ~ number)* }
sep      = _{ "," | ";" }
number   = @{ "-"? ~ ASCII_DIGIT+ }

WHITESPACE = _{ " " | "\t" | "\r" | "\n" }
"####]
struct MintermParser;

/// A set of minterms with an optional number of variables, read from text.
///
/// The minterms can be listed as ```Min(0, 1, 5)```, ```m(0,1,5)``` or as bare numbers
/// separated by spaces, commas or semicolons. The list can be prefixed by the number of
/// variables: ```"4: Min(0, 1, 5)"```. Without prefix, the number of variables is the
/// smallest one which can represent all minterms.
///
/// ```
/// use primekit::Problem;
/// # use primekit::PrimekitError;
/// # fn main() -> Result<(), PrimekitError> {
///
/// let problem: Problem = "4: Min(0, 1)".parse()?;
/// let primes = problem.solve()?;
/// assert_eq!(primes.iter().next().map(|p| p.expression_str()).as_deref(), Some("[ 0 0 0 - ]"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    pub num_variables: Option<i64>,
    pub minterms: Vec<i64>,
}

impl Problem {
    /// Explicit number of variables, or the number of bits of the largest minterm
    pub fn variable_count(&self) -> i64 {
        if let Some(n) = self.num_variables {
            return n;
        }
        let largest = self.minterms.iter().copied().filter(|m| *m > 0).max();
        match largest {
            None => 1,
            Some(m) => 64 - m.leading_zeros() as i64,
        }
    }

    /// Prepare the reduction of this set of minterms
    pub fn reducer(&self, config: ReductionConfig) -> Result<Reducer, PrimekitError> {
        Reducer::with_config(
            self.minterms.iter().copied(),
            self.variable_count(),
            config,
        )
    }

    /// Compute the prime implicants with the default configuration
    pub fn solve(&self) -> Result<Primes, PrimekitError> {
        Ok(self.reducer(DEFAULT_REDUCTION)?.into_primes())
    }
}

fn parse_number(pair: iterators::Pair<Rule>) -> Result<i64, ParseError> {
    let s = pair.as_str();
    s.parse()
        .map_err(|_| ParseError::NumberOutOfRange(s.to_string()))
}

impl FromStr for Problem {
    type Err = PrimekitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = MintermParser::parse(Rule::problem, s)
            .map_err(|_| ParseError::SimpleParseError(s.to_string(), "Minterm list"))?;

        let mut problem = Problem::default();
        for pair in parsed {
            match pair.as_rule() {
                Rule::count => problem.num_variables = Some(parse_number(pair)?),
                Rule::minterms => {
                    for number in pair.into_inner() {
                        problem.minterms.push(parse_number(number)?);
                    }
                }
                // Other rules are hidden or mark the end of input
                _ => (),
            }
        }
        Ok(problem)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parse_lists() -> Result<(), PrimekitError> {
        let p: Problem = "Min(0, 1, 5)".parse()?;
        assert_eq!(p.num_variables, None);
        assert_eq!(p.minterms, vec![0, 1, 5]);
        assert_eq!(p.variable_count(), 3);

        let p: Problem = "4: m(0,1;5)".parse()?;
        assert_eq!(p.num_variables, Some(4));
        assert_eq!(p.minterms, vec![0, 1, 5]);

        let p: Problem = " 3 8\n12 ".parse()?;
        assert_eq!(p.minterms, vec![3, 8, 12]);
        assert_eq!(p.variable_count(), 4);

        let p: Problem = "Min(0)".parse()?;
        assert_eq!(p.variable_count(), 1);

        let p: Problem = "2: Min()".parse()?;
        assert!(p.minterms.is_empty());
        Ok(())
    }

    #[test]
    fn invalid_text() {
        assert!(matches!(
            "Min(0, a)".parse::<Problem>(),
            Err(PrimekitError::Parse(ParseError::SimpleParseError(_, _)))
        ));
        assert!(matches!(
            "".parse::<Problem>(),
            Err(PrimekitError::Parse(_))
        ));
        assert_eq!(
            "Min(99999999999999999999)".parse::<Problem>(),
            Err(PrimekitError::Parse(ParseError::NumberOutOfRange(
                "99999999999999999999".to_string()
            )))
        );
    }

    #[test]
    fn validation_errors() -> Result<(), PrimekitError> {
        let p: Problem = "3: Min(1, 33)".parse()?;
        assert_eq!(
            p.solve(),
            Err(PrimekitError::InvalidMinterm {
                minterm: 33,
                num_variables: 3
            })
        );

        let p: Problem = "-1: Min(0)".parse()?;
        assert_eq!(p.solve(), Err(PrimekitError::InvalidVariableCount(-1)));

        let p: Problem = "Min(-4)".parse()?;
        assert!(matches!(
            p.solve(),
            Err(PrimekitError::InvalidMinterm { minterm: -4, .. })
        ));

        let p: Problem = "4: Min()".parse()?;
        assert_eq!(p.solve(), Err(PrimekitError::EmptyMintermSet));
        Ok(())
    }
}
