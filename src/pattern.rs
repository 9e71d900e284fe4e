use crate::*;

use bit_set::BitSet;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Value of a single variable in a [Pattern].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Ternary {
    /// The variable is fixed at 0 (negated literal)
    Zero,
    /// The variable is fixed at 1 (positive literal)
    One,
    /// The variable was eliminated: the covered minterms disagree on it
    Free,
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ternary::Zero => write!(f, "0"),
            Ternary::One => write!(f, "1"),
            Ternary::Free => write!(f, "-"),
        }
    }
}

/// A ternary vector describing a subcube of the Boolean space over a fixed number of variables.
///
/// It is represented as a pair of bit-sets storing the positions fixed at 1 and at 0,
/// other positions are implicitly free. Positions are ordered with the most significant
/// variable first: position ```i``` corresponds to bit ```(n-1-i)``` of a minterm.
///
/// Patterns are displayed and parsed in the form ```"[ 0 1 - ]"```. When parsing,
/// brackets and spaces are optional and ```x``` or ```X``` are accepted for free positions.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    num_variables: usize,
    pub(crate) positive: BitSet,
    pub(crate) negative: BitSet,
}

/// Test if the variable at a given position is active in a minterm
fn position_bit(minterm: u64, num_variables: usize, idx: usize) -> bool {
    (minterm >> (num_variables - 1 - idx)) & 1 == 1
}

impl Pattern {
    /// Create a pattern where all variables are free
    pub fn free(num_variables: usize) -> Self {
        Self {
            num_variables,
            positive: BitSet::with_capacity(num_variables),
            negative: BitSet::with_capacity(num_variables),
        }
    }

    /// Create a pattern restricted to a single minterm
    pub(crate) fn from_minterm(minterm: u64, num_variables: usize) -> Self {
        let mut p = Self::free(num_variables);
        for idx in 0..num_variables {
            if position_bit(minterm, num_variables, idx) {
                p.positive.insert(idx);
            } else {
                p.negative.insert(idx);
            }
        }
        p
    }

    /// Create the smallest pattern containing all the given minterms.
    ///
    /// A position is fixed if all minterms agree on the corresponding bit, and free otherwise.
    /// The agreement is checked across the whole set, not only on consecutive minterms.
    pub(crate) fn from_minterms(minterms: &[u64], num_variables: usize) -> Self {
        let mut p = Self::free(num_variables);
        let (first, rest) = match minterms.split_first() {
            None => return p,
            Some(split) => split,
        };
        let (all, any) = rest
            .iter()
            .fold((*first, *first), |(all, any), m| (all & m, any | m));
        for idx in 0..num_variables {
            if position_bit(all, num_variables, idx) {
                p.positive.insert(idx);
            } else if !position_bit(any, num_variables, idx) {
                p.negative.insert(idx);
            }
        }
        p
    }

    /// Number of variables (positions) in this pattern
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Get the value at a given position
    pub fn value(&self, idx: usize) -> Ternary {
        if self.positive.contains(idx) {
            Ternary::One
        } else if self.negative.contains(idx) {
            Ternary::Zero
        } else {
            Ternary::Free
        }
    }

    /// Iterate over all values, most significant variable first
    pub fn values(&self) -> impl Iterator<Item = Ternary> + '_ {
        (0..self.num_variables).map(move |idx| self.value(idx))
    }

    /// Fix or free the variable at a given position.
    pub(crate) fn set(&mut self, idx: usize, value: Ternary) {
        self.positive.remove(idx);
        self.negative.remove(idx);
        match value {
            Ternary::One => {
                self.positive.insert(idx);
            }
            Ternary::Zero => {
                self.negative.insert(idx);
            }
            Ternary::Free => (),
        }
    }

    /// Number of positions fixed at 1
    pub fn num_ones(&self) -> usize {
        self.positive.len()
    }

    /// Number of free positions
    pub fn num_free(&self) -> usize {
        self.num_variables - self.positive.len() - self.negative.len()
    }

    /// Count the positions where the two patterns hold different values.
    ///
    /// A free position facing a fixed one counts as a difference.
    pub fn distance(&self, other: &Self) -> usize {
        let mut diff = self.positive.clone();
        diff.symmetric_difference_with(&other.positive);
        let mut neg = self.negative.clone();
        neg.symmetric_difference_with(&other.negative);
        diff.union_with(&neg);
        diff.len()
    }

    /// Check if a minterm is contained in this pattern
    pub fn contains_minterm(&self, minterm: u64) -> bool {
        if self.num_variables < 64 && minterm >> self.num_variables != 0 {
            return false;
        }
        self.positive
            .iter()
            .all(|idx| position_bit(minterm, self.num_variables, idx))
            && self
                .negative
                .iter()
                .all(|idx| !position_bit(minterm, self.num_variables, idx))
    }

    /// Test if this pattern contains the given pattern.
    pub fn contains(&self, p: &Pattern) -> bool {
        self.num_variables == p.num_variables
            && p.positive.is_superset(&self.positive)
            && p.negative.is_superset(&self.negative)
    }

    /// Enumerate all minterms of this pattern in increasing order
    pub fn minterms(&self) -> impl Iterator<Item = u64> + '_ {
        let n = self.num_variables;
        // bit weights of the free positions, least significant first
        let free: Vec<usize> = (0..n)
            .rev()
            .filter(|idx| self.value(*idx) == Ternary::Free)
            .map(|idx| n - 1 - idx)
            .collect();
        let base = self
            .positive
            .iter()
            .fold(0u64, |acc, idx| acc | 1 << (n - 1 - idx));

        (0..1u64 << free.len()).map(move |k| {
            free.iter()
                .enumerate()
                .filter(|(j, _)| (k >> j) & 1 == 1)
                .fold(base, |acc, (_, b)| acc | 1 << b)
        })
    }
}

impl FromStr for Pattern {
    type Err = PrimekitError;

    fn from_str(descr: &str) -> Result<Pattern, PrimekitError> {
        let mut values = vec![];
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '[' | ']' => (), // skip spacing and brackets
                '-' | 'x' | 'X' => values.push(Ternary::Free),
                '0' => values.push(Ternary::Zero),
                '1' => values.push(Ternary::One),
                _ => {
                    return Err(ParseError::SimpleParseError(descr.to_string(), "Pattern").into())
                }
            };
        }
        if values.is_empty() || values.len() > MAX_VARIABLES {
            return Err(PrimekitError::InvalidVariableCount(values.len() as i64));
        }

        let mut p = Pattern::free(values.len());
        for (idx, v) in values.into_iter().enumerate() {
            p.set(idx, v);
        }
        Ok(p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ {} ]", self.values().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::*;

    #[test]
    fn construct_and_display() -> Result<(), PrimekitError> {
        let p = Pattern::from_minterm(0, 4);
        assert_eq!(format!("{}", p), "[ 0 0 0 0 ]");
        assert_eq!(p.num_free(), 0);

        let p = Pattern::from_minterm(6, 4);
        assert_eq!(format!("{}", p), "[ 0 1 1 0 ]");
        assert_eq!(p.num_ones(), 2);

        let p: Pattern = "[ 1 - 0 ]".parse()?;
        assert_eq!(p.value(0), Ternary::One);
        assert_eq!(p.value(1), Ternary::Free);
        assert_eq!(p.value(2), Ternary::Zero);
        assert_eq!(format!("{}", p), "[ 1 - 0 ]");

        let p2: Pattern = "1x0".parse()?;
        assert_eq!(p, p2);

        Ok(())
    }

    #[test]
    fn invalid_strings() {
        assert!(matches!(
            "[ 0 2 ]".parse::<Pattern>(),
            Err(PrimekitError::Parse(_))
        ));
        assert_eq!(
            "[ ]".parse::<Pattern>(),
            Err(PrimekitError::InvalidVariableCount(0))
        );
    }

    #[test]
    fn agreement() {
        // 1 and 2 disagree on both low bits, even if 0 and 1 only disagree on one
        let p = Pattern::from_minterms(&[0, 1, 2], 3);
        assert_eq!(format!("{}", p), "[ 0 - - ]");

        let p = Pattern::from_minterms(&[5, 7], 3);
        assert_eq!(format!("{}", p), "[ 1 - 1 ]");

        let p = Pattern::from_minterms(&[], 2);
        assert_eq!(p, Pattern::free(2));
    }

    #[test]
    fn distance() -> Result<(), PrimekitError> {
        let p: Pattern = "00-1".parse()?;
        assert_eq!(p.distance(&"00-1".parse()?), 0);
        assert_eq!(p.distance(&"0011".parse()?), 1);
        assert_eq!(p.distance(&"10-1".parse()?), 1);
        assert_eq!(p.distance(&"1--0".parse()?), 3);
        Ok(())
    }

    #[test]
    fn contained() -> Result<(), PrimekitError> {
        let p: Pattern = "0--1".parse()?;
        let t: Pattern = "0-01".parse()?;
        assert!(p.contains(&t));
        assert!(!t.contains(&p));
        assert!(p.contains(&p));

        assert!(p.contains_minterm(0b0101));
        assert!(!p.contains_minterm(0b0100));
        assert!(!p.contains_minterm(0b10001));
        Ok(())
    }

    #[test]
    fn expand() -> Result<(), PrimekitError> {
        let p: Pattern = "-1-0".parse()?;
        let minterms: Vec<u64> = p.minterms().collect();
        assert_eq!(minterms, vec![4, 6, 12, 14]);

        let p = Pattern::from_minterm(9, 4);
        assert_eq!(p.minterms().collect::<Vec<_>>(), vec![9]);
        Ok(())
    }
}
