use crate::*;

use delegate::delegate;
use std::slice::Iter;
use std::vec::IntoIter;

/// Boolean function represented as a list of prime implicants.
///
/// An implicant is "prime" if it can not be merged with any other implicant of the function.
/// This list is the outcome of a [Reducer]: it covers all minterms of the function but it is
/// not reduced to an essential cover, several primes may cover the same minterm.
///
/// The primes are listed in the order they were found: all single minterms which could not be
/// merged first, then the irreducible pairs, and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Primes {
    implicants: Vec<Implicant>,
}

impl Primes {
    delegate! {
        to self.implicants {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> Iter<'_, Implicant>;
            pub fn get(&self, idx: usize) -> Option<&Implicant>;
        }
    }

    pub(crate) fn push(&mut self, implicant: Implicant) {
        self.implicants.push(implicant);
    }

    pub fn as_slice(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Check if a minterm is covered by at least one prime implicant
    pub fn covers(&self, minterm: u64) -> bool {
        self.implicants.iter().any(|p| p.covers(minterm))
    }

    /// Find the prime implicants covering a given minterm
    pub fn covering(&self, minterm: u64) -> impl Iterator<Item = &Implicant> + '_ {
        self.implicants.iter().filter(move |p| p.covers(minterm))
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

impl IntoIterator for Primes {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.into_iter()
    }
}

impl From<Primes> for Vec<Implicant> {
    fn from(primes: Primes) -> Self {
        primes.implicants
    }
}

impl fmt::Display for Primes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.implicants {
            writeln!(f, "{} {}", p.expression_str(), p.minterm_str())?;
        }
        Ok(())
    }
}
