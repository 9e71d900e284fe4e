//! Tabulation of implicants until only prime implicants remain.

use crate::implicant::{check_minterm, check_variable_count};
use crate::*;

use itertools::Itertools;
use log::{debug, trace};

/// Drive the pairwise merge of implicants, bucketed by their number of ones.
///
/// Two implicants can only be merged if their numbers of ones differ by at most one,
/// so each combine pass only compares the implicants of adjacent buckets. The implicants
/// created during a pass form the next generation: they are combined in the next pass,
/// while the implicants of the current generation which were not merged are prime.
///
/// ```
/// use primekit::{Reducer, DISTINCT_PATTERNS};
/// # use primekit::PrimekitError;
/// # fn main() -> Result<(), PrimekitError> {
///
/// let mut reducer = Reducer::new([0, 1, 2, 3, 7], 3)?;
/// let primes = reducer.reduce();
///
/// // [ 0 - - ] is reached from two pairs and listed twice
/// assert_eq!(primes.len(), 3);
/// assert_eq!(primes.iter().next().map(|p| p.minterm_str()).as_deref(), Some("Min(3, 7)"));
///
/// let mut reducer = Reducer::with_config([0, 1, 2, 3, 7], 3, DISTINCT_PATTERNS)?;
/// assert_eq!(reducer.reduce().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Reducer {
    num_variables: usize,
    config: ReductionConfig,
    buckets: Vec<Vec<Implicant>>,
    primes: Primes,
    passes: usize,
}

impl Reducer {
    /// Prepare the reduction of a set of minterms with the default configuration.
    ///
    /// Repeated minterms are ignored. Fails if the set is empty, if the number of variables is
    /// out of range or if a minterm can not be represented with this number of variables.
    pub fn new<I>(minterms: I, num_variables: i64) -> Result<Self, PrimekitError>
    where
        I: IntoIterator<Item = i64>,
    {
        Self::with_config(minterms, num_variables, DEFAULT_REDUCTION)
    }

    pub fn with_config<I>(
        minterms: I,
        num_variables: i64,
        config: ReductionConfig,
    ) -> Result<Self, PrimekitError>
    where
        I: IntoIterator<Item = i64>,
    {
        let minterms: Vec<i64> = minterms.into_iter().unique().collect();
        if minterms.is_empty() {
            return Err(PrimekitError::EmptyMintermSet);
        }
        let n = check_variable_count(num_variables)?;

        let mut buckets = vec![Vec::new(); n + 1];
        for m in minterms {
            let implicant = Implicant::leaf(check_minterm(m, n)?, n);
            buckets[implicant.num_ones()].push(implicant);
        }

        Ok(Self {
            num_variables: n,
            config,
            buckets,
            primes: Primes::default(),
            passes: 0,
        })
    }

    /// Number of variables of all implicants
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Settings used to collect the merged implicants
    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Number of combine and sweep passes performed so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Return whether all implicants have been merged or moved to the list of primes
    pub fn is_reduced(&self) -> bool {
        self.buckets.iter().all(|b| b.is_empty())
    }

    /// Number of implicants waiting in the buckets
    pub fn pending(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// Run a single combine and sweep pass.
    ///
    /// Return false if there was nothing left to reduce.
    pub fn step(&mut self) -> bool {
        if self.is_reduced() {
            return false;
        }
        let next = self.combine();
        let current = std::mem::replace(&mut self.buckets, next);
        self.sweep(current);
        self.passes += 1;
        true
    }

    /// Run the tabulation to its fixed point and return the prime implicants.
    ///
    /// Calling it again on a finished reduction returns the same result.
    pub fn reduce(&mut self) -> &Primes {
        while self.step() {}
        &self.primes
    }

    /// Get the prime implicants found so far
    pub fn primes(&self) -> &Primes {
        &self.primes
    }

    /// Run the reduction if needed and give away the prime implicants
    pub fn into_primes(mut self) -> Primes {
        self.reduce();
        self.primes
    }

    /// Merge all compatible pairs of implicants from adjacent buckets.
    ///
    /// Both members of a merged pair are superseded, the merged implicants
    /// are collected in a new set of buckets.
    fn combine(&mut self) -> Vec<Vec<Implicant>> {
        debug!(
            "pass {}: bucket sizes {:?}",
            self.passes,
            self.buckets.iter().map(|b| b.len()).collect::<Vec<_>>()
        );

        let deduplicate = self.config.deduplicate;
        let mut next: Vec<Vec<Implicant>> = vec![Vec::new(); self.num_variables + 1];
        for j in 0..self.num_variables {
            let (low, high) = self.buckets.split_at_mut(j + 1);
            let (lower, upper) = (&mut low[j], &mut high[0]);
            for x in lower.iter_mut() {
                for y in upper.iter_mut() {
                    if !x.reduces_with(y) {
                        continue;
                    }
                    let merged = Implicant::merge_compatible(x, y);
                    x.supersede();
                    y.supersede();

                    let target = &mut next[merged.num_ones()];
                    if deduplicate && target.iter().any(|t| t.pattern() == merged.pattern()) {
                        trace!("skip {}: already found", merged.minterm_str());
                        continue;
                    }
                    trace!(
                        "{} + {} -> {}",
                        x.minterm_str(),
                        y.minterm_str(),
                        merged.expression_str()
                    );
                    target.push(merged);
                }
            }
        }
        next
    }

    /// Move the implicants of a finished generation which were never merged to the list of primes
    fn sweep(&mut self, generation: Vec<Vec<Implicant>>) {
        for implicant in generation.into_iter().flatten() {
            if !implicant.is_reduced() {
                trace!("prime {}", implicant.minterm_str());
                self.primes.push(implicant);
            }
        }
    }
}

/// Compute the prime implicants of a set of minterms with the default configuration.
///
/// ```
/// # use primekit::PrimekitError;
/// # fn main() -> Result<(), PrimekitError> {
/// let primes = primekit::prime_implicants([0, 1], 4)?;
/// assert_eq!(primes.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn prime_implicants<I>(minterms: I, num_variables: i64) -> Result<Primes, PrimekitError>
where
    I: IntoIterator<Item = i64>,
{
    Ok(Reducer::new(minterms, num_variables)?.into_primes())
}
