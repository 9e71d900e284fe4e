//! Settings of the tabulation

/// Control how merged implicants are collected during a reduction.
///
/// The same implicant can emerge from several pairs of smaller implicants
/// (```[ 0 0 - - ]``` is obtained from ```Min(0, 1) + Min(2, 3)``` and from ```Min(0, 2) + Min(1, 3)```).
/// By default every compatible pair is merged into its own implicant, so the list of
/// prime implicants may contain repeated patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReductionConfig {
    /// Keep a single implicant for each distinct pattern of a generation.
    ///
    /// When disabled, every compatible pair yields its own merged implicant and the
    /// resulting list of prime implicants may contain repeated patterns.
    pub deduplicate: bool,
}

/// Merge every compatible pair once, repeated patterns are kept
pub static ALL_MERGE_PATHS: ReductionConfig = ReductionConfig { deduplicate: false };

/// Keep the first implicant found for each pattern of a generation
pub static DISTINCT_PATTERNS: ReductionConfig = ReductionConfig { deduplicate: true };

pub static DEFAULT_REDUCTION: ReductionConfig = ReductionConfig { deduplicate: false };

impl Default for ReductionConfig {
    fn default() -> Self {
        DEFAULT_REDUCTION
    }
}
