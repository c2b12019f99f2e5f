//! Error types shared across the crate.

use thiserror::Error;

/// Custom result type for error handling throughout the crate.
pub type Result<T> = std::result::Result<T, AfCalcError>;

/// Errors produced by the allele-frequency estimation core.
///
/// None of these are retryable: every operation in this crate is a pure,
/// deterministic function of its inputs, so a failure recurs identically on
/// retry and must be reported to the caller instead.
#[derive(Debug, Error)]
pub enum AfCalcError {
    /// Malformed input: wrong vector length, out-of-range allele index,
    /// empty alternate-allele list, or mismatched priors.
    #[error("contract violation: {0}")]
    Contract(String),

    /// A genotype class summed to a non-positive or non-finite likelihood.
    /// Cannot occur for a well-formed Phred vector; guarded so a NaN or
    /// negative infinity never leaks into downstream ranking.
    #[error("degenerate likelihoods: {0}")]
    DegenerateLikelihoods(String),

    /// Failure reported by the injected biallelic solver, propagated
    /// unchanged.
    #[error(transparent)]
    Solver(#[from] anyhow::Error),
}
