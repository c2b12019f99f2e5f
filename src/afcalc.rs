//! Allele-frequency calculation results and the injected solver boundary.
//!
//! The exact biallelic solver is an external capability: the core hands it a
//! [`BiallelicSubcontext`] and a shared raw prior vector and receives back an
//! [`AfCalcResult`]. Modeling the solver as a trait keeps the projector,
//! decomposer, and prior corrector testable against canned outputs.

use crate::{allele::Allele, decompose::BiallelicSubcontext, error::Result, math::normalize_log10};
use serde::Serialize;

/// Index of the AF=0 state in the two-state vectors below.
pub const AF_EQ0: usize = 0;
/// Index of the AF>0 state.
pub const AF_GT0: usize = 1;

/// The outcome of solving one biallelic sub-context: log10 likelihoods,
/// priors, and posteriors of the site being monomorphic (AF=0) versus
/// segregating (AF>0) for the tested alternate allele. Immutable once
/// produced; the theta-N corrector derives new results rather than mutating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AfCalcResult {
    alleles: (Allele, Allele),
    log10_likelihoods: [f64; 2],
    log10_priors: [f64; 2],
    log10_posteriors: [f64; 2],
}

impl AfCalcResult {
    /// Creates a result from likelihoods and priors; the posteriors are the
    /// normalized product, so their linear probabilities sum to one.
    pub fn new(
        alleles: (Allele, Allele),
        log10_likelihoods: [f64; 2],
        log10_priors: [f64; 2],
    ) -> AfCalcResult {
        let log10_posteriors = normalize_log10([
            log10_likelihoods[AF_EQ0] + log10_priors[AF_EQ0],
            log10_likelihoods[AF_GT0] + log10_priors[AF_GT0],
        ]);
        AfCalcResult {
            alleles,
            log10_likelihoods,
            log10_priors,
            log10_posteriors,
        }
    }

    /// The (reference, alternate) pair this result was computed for.
    pub fn alleles(&self) -> &(Allele, Allele) {
        &self.alleles
    }

    pub fn log10_likelihoods(&self) -> [f64; 2] {
        self.log10_likelihoods
    }

    pub fn log10_priors(&self) -> [f64; 2] {
        self.log10_priors
    }

    pub fn log10_prior_of_af_eq0(&self) -> f64 {
        self.log10_priors[AF_EQ0]
    }

    pub fn log10_prior_of_af_gt0(&self) -> f64 {
        self.log10_priors[AF_GT0]
    }

    pub fn log10_posterior_of_af_eq0(&self) -> f64 {
        self.log10_posteriors[AF_EQ0]
    }

    pub fn log10_posterior_of_af_gt0(&self) -> f64 {
        self.log10_posteriors[AF_GT0]
    }

    /// Derives a new result with the same likelihoods under different priors,
    /// recomputing the posteriors.
    pub fn with_priors(&self, log10_priors: [f64; 2]) -> AfCalcResult {
        AfCalcResult::new(self.alleles.clone(), self.log10_likelihoods, log10_priors)
    }

    /// Whether the posterior support for AF>0 clears the given log10
    /// threshold.
    pub fn is_polymorphic(&self, log10_min_posterior: f64) -> bool {
        self.log10_posterior_of_af_gt0() > log10_min_posterior
    }
}

/// The external exact biallelic allele-frequency solver.
///
/// Implementations are expected to be deterministic and side-effect free;
/// errors are propagated to the caller unchanged, never retried.
pub trait BiallelicSolver {
    fn solve(&self, ctx: &BiallelicSubcontext, log10_priors: &[f64; 2]) -> Result<AfCalcResult>;
}
