//! Shared biallelic prior construction and the theta-N multi-allelic prior
//! correction.
//!
//! Each sub-context of a decomposed site is solved against the same raw
//! biallelic prior, as if its alternate were the only one. That overstates
//! how likely it is that several alternates segregate at one site, so the
//! corrector re-ranks the independent results by posterior support and
//! raises the non-reference prior of the rank-r result to the power r+1:
//! the strongest allele keeps the biallelic prior, and every further allele
//! pays multiplicatively for being an additional segregating allele.

use crate::{
    afcalc::AfCalcResult,
    error::{AfCalcError, Result},
    math::log10_one_minus_pow10,
};
use itertools::Itertools;
use std::cmp::Ordering;

/// Tolerance for the shared-prior precondition check; original priors are
/// copied around, not recomputed, so only representation noise is allowed.
const PRIOR_EPSILON: f64 = 1e-10;

/// Builds the shared raw log10 prior vector `[P(AF=0), P(AF>0)]` from the
/// probability that the site is monomorphic.
pub fn biallelic_priors(p_ref: f64) -> Result<[f64; 2]> {
    if !(p_ref > 0.0 && p_ref < 1.0) {
        return Err(AfCalcError::Contract(format!(
            "reference prior must lie in (0, 1), got {}",
            p_ref
        )));
    }
    Ok([p_ref.log10(), (1.0 - p_ref).log10()])
}

/// Applies the theta-N prior correction to independently solved sub-context
/// results.
///
/// Results are ranked by descending log10 posterior of AF>0; the entry at
/// rank r (0-based) is rebuilt with `log10 prior(AF>0)` scaled by r+1 and
/// `prior(AF=0)` set to its complement, keeping the linear priors summing to
/// one. Likelihoods are untouched, posteriors are recomputed, and the list
/// comes back in rank order. All inputs must carry the same original prior
/// vector.
pub fn apply_multi_allelic_priors(results: Vec<AfCalcResult>) -> Result<Vec<AfCalcResult>> {
    let shared_priors = match results.first() {
        Some(first) => first.log10_priors(),
        None => {
            return Err(AfCalcError::Contract(
                "no sub-context results to correct".into(),
            ))
        }
    };
    if !(shared_priors[1] < 0.0) {
        return Err(AfCalcError::Contract(format!(
            "shared log10 prior of AF>0 must be strictly negative, got {}",
            shared_priors[1]
        )));
    }
    for result in &results {
        let priors = result.log10_priors();
        if (priors[0] - shared_priors[0]).abs() > PRIOR_EPSILON
            || (priors[1] - shared_priors[1]).abs() > PRIOR_EPSILON
        {
            return Err(AfCalcError::Contract(format!(
                "sub-context for {} was solved with priors {:?}, expected shared {:?}",
                result.alleles().1,
                priors,
                shared_priors
            )));
        }
    }

    Ok(results
        .into_iter()
        .sorted_by(|a, b| {
            b.log10_posterior_of_af_gt0()
                .partial_cmp(&a.log10_posterior_of_af_gt0())
                .unwrap_or(Ordering::Equal)
        })
        .enumerate()
        .map(|(rank, result)| {
            let log10_prior_gt0 = (rank as f64 + 1.0) * result.log10_prior_of_af_gt0();
            let log10_prior_eq0 = log10_one_minus_pow10(log10_prior_gt0);
            result.with_priors([log10_prior_eq0, log10_prior_gt0])
        })
        .collect())
}
