//! Per-site estimation flow: decompose, solve each sub-context, correct.

use crate::{
    afcalc::{AfCalcResult, BiallelicSolver},
    decompose::decompose,
    error::Result,
    priors::apply_multi_allelic_priors,
    site::VariantSite,
};
use rayon::prelude::*;

/// Estimates, for every alternate allele of one site, the corrected posterior
/// that the allele is segregating.
///
/// The site is decomposed into biallelic sub-contexts, each is handed to the
/// injected solver with the shared raw prior vector, and the independent
/// results are recombined under the theta-N correction. The returned list is
/// in rank order (strongest supported allele first).
pub fn estimate_site<S: BiallelicSolver>(
    site: &VariantSite,
    solver: &S,
    log10_priors: &[f64; 2],
) -> Result<Vec<AfCalcResult>> {
    let contexts = decompose(site)?;
    let mut results = Vec::with_capacity(contexts.len());
    for ctx in &contexts {
        results.push(solver.solve(ctx, log10_priors)?);
    }
    apply_multi_allelic_priors(results)
}

/// Runs [`estimate_site`] over many sites in parallel.
///
/// Sites share no state beyond the read-only prior vector, so this is
/// embarrassingly parallel. Failures stay per-site: the caller decides
/// whether to skip a failed site or abort the batch.
pub fn estimate_sites<S: BiallelicSolver + Sync>(
    sites: &[VariantSite],
    solver: &S,
    log10_priors: &[f64; 2],
) -> Vec<Result<Vec<AfCalcResult>>> {
    sites
        .par_iter()
        .map(|site| estimate_site(site, solver, log10_priors))
        .collect()
}
