//! Projection of a multi-allelic genotype-likelihood vector onto a biallelic
//! 3-state vector for one chosen alternate allele.
//!
//! Every unordered diploid genotype over the full allele set carries 0, 1, or
//! 2 copies of the focus allele, irrespective of which other allele fills the
//! remaining slot. Projection marginalizes in linear space over each of those
//! three classes, converts the class sums back to the Phred scale, and
//! renormalizes so the best class sits at exactly 0.

use crate::{
    error::{AfCalcError, Result},
    math::{linear_to_phred, phred_to_linear},
    site::{genotype_index, num_genotypes},
};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Genotype indices of the full vector, partitioned by the number of focus
/// allele copies (0, 1, or 2) the genotype carries.
#[derive(Debug)]
struct ClassTable {
    by_count: [Vec<usize>; 3],
}

impl ClassTable {
    fn new(num_alternates: usize, focus_allele: usize) -> ClassTable {
        let num_alleles = num_alternates + 1;
        let mut by_count: [Vec<usize>; 3] = Default::default();
        for j in 0..num_alleles {
            for i in 0..=j {
                let copies = usize::from(i == focus_allele) + usize::from(j == focus_allele);
                by_count[copies].push(genotype_index(i, j));
            }
        }
        ClassTable { by_count }
    }
}

// Tables depend only on (num_alternates, focus_allele); build each once and
// share it across calls and threads.
static CLASS_TABLES: Lazy<Mutex<HashMap<(usize, usize), Arc<ClassTable>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn class_table(num_alternates: usize, focus_allele: usize) -> Arc<ClassTable> {
    let mut tables = CLASS_TABLES.lock().unwrap_or_else(|e| e.into_inner());
    Arc::clone(
        tables
            .entry((num_alternates, focus_allele))
            .or_insert_with(|| Arc::new(ClassTable::new(num_alternates, focus_allele))),
    )
}

/// Projects a full genotype-likelihood vector onto the biallelic 3-vector
/// (hom-ref, het-focus, hom-focus) for one alternate allele.
///
/// # Arguments
///
/// * `pls` - Phred-scaled likelihoods over all genotypes of the full allele
///   set, in canonical order; length must be `num_genotypes(num_alternates + 1)`.
/// * `focus_allele` - 1-based index of the alternate allele being tested
///   against the reference; must lie in `[1, num_alternates]`.
/// * `num_alternates` - The number of alternate alleles at the site.
///
/// # Returns
///
/// The projected Phred vector, renormalized so its minimum is exactly 0 and
/// rounded to integers.
pub fn project(pls: &[i32], focus_allele: usize, num_alternates: usize) -> Result<[i32; 3]> {
    if num_alternates == 0 {
        return Err(AfCalcError::Contract(
            "projection requires at least one alternate allele".into(),
        ));
    }
    if focus_allele < 1 || focus_allele > num_alternates {
        return Err(AfCalcError::Contract(format!(
            "focus allele index {} out of range [1, {}]",
            focus_allele, num_alternates
        )));
    }
    let expected_len = num_genotypes(num_alternates + 1);
    if pls.len() != expected_len {
        return Err(AfCalcError::Contract(format!(
            "PL vector has {} values, expected {} for {} alleles",
            pls.len(),
            expected_len,
            num_alternates + 1
        )));
    }

    let table = class_table(num_alternates, focus_allele);
    let mut raw = [0f64; 3];
    for (copies, members) in table.by_count.iter().enumerate() {
        let class_sum: f64 = members.iter().map(|&idx| phred_to_linear(pls[idx])).sum();
        if !class_sum.is_finite() || class_sum <= 0.0 {
            return Err(AfCalcError::DegenerateLikelihoods(format!(
                "class with {} focus copies summed to {}",
                copies, class_sum
            )));
        }
        raw[copies] = linear_to_phred(class_sum);
    }

    let best = raw.iter().copied().fold(f64::INFINITY, f64::min);
    Ok([
        (raw[0] - best).round() as i32,
        (raw[1] - best).round() as i32,
        (raw[2] - best).round() as i32,
    ])
}
