//! Variant-site data model: per-sample genotype likelihoods over the full
//! allele set of one chromosomal position.
//!
//! Genotype likelihood vectors follow the canonical VCF ordering for unordered
//! diploid genotypes: genotype (i,j) with i <= j over alleles indexed 0..K
//! sits at index `j*(j+1)/2 + i`, so a triallelic site enumerates
//! AA, AB, BB, AC, BC, CC. Allele 0 is always the reference.

use crate::{
    allele::Allele,
    error::{AfCalcError, Result},
};
use serde::Serialize;
use std::collections::HashSet;

/// Diploid ploidy is the only supported setting; the 3-class projection and
/// the pair-index formula below are diploid formulas.
pub const PLOIDY: usize = 2;

/// Returns the number of unordered diploid genotypes over `num_alleles`
/// alleles.
pub fn num_genotypes(num_alleles: usize) -> usize {
    num_alleles * (num_alleles + 1) / 2
}

/// Returns the canonical index of the unordered genotype (i,j), i <= j.
pub fn genotype_index(i: usize, j: usize) -> usize {
    debug_assert!(i <= j);
    j * (j + 1) / 2 + i
}

/// An ordered vector of Phred-scaled genotype likelihoods in canonical order.
///
/// Values are non-negative; 0 marks the best-supported genotype. Vectors are
/// not required to be normalized (minimum 0) on input; projection enforces
/// that on its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenotypeLikelihoods(pub Vec<i32>);

impl GenotypeLikelihoods {
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i32>> for GenotypeLikelihoods {
    fn from(pls: Vec<i32>) -> Self {
        GenotypeLikelihoods(pls)
    }
}

/// One sample's likelihoods over the site's full allele set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleLikelihoods {
    pub sample: String,
    pub pls: GenotypeLikelihoods,
}

impl SampleLikelihoods {
    pub fn new(sample: impl Into<String>, pls: impl Into<GenotypeLikelihoods>) -> Self {
        SampleLikelihoods {
            sample: sample.into(),
            pls: pls.into(),
        }
    }
}

/// A single multi-allelic variant site: position, reference allele, ordered
/// alternate alleles, and per-sample genotype likelihoods over the full
/// allele set. Immutable after construction; nothing is carried across sites.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantSite {
    contig: String,
    pos: u32,
    reference: Allele,
    alternates: Vec<Allele>,
    samples: Vec<SampleLikelihoods>,
}

impl VariantSite {
    /// Builds a site after validating the allele set and every sample's
    /// vector length against it. Alternate order is significant and is
    /// preserved by all downstream operations.
    pub fn new(
        contig: impl Into<String>,
        pos: u32,
        reference: Allele,
        alternates: Vec<Allele>,
        samples: Vec<SampleLikelihoods>,
    ) -> Result<VariantSite> {
        if !reference.is_reference() {
            return Err(AfCalcError::Contract(
                "site reference allele is not flagged as reference".into(),
            ));
        }
        if alternates.is_empty() {
            return Err(AfCalcError::Contract(
                "site must carry at least one alternate allele".into(),
            ));
        }
        if alternates.iter().any(Allele::is_reference) {
            return Err(AfCalcError::Contract(
                "alternate allele list contains a reference allele".into(),
            ));
        }
        let distinct: HashSet<&Allele> = alternates.iter().collect();
        if distinct.len() != alternates.len() {
            return Err(AfCalcError::Contract(
                "alternate alleles must be distinct".into(),
            ));
        }

        let expected_len = num_genotypes(alternates.len() + 1);
        for entry in &samples {
            if entry.pls.len() != expected_len {
                return Err(AfCalcError::Contract(format!(
                    "sample {} has {} PL values, expected {} for {} alleles",
                    entry.sample,
                    entry.pls.len(),
                    expected_len,
                    alternates.len() + 1
                )));
            }
        }

        Ok(VariantSite {
            contig: contig.into(),
            pos,
            reference,
            alternates,
            samples,
        })
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn reference(&self) -> &Allele {
        &self.reference
    }

    pub fn alternates(&self) -> &[Allele] {
        &self.alternates
    }

    pub fn samples(&self) -> &[SampleLikelihoods] {
        &self.samples
    }

    pub fn num_alternates(&self) -> usize {
        self.alternates.len()
    }

    pub fn num_alleles(&self) -> usize {
        self.alternates.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triallelic_site() -> VariantSite {
        VariantSite::new(
            "chr1",
            100,
            Allele::reference(b"A".to_vec()),
            vec![Allele::alternate(b"C".to_vec()), Allele::alternate(b"G".to_vec())],
            vec![SampleLikelihoods::new("s1", vec![0, 1, 2, 3, 4, 5])],
        )
        .unwrap()
    }

    #[test]
    fn test_num_genotypes() {
        assert_eq!(num_genotypes(2), 3);
        assert_eq!(num_genotypes(3), 6);
        assert_eq!(num_genotypes(4), 10);
    }

    #[test]
    fn test_genotype_index_canonical_order() {
        // AA, AB, BB, AC, BC, CC
        assert_eq!(genotype_index(0, 0), 0);
        assert_eq!(genotype_index(0, 1), 1);
        assert_eq!(genotype_index(1, 1), 2);
        assert_eq!(genotype_index(0, 2), 3);
        assert_eq!(genotype_index(1, 2), 4);
        assert_eq!(genotype_index(2, 2), 5);
    }

    #[test]
    fn test_valid_site() {
        let site = triallelic_site();
        assert_eq!(site.num_alternates(), 2);
        assert_eq!(site.num_alleles(), 3);
        assert_eq!(site.samples().len(), 1);
    }

    #[test]
    fn test_rejects_empty_alternates() {
        let err = VariantSite::new(
            "chr1",
            100,
            Allele::reference(b"A".to_vec()),
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, AfCalcError::Contract(_)));
    }

    #[test]
    fn test_rejects_duplicate_alternates() {
        let err = VariantSite::new(
            "chr1",
            100,
            Allele::reference(b"A".to_vec()),
            vec![Allele::alternate(b"C".to_vec()), Allele::alternate(b"C".to_vec())],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, AfCalcError::Contract(_)));
    }

    #[test]
    fn test_rejects_wrong_pl_length() {
        let err = VariantSite::new(
            "chr1",
            100,
            Allele::reference(b"A".to_vec()),
            vec![Allele::alternate(b"C".to_vec()), Allele::alternate(b"G".to_vec())],
            vec![SampleLikelihoods::new("s1", vec![0, 1, 2])],
        )
        .unwrap_err();
        assert!(matches!(err, AfCalcError::Contract(_)));
    }

    #[test]
    fn test_rejects_reference_in_alternates() {
        let err = VariantSite::new(
            "chr1",
            100,
            Allele::reference(b"A".to_vec()),
            vec![Allele::reference(b"C".to_vec())],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, AfCalcError::Contract(_)));
    }
}
