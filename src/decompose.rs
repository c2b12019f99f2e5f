//! Decomposition of a multi-allelic site into ordered biallelic sub-contexts.

use crate::{
    allele::Allele,
    error::{AfCalcError, Result},
    projector::project,
    site::VariantSite,
};

/// A biallelic view of one site for a single alternate allele: the allele
/// pair plus, per sample, the projected 3-state likelihood vector ordered
/// (hom-ref, het, hom-alt). Transient; lives only for one solver call.
#[derive(Debug, Clone, PartialEq)]
pub struct BiallelicSubcontext {
    pub reference: Allele,
    pub alternate: Allele,
    /// 0-based position of the alternate in the site's alternate order.
    pub alt_index: usize,
    pub samples: Vec<(String, [i32; 3])>,
}

/// Splits a site with N alternate alleles into exactly N biallelic
/// sub-contexts, in the site's alternate-allele order.
///
/// Sub-context *i* pairs the reference with alternate *i* and projects every
/// sample's full likelihood vector for that allele. An already biallelic site
/// passes its likelihoods through unchanged; there is nothing to marginalize.
pub fn decompose(site: &VariantSite) -> Result<Vec<BiallelicSubcontext>> {
    let num_alternates = site.num_alternates();
    if num_alternates == 0 {
        return Err(AfCalcError::Contract(
            "cannot decompose a site without alternate alleles".into(),
        ));
    }

    let mut contexts = Vec::with_capacity(num_alternates);
    for (alt_index, alternate) in site.alternates().iter().enumerate() {
        let mut samples = Vec::with_capacity(site.samples().len());
        for entry in site.samples() {
            let pls = entry.pls.as_slice();
            let projected = if num_alternates == 1 {
                [pls[0], pls[1], pls[2]]
            } else {
                project(pls, alt_index + 1, num_alternates)?
            };
            samples.push((entry.sample.clone(), projected));
        }
        contexts.push(BiallelicSubcontext {
            reference: site.reference().clone(),
            alternate: alternate.clone(),
            alt_index,
            samples,
        });
    }

    log::debug!(
        "decomposed {}:{} into {} biallelic contexts",
        site.contig(),
        site.pos(),
        contexts.len()
    );
    Ok(contexts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SampleLikelihoods;

    fn make_site(alts: &[&[u8]], pls: Vec<i32>) -> VariantSite {
        VariantSite::new(
            "chr1",
            1,
            Allele::reference(b"A".to_vec()),
            alts.iter().map(|s| Allele::alternate(s.to_vec())).collect(),
            vec![SampleLikelihoods::new("s1", pls)],
        )
        .unwrap()
    }

    #[test]
    fn test_biallelic_passthrough() {
        let site = make_site(&[b"C"], vec![10, 0, 20]);
        let contexts = decompose(&site).unwrap();
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].samples[0].1, [10, 0, 20]);
        assert_eq!(contexts[0].alternate, Allele::alternate(b"C".to_vec()));
    }

    #[test]
    fn test_triallelic_order_and_values() {
        // alleles A,C,G with genotype order AA AC CC AG CG GG
        let site = make_site(&[b"C", b"G"], vec![0, 1, 2, 3, 4, 5]);
        let contexts = decompose(&site).unwrap();
        assert_eq!(contexts.len(), 2);

        assert_eq!(contexts[0].alternate, Allele::alternate(b"C".to_vec()));
        assert_eq!(contexts[0].alt_index, 0);
        assert_eq!(contexts[0].samples[0].1, [0, 2, 5]);

        assert_eq!(contexts[1].alternate, Allele::alternate(b"G".to_vec()));
        assert_eq!(contexts[1].alt_index, 1);
        assert_eq!(contexts[1].samples[0].1, [0, 4, 9]);
    }

    #[test]
    fn test_alternate_order_is_preserved() {
        // same site as above with alternates listed G,C; the likelihood
        // vector is permuted to keep each genotype's value (AA AG GG AC GC CC)
        let site = make_site(&[b"G", b"C"], vec![0, 4, 5, 1, 3, 2]);
        let contexts = decompose(&site).unwrap();

        assert_eq!(contexts[0].alternate, Allele::alternate(b"G".to_vec()));
        assert_eq!(contexts[0].samples[0].1, [0, 4, 9]);

        assert_eq!(contexts[1].alternate, Allele::alternate(b"C".to_vec()));
        assert_eq!(contexts[1].samples[0].1, [0, 1, 4]);
    }

    #[test]
    fn test_sample_order_is_preserved() {
        let site = VariantSite::new(
            "chr1",
            1,
            Allele::reference(b"A".to_vec()),
            vec![Allele::alternate(b"C".to_vec()), Allele::alternate(b"G".to_vec())],
            vec![
                SampleLikelihoods::new("s1", vec![0, 1, 2, 3, 4, 5]),
                SampleLikelihoods::new("s2", vec![0, 10, 20, 30, 40, 50]),
            ],
        )
        .unwrap();
        let contexts = decompose(&site).unwrap();
        assert_eq!(contexts[0].samples[0].0, "s1");
        assert_eq!(contexts[0].samples[1].0, "s2");
        assert_eq!(contexts[0].samples[1].1, [0, 10, 20]);
        assert_eq!(contexts[1].samples[1].1, [0, 30, 50]);
    }
}
