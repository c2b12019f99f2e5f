//! Independent-alleles allele-frequency estimation for multi-allelic sites.
//!
//! Exhaustively enumerating the joint allele-frequency space of a K-allele
//! site is combinatorially expensive. This crate instead splits such a site
//! into K-1 independent biallelic subproblems (each alternate versus the
//! reference), solves each with an externally supplied exact biallelic solver,
//! and recombines the results under a rank-dependent "theta-N" prior that
//! discounts each additional segregating allele.
//!
//! The core is three pure operations:
//! * [`projector::project`] marginalizes a multi-allelic genotype-likelihood
//!   vector onto a biallelic 3-vector for one alternate allele,
//! * [`decompose::decompose`] turns a [`site::VariantSite`] into an ordered
//!   list of biallelic sub-contexts,
//! * [`priors::apply_multi_allelic_priors`] re-ranks the independently solved
//!   results and rescales each one's non-reference prior by its rank.
//!
//! [`pipeline::estimate_site`] wires the three together around an injected
//! [`afcalc::BiallelicSolver`]. Everything is deterministic and stateless, so
//! distinct sites may be processed concurrently without locking;
//! [`pipeline::estimate_sites`] does exactly that.

pub mod afcalc;
pub mod allele;
pub mod decompose;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod priors;
pub mod projector;
pub mod site;

pub use afcalc::{AfCalcResult, BiallelicSolver};
pub use allele::Allele;
pub use decompose::{decompose, BiallelicSubcontext};
pub use error::{AfCalcError, Result};
pub use pipeline::{estimate_site, estimate_sites};
pub use priors::{apply_multi_allelic_priors, biallelic_priors};
pub use projector::project;
pub use site::{GenotypeLikelihoods, SampleLikelihoods, VariantSite};
