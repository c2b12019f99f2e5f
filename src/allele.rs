//! Provides the symbolic allele representation used throughout the crate.
//!
//! An allele is an immutable value: a base sequence plus a flag marking it as
//! the reference or an alternate. Two alleles are equal when their content is
//! equal; a site carries exactly one reference allele and an ordered sequence
//! of distinct alternates.

use serde::Serialize;
use std::fmt;

/// Allele representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Allele {
    /// The base sequence of the allele
    seq: Vec<u8>,
    /// Whether this allele is the site's reference allele
    is_reference: bool,
}

impl Allele {
    /// Creates a reference allele with the given base sequence.
    pub fn reference(seq: impl Into<Vec<u8>>) -> Allele {
        Allele {
            seq: seq.into(),
            is_reference: true,
        }
    }

    /// Creates an alternate allele with the given base sequence.
    pub fn alternate(seq: impl Into<Vec<u8>>) -> Allele {
        Allele {
            seq: seq.into(),
            is_reference: false,
        }
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn is_reference(&self) -> bool {
        self.is_reference
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.seq))?;
        if self.is_reference {
            write!(f, "*")?;
        }
        Ok(())
    }
}
