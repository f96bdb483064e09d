//! # Generator-Level Jet Record
//!
//! Four-momentum of a generator-level jet plus the number of b and c quarks
//! found near the jet axis, each counted in one byte.

use crate::objects::{Candidate, Resettable};

/// Compact record for a generator-level jet
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GenJet {
    /// Shared momentum block
    candidate: Candidate,

    /// Number of b quarks in a cone around the jet
    b_multiplicity: u8,

    /// Number of c quarks in a cone around the jet
    c_multiplicity: u8,
}

impl GenJet {
    /// Create a jet in the all-zero default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of nearby b quarks
    pub fn set_b_multiplicity(&mut self, multiplicity: u8) {
        self.b_multiplicity = multiplicity;
    }

    /// Set the number of nearby c quarks
    pub fn set_c_multiplicity(&mut self, multiplicity: u8) {
        self.c_multiplicity = multiplicity;
    }

    /// Returns the number of nearby b quarks
    pub fn b_multiplicity(&self) -> u8 {
        self.b_multiplicity
    }

    /// Returns the number of nearby c quarks
    pub fn c_multiplicity(&self) -> u8 {
        self.c_multiplicity
    }

    /// Access the embedded momentum record
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Mutable access to the embedded momentum record
    pub fn candidate_mut(&mut self) -> &mut Candidate {
        &mut self.candidate
    }
}

impl Resettable for GenJet {
    fn reset(&mut self) {
        self.candidate.reset();
        self.b_multiplicity = 0;
        self.c_multiplicity = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_default() {
        let mut jet = GenJet::new();
        jet.candidate_mut().set_pt(88.0);
        jet.candidate_mut().set_mass(12.0);
        jet.set_b_multiplicity(2);
        jet.set_c_multiplicity(1);

        jet.reset();
        assert_eq!(jet, GenJet::default());
        assert_eq!(jet.b_multiplicity(), 0);
        assert_eq!(jet.c_multiplicity(), 0);
    }
}
