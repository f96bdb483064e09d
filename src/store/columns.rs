//! # Columnar Output Buffers
//!
//! Structure-of-arrays views of the record arenas, refilled once per event.
//! Each column carries exactly the declared storage width of its field
//! (`f32`, `bool`, `u8`, `i16`), so a tuple backend can serialize the
//! vectors directly into its branches.
//!
//! All vectors are preallocated to the arena capacity; `fill_from` clears
//! and repushes without reallocating.

use crate::objects::{GenJet, GenParticle, Lepton};

/// Column buffers for the lepton collection
#[derive(Clone, Debug, Default)]
pub struct LeptonColumns {
    /// Transverse momentum, GeV
    pub pt: Vec<f32>,

    /// Pseudorapidity
    pub eta: Vec<f32>,

    /// Azimuthal angle, radians
    pub phi: Vec<f32>,

    /// Charge sign; true for negative
    pub charge: Vec<bool>,

    /// Relative isolation
    pub rel_iso: Vec<f32>,

    /// Transverse impact parameter magnitude, cm
    pub db: Vec<f32>,

    /// Identifier / packed quality flags
    pub id: Vec<u8>,
}

impl LeptonColumns {
    /// Preallocate columns for the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pt: Vec::with_capacity(capacity),
            eta: Vec::with_capacity(capacity),
            phi: Vec::with_capacity(capacity),
            charge: Vec::with_capacity(capacity),
            rel_iso: Vec::with_capacity(capacity),
            db: Vec::with_capacity(capacity),
            id: Vec::with_capacity(capacity),
        }
    }

    /// Refill the columns from the records of the current event
    pub fn fill_from(&mut self, leptons: &[Lepton]) {
        self.clear();
        for lepton in leptons {
            let candidate = lepton.candidate();
            self.pt.push(candidate.pt());
            self.eta.push(candidate.eta());
            self.phi.push(candidate.phi());
            self.charge.push(lepton.charge() < 0);
            self.rel_iso.push(lepton.rel_iso());
            self.db.push(lepton.db());
            self.id.push(lepton.id());
        }
    }

    /// Number of stored leptons
    pub fn len(&self) -> usize {
        self.pt.len()
    }

    /// True if the event stored no leptons
    pub fn is_empty(&self) -> bool {
        self.pt.is_empty()
    }

    fn clear(&mut self) {
        self.pt.clear();
        self.eta.clear();
        self.phi.clear();
        self.charge.clear();
        self.rel_iso.clear();
        self.db.clear();
        self.id.clear();
    }
}

/// Column buffers for the generator-particle collection
#[derive(Clone, Debug, Default)]
pub struct GenParticleColumns {
    /// Transverse momentum, GeV
    pub pt: Vec<f32>,

    /// Pseudorapidity
    pub eta: Vec<f32>,

    /// Azimuthal angle, radians
    pub phi: Vec<f32>,

    /// Mass, GeV
    pub mass: Vec<f32>,

    /// Saturated PDG ID
    pub pdg_id: Vec<i16>,

    /// Offset-by-one index of the first mother; 0 means none
    pub first_mother: Vec<u8>,

    /// Offset-by-one index of the last mother; 0 means none
    pub last_mother: Vec<u8>,
}

impl GenParticleColumns {
    /// Preallocate columns for the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pt: Vec::with_capacity(capacity),
            eta: Vec::with_capacity(capacity),
            phi: Vec::with_capacity(capacity),
            mass: Vec::with_capacity(capacity),
            pdg_id: Vec::with_capacity(capacity),
            first_mother: Vec::with_capacity(capacity),
            last_mother: Vec::with_capacity(capacity),
        }
    }

    /// Refill the columns from the records of the current event
    pub fn fill_from(&mut self, particles: &[GenParticle]) {
        self.clear();
        for particle in particles {
            let candidate = particle.candidate();
            self.pt.push(candidate.pt());
            self.eta.push(candidate.eta());
            self.phi.push(candidate.phi());
            self.mass.push(candidate.mass());
            self.pdg_id.push(particle.pdg_id() as i16);
            self.first_mother
                .push((particle.first_mother_index() + 1) as u8);
            self.last_mother
                .push((particle.last_mother_index() + 1) as u8);
        }
    }

    /// Number of stored particles
    pub fn len(&self) -> usize {
        self.pt.len()
    }

    /// True if the event stored no particles
    pub fn is_empty(&self) -> bool {
        self.pt.is_empty()
    }

    fn clear(&mut self) {
        self.pt.clear();
        self.eta.clear();
        self.phi.clear();
        self.mass.clear();
        self.pdg_id.clear();
        self.first_mother.clear();
        self.last_mother.clear();
    }
}

/// Column buffers for the generator-jet collection
#[derive(Clone, Debug, Default)]
pub struct GenJetColumns {
    /// Transverse momentum, GeV
    pub pt: Vec<f32>,

    /// Pseudorapidity
    pub eta: Vec<f32>,

    /// Azimuthal angle, radians
    pub phi: Vec<f32>,

    /// Mass, GeV
    pub mass: Vec<f32>,

    /// Number of b quarks near the jet
    pub b_multiplicity: Vec<u8>,

    /// Number of c quarks near the jet
    pub c_multiplicity: Vec<u8>,
}

impl GenJetColumns {
    /// Preallocate columns for the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pt: Vec::with_capacity(capacity),
            eta: Vec::with_capacity(capacity),
            phi: Vec::with_capacity(capacity),
            mass: Vec::with_capacity(capacity),
            b_multiplicity: Vec::with_capacity(capacity),
            c_multiplicity: Vec::with_capacity(capacity),
        }
    }

    /// Refill the columns from the records of the current event
    pub fn fill_from(&mut self, jets: &[GenJet]) {
        self.clear();
        for jet in jets {
            let candidate = jet.candidate();
            self.pt.push(candidate.pt());
            self.eta.push(candidate.eta());
            self.phi.push(candidate.phi());
            self.mass.push(candidate.mass());
            self.b_multiplicity.push(jet.b_multiplicity());
            self.c_multiplicity.push(jet.c_multiplicity());
        }
    }

    /// Number of stored jets
    pub fn len(&self) -> usize {
        self.pt.len()
    }

    /// True if the event stored no jets
    pub fn is_empty(&self) -> bool {
        self.pt.is_empty()
    }

    fn clear(&mut self) {
        self.pt.clear();
        self.eta.clear();
        self.phi.clear();
        self.mass.clear();
        self.b_multiplicity.clear();
        self.c_multiplicity.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lepton_columns_roundtrip() {
        let mut lepton = Lepton::new();
        lepton.candidate_mut().set_pt(41.5);
        lepton.candidate_mut().set_eta(-0.9);
        lepton.set_charge(-1).unwrap();
        lepton.set_rel_iso(0.06);
        lepton.set_id(2);

        let mut columns = LeptonColumns::with_capacity(4);
        columns.fill_from(&[lepton]);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns.pt[0], 41.5);
        assert_eq!(columns.eta[0], -0.9);
        assert!(columns.charge[0]);
        assert_eq!(columns.rel_iso[0], 0.06);
        assert_eq!(columns.id[0], 2);
    }

    #[test]
    fn test_gen_particle_columns_keep_offset_encoding() {
        let mut particle = GenParticle::new();
        particle.set_pdg_id(6);
        particle.set_first_mother_index(0).unwrap();

        let mut no_mother = GenParticle::new();
        no_mother.set_pdg_id(-6);

        let mut columns = GenParticleColumns::with_capacity(4);
        columns.fill_from(&[particle, no_mother]);

        // Stored form is logical index + 1 with 0 as the sentinel
        assert_eq!(columns.first_mother[0], 1);
        assert_eq!(columns.last_mother[0], 0);
        assert_eq!(columns.first_mother[1], 0);
        assert_eq!(columns.pdg_id, vec![6, -6]);
    }

    #[test]
    fn test_refill_replaces_previous_event() {
        let mut jet = GenJet::new();
        jet.candidate_mut().set_pt(100.0);
        jet.set_b_multiplicity(1);

        let mut columns = GenJetColumns::with_capacity(4);
        columns.fill_from(&[jet, jet]);
        assert_eq!(columns.len(), 2);

        columns.fill_from(&[]);
        assert!(columns.is_empty());
    }
}
