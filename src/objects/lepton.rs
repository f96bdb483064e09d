//! # Lepton Record
//!
//! A charged lepton: identified candidate plus charge sign, relative
//! isolation, and transverse impact parameter.

use crate::error::{PecError, Result};
use crate::objects::{Candidate, CandidateWithId, Resettable};

/// Compact record for a charged lepton
///
/// The charge is stored in a single bool: `true` for negative charge
/// (particle), `false` for positive charge (antiparticle). After a reset the
/// bool is `false`, so an unset charge reads back as +1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lepton {
    /// Shared momentum-plus-identifier block
    base: CandidateWithId,

    /// Electric charge; true for negative
    charge: bool,

    /// Relative isolation
    rel_iso: f32,

    /// Transverse impact parameter magnitude, cm
    db: f32,
}

impl Lepton {
    /// Create a lepton in the all-zero default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lepton charge
    ///
    /// Only the sign of the argument is kept. A zero argument is an
    /// invalid-argument error and leaves the stored charge unchanged.
    pub fn set_charge(&mut self, charge: i32) -> Result<()> {
        if charge == 0 {
            return Err(PecError::invalid_argument("Lepton::set_charge: zero charge"));
        }

        self.charge = charge < 0;
        Ok(())
    }

    /// Set relative isolation
    pub fn set_rel_iso(&mut self, rel_iso: f64) {
        self.rel_iso = rel_iso as f32;
    }

    /// Set transverse impact parameter (cm)
    ///
    /// The sign of the physical displacement is discarded: the magnitude is
    /// taken here, at encode time, so the stored field is already
    /// non-negative.
    pub fn set_db(&mut self, db: f64) {
        self.db = db.abs() as f32;
    }

    /// Returns the electric charge, exactly +1 or -1
    ///
    /// Before the first `set_charge` of an event the default is +1.
    pub fn charge(&self) -> i32 {
        if self.charge {
            -1
        } else {
            1
        }
    }

    /// Returns relative isolation
    pub fn rel_iso(&self) -> f32 {
        self.rel_iso
    }

    /// Returns the transverse impact parameter magnitude (cm), always >= 0
    pub fn db(&self) -> f32 {
        self.db
    }

    /// Set the identifier of the underlying record
    pub fn set_id(&mut self, id: u8) {
        self.base.set_id(id);
    }

    /// Returns the identifier of the underlying record
    pub fn id(&self) -> u8 {
        self.base.id()
    }

    /// Access the embedded momentum record
    pub fn candidate(&self) -> &Candidate {
        self.base.candidate()
    }

    /// Mutable access to the embedded momentum record
    pub fn candidate_mut(&mut self) -> &mut Candidate {
        self.base.candidate_mut()
    }
}

impl Resettable for Lepton {
    fn reset(&mut self) {
        self.base.reset();
        self.charge = false;
        self.rel_iso = 0.0;
        self.db = 0.0;
    }
}
