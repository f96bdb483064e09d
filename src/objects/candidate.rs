//! # Candidate: the Base Momentum Record
//!
//! A reduced four-momentum in the storage widths of the tuple format:
//! four 32-bit floats. Foundation for every stored physics object.

use crate::objects::Resettable;

/// Reduced four-momentum of a stored physics object
///
/// Transient kinematics arrive as `f64`; the narrowing to `f32` on store is
/// deliberate lossy compaction, accepted by the format.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Candidate {
    /// Transverse momentum, GeV
    pt: f32,

    /// Pseudorapidity
    eta: f32,

    /// Azimuthal angle, radians
    phi: f32,

    /// Mass, GeV
    mass: f32,
}

impl Candidate {
    /// Create a candidate in the all-zero default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set transverse momentum (GeV)
    pub fn set_pt(&mut self, pt: f64) {
        self.pt = pt as f32;
    }

    /// Set pseudorapidity
    pub fn set_eta(&mut self, eta: f64) {
        self.eta = eta as f32;
    }

    /// Set azimuthal angle (radians)
    pub fn set_phi(&mut self, phi: f64) {
        self.phi = phi as f32;
    }

    /// Set mass (GeV)
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass as f32;
    }

    /// Returns transverse momentum (GeV)
    pub fn pt(&self) -> f32 {
        self.pt
    }

    /// Returns pseudorapidity
    pub fn eta(&self) -> f32 {
        self.eta
    }

    /// Returns azimuthal angle (radians)
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Returns mass (GeV)
    pub fn mass(&self) -> f32 {
        self.mass
    }
}

impl Resettable for Candidate {
    fn reset(&mut self) {
        *self = Self::default();
    }
}
