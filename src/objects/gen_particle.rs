//! # Generator-Level Particle Record
//!
//! A minimalistic description of a generator-level particle: momentum, a
//! saturating-encoded PDG code, and ancestry pointers into a trimmed
//! per-event particle list.
//!
//! The PDG code is stored in 16 bits, so the record suits fundamental
//! particles and cannot accommodate every possible hadron code. Mother
//! indices are positions in the caller-maintained trimmed collection, not in
//! the original unfiltered input; resolving them requires the same trimmed
//! list that produced them.

use crate::error::{PecError, Result};
use crate::objects::{Candidate, Resettable};

/// Largest PDG magnitude stored exactly; see [`GenParticle::set_pdg_id`]
const PDG_CLAMP: i64 = 30_000;

/// Compact record for a generator-level particle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GenParticle {
    /// Shared momentum block
    candidate: Candidate,

    /// PDG ID after saturation
    pdg_id: i16,

    /// Index of the first mother, offset by one; 0 means no mother
    first_mother: u8,

    /// Index of the last mother, offset by one; 0 means no mother.
    /// Non-zero only when the particle has more than one mother.
    last_mother: u8,
}

impl GenParticle {
    /// Create a particle in the all-zero default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set PDG ID
    ///
    /// Codes with magnitude up to 30000 are stored exactly. Larger codes are
    /// saturated: the magnitude is clamped to 30000 and the last three
    /// decimal digits of the original code are folded back on top, keeping
    /// the sign. Distinct large codes that share their low-order digits
    /// therefore stay distinguishable, while codes differing only above the
    /// clamp may collide. The saturation is irreversible; the accessor
    /// returns the stored code as is.
    pub fn set_pdg_id(&mut self, pdg_id: i32) {
        // Widened so the arithmetic holds for the whole i32 range
        let code = pdg_id as i64;
        if code.abs() > PDG_CLAMP {
            self.pdg_id = (code.signum() * PDG_CLAMP + code % 1000) as i16;
        } else {
            self.pdg_id = code as i16;
        }
    }

    /// Set index of the first mother
    ///
    /// Valid indices start from zero; -1 means the trimmed collection does
    /// not contain the mother. Indices below -1 are an invalid-argument
    /// error. Indices above 254 are not representable in the one-byte field
    /// and are truncated; staying in range is a caller precondition.
    pub fn set_first_mother_index(&mut self, index: i32) -> Result<()> {
        self.first_mother = Self::encode_mother_index(index, "set_first_mother_index")?;
        Ok(())
    }

    /// Set index of the last mother
    ///
    /// Same encoding and preconditions as [`Self::set_first_mother_index`].
    /// Meant to be set only when the particle has more than one mother;
    /// otherwise it stays at the "no mother" sentinel.
    pub fn set_last_mother_index(&mut self, index: i32) -> Result<()> {
        self.last_mother = Self::encode_mother_index(index, "set_last_mother_index")?;
        Ok(())
    }

    /// Returns the stored PDG ID
    pub fn pdg_id(&self) -> i32 {
        self.pdg_id as i32
    }

    /// Returns the index of the first mother, or -1 if there is none
    pub fn first_mother_index(&self) -> i32 {
        self.first_mother as i32 - 1
    }

    /// Returns the index of the last mother, or -1
    ///
    /// Differs from -1 only when the particle has more than one mother.
    pub fn last_mother_index(&self) -> i32 {
        self.last_mother as i32 - 1
    }

    /// Access the embedded momentum record
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Mutable access to the embedded momentum record
    pub fn candidate_mut(&mut self) -> &mut Candidate {
        &mut self.candidate
    }

    /// Shift an index into the offset-by-one stored form
    fn encode_mother_index(index: i32, operation: &str) -> Result<u8> {
        if index < -1 {
            return Err(PecError::invalid_argument(format!(
                "GenParticle::{operation}: illegal index {index}"
            )));
        }

        // Offset in i64 so the cast truncates instead of overflowing the add
        Ok((index as i64 + 1) as u8)
    }
}

impl Resettable for GenParticle {
    fn reset(&mut self) {
        self.candidate.reset();
        self.pdg_id = 0;
        self.first_mother = 0;
        self.last_mother = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_codes_stored_exactly() {
        let mut particle = GenParticle::new();

        for code in [0, 6, -6, 11, -11, 21, 2212, 25, 30_000, -30_000] {
            particle.set_pdg_id(code);
            assert_eq!(particle.pdg_id(), code);
        }
    }

    #[test]
    fn test_large_codes_saturated_with_folded_digits() {
        let mut particle = GenParticle::new();

        particle.set_pdg_id(123_456);
        assert_eq!(particle.pdg_id(), 30_456);

        particle.set_pdg_id(-123_456);
        assert_eq!(particle.pdg_id(), -30_456);

        // Just past the clamp
        particle.set_pdg_id(30_001);
        assert_eq!(particle.pdg_id(), 30_001);

        // Codes differing only above the clamp collide
        particle.set_pdg_id(1_000_022);
        let a = particle.pdg_id();
        particle.set_pdg_id(2_000_022);
        assert_eq!(particle.pdg_id(), a);

        // ... while differing low-order digits stay apart
        particle.set_pdg_id(1_000_021);
        assert_ne!(particle.pdg_id(), a);
    }

    #[test]
    fn test_pdg_extreme_codes_saturate() {
        let mut particle = GenParticle::new();

        // i32::MIN = -2147483648: clamp to -30000, fold the low digits (-648)
        particle.set_pdg_id(i32::MIN);
        assert_eq!(particle.pdg_id(), -30_648);

        particle.set_pdg_id(i32::MAX);
        assert_eq!(particle.pdg_id(), 30_647);
    }

    #[test]
    fn test_mother_index_round_trip() {
        let mut particle = GenParticle::new();

        for index in [-1, 0, 1, 7, 200, 254] {
            particle.set_first_mother_index(index).unwrap();
            assert_eq!(particle.first_mother_index(), index);
        }
    }

    #[test]
    fn test_mother_index_overflow_truncates() {
        let mut particle = GenParticle::new();

        // 255 encodes to 256, which truncates to the sentinel byte
        particle.set_first_mother_index(255).unwrap();
        assert_eq!(particle.first_mother_index(), -1);

        // Far out of range still truncates rather than panicking
        particle.set_first_mother_index(i32::MAX).unwrap();
        assert_eq!(particle.first_mother_index(), -1);

        particle.set_first_mother_index(300).unwrap();
        assert_eq!(particle.first_mother_index(), 44);
    }

    #[test]
    fn test_mother_index_below_minus_one_rejected() {
        let mut particle = GenParticle::new();
        particle.set_first_mother_index(5).unwrap();

        let err = particle.set_first_mother_index(-2);
        assert!(matches!(err, Err(PecError::InvalidArgument { .. })));
        assert_eq!(particle.first_mother_index(), 5);

        assert!(particle.set_last_mother_index(-2).is_err());
    }

    #[test]
    fn test_last_mother_defaults_to_none() {
        let mut particle = GenParticle::new();
        particle.set_pdg_id(6);
        particle.set_first_mother_index(2).unwrap();

        // Single mother: last index untouched
        assert_eq!(particle.last_mother_index(), -1);

        particle.set_last_mother_index(3).unwrap();
        assert_eq!(particle.last_mother_index(), 3);

        particle.reset();
        assert_eq!(particle.last_mother_index(), -1);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut particle = GenParticle::new();
        particle.candidate_mut().set_pt(172.5);
        particle.set_pdg_id(6);
        particle.set_first_mother_index(0).unwrap();
        particle.set_last_mother_index(1).unwrap();

        particle.reset();
        assert_eq!(particle, GenParticle::default());
        assert_eq!(particle.pdg_id(), 0);
        assert_eq!(particle.first_mother_index(), -1);
        assert_eq!(particle.last_mother_index(), -1);
    }
}
