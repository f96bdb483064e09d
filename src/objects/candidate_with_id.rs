//! # Candidate With Identifier
//!
//! A momentum record plus a one-byte identifier that distinguishes
//! sub-categories of an otherwise uniform collection (algorithm variant,
//! quality tier, packed selection bits).

use crate::objects::{Candidate, Resettable};

/// Candidate extended with a one-byte identifier field
///
/// The width of the identifier is a format contract; no range validation
/// happens at this layer. Callers packing flag bits are responsible for
/// staying within eight bits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CandidateWithId {
    /// Shared momentum block
    candidate: Candidate,

    /// Identifier / packed quality flags
    id: u8,
}

impl CandidateWithId {
    /// Create a record in the all-zero default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier
    pub fn set_id(&mut self, id: u8) {
        self.id = id;
    }

    /// Returns the identifier
    pub fn id(&self) -> u8 {
        self.id
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

impl Resettable for CandidateWithId {
    fn reset(&mut self) {
        self.candidate.reset();
        self.id = 0;
    }
}
