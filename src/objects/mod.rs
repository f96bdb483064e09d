//! # Compact Physics-Object Records
//!
//! The value types stored in the tuples. Each record maps wide-range
//! physical quantities onto fields with declared narrow storage widths:
//! 32-bit floats for kinematics, one byte for identifiers and mother
//! indices, 16 bits for PDG codes, a single bool for a charge sign. The
//! widths are part of the persisted format and must not change.
//!
//! ## Design: Composition Instead of Inheritance
//! The record family is a shallow, closed hierarchy
//! (Candidate -> CandidateWithId -> Lepton; Candidate -> GenParticle,
//! GenJet). Each variant embeds the shared momentum value directly; there
//! is no open-ended subtyping and no dynamic dispatch in the fill loop.
//!
//! ## Lifecycle
//! Every record is constructed once per arena slot and mutated in place for
//! the rest of the run. `Resettable::reset` restores the freshly-constructed
//! state and is called once per slot per event, before any setter.

pub mod candidate;
pub mod candidate_with_id;
pub mod gen_jet;
pub mod gen_particle;
pub mod lepton;

// Re-export commonly used types
pub use candidate::Candidate;
pub use candidate_with_id::CandidateWithId;
pub use gen_jet::GenJet;
pub use gen_particle::GenParticle;
pub use lepton::Lepton;

/// In-place reinitialization to the freshly-constructed state.
///
/// Calling `reset` any number of times must leave the record field-by-field
/// equal to `Default::default()`. The arena calls it at the start of every
/// event; skipping the call makes stale fields from the previous event
/// observable, which the records themselves do not detect.
pub trait Resettable {
    /// Restore the default-constructed state
    fn reset(&mut self);
}
