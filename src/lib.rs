//! # PEC Tuples
//!
//! Compact, fixed-layout event tuples for physics objects.
//!
//! Per-event collections of particles, leptons, and jets are re-encoded into
//! small value records whose fields have declared narrow storage widths
//! (32-bit floats for kinematics, one byte for identifiers and mother
//! indices, 16 bits for PDG codes, one bool for a charge sign). The records
//! live in fixed-capacity arenas that are allocated once and reset in place
//! at the start of every event, so a high-volume event loop runs without
//! per-event heap traffic.
//!
//! ## Modules
//! - `config`: Storage configuration and validation
//! - `error`: Error types and result alias
//! - `objects`: The compact record types (Candidate family)
//! - `runner`: Event-loop driver and transient input types
//! - `stats`: Online means of event weights
//! - `store`: Arenas, column buffers, and the tuple-writer seam

pub mod config;
pub mod error;
pub mod objects;
pub mod runner;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{PecError, Result};
pub use objects::{Candidate, CandidateWithId, GenJet, GenParticle, Lepton, Resettable};
pub use runner::{EventData, EventLoop, EventSource, RunSummary};
pub use stats::WeightMeans;
pub use store::{
    CollectingWriter, EventId, EventTuple, GenJetColumns, GenParticleColumns, LeptonColumns,
    SlotArena, TupleWriter,
};
