//! # Per-Event Storage
//!
//! Fixed-capacity arenas holding the compact records, column buffers that
//! expose them in structure-of-arrays form at the declared storage widths,
//! and the writer seam through which a tuple backend consumes them.
//!
//! Everything here is allocated once when the store is built and mutated in
//! place for the rest of the run.

pub mod arena;
pub mod columns;
pub mod writer;

// Re-export commonly used types
pub use arena::SlotArena;
pub use columns::{GenJetColumns, GenParticleColumns, LeptonColumns};
pub use writer::{CollectingWriter, EventId, EventTuple, StoredEvent, TupleWriter};
