//! # Tuple-Writer Seam
//!
//! The outbound boundary of the encoding layer. Once an event's arenas are
//! filled and its columns extracted, the driver hands a borrowed
//! [`EventTuple`] to a [`TupleWriter`]; what the writer does with it (ROOT
//! branches, Parquet, test collection) is outside this crate's scope.

use tracing::debug;

use crate::error::Result;
use crate::store::{GenJetColumns, GenParticleColumns, LeptonColumns};

/// Identifier of a single event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    /// Run number
    pub run: u64,

    /// Luminosity section
    pub lumi: u64,

    /// Event number within the run
    pub event: u64,
}

impl EventId {
    pub fn new(run: u64, lumi: u64, event: u64) -> Self {
        Self { run, lumi, event }
    }
}

/// Borrowed view of one fully-encoded event
#[derive(Clone, Copy, Debug)]
pub struct EventTuple<'a> {
    /// Event identifier block
    pub id: EventId,

    /// Nominal event weight
    pub weight: f64,

    /// Lepton columns
    pub leptons: &'a LeptonColumns,

    /// Generator-particle columns; `None` when the collection is disabled
    pub gen_particles: Option<&'a GenParticleColumns>,

    /// Generator-jet columns; `None` when the collection is disabled
    pub gen_jets: Option<&'a GenJetColumns>,
}

/// Backend that consumes encoded events
///
/// Called exactly once per event, after all setters for that event have
/// completed and before the next `begin_event`. The borrowed columns are
/// only valid for the duration of the call; a persistent backend must copy
/// what it keeps.
pub trait TupleWriter {
    /// Consume one encoded event
    fn write_event(&mut self, event: &EventTuple<'_>) -> Result<()>;
}

/// In-memory writer that copies every event it sees
///
/// Used in tests and by embedders that post-process whole runs in memory.
#[derive(Debug, Default)]
pub struct CollectingWriter {
    events: Vec<StoredEvent>,
}

/// Owned copy of one event kept by [`CollectingWriter`]
#[derive(Clone, Debug)]
pub struct StoredEvent {
    pub id: EventId,
    pub weight: f64,
    pub leptons: LeptonColumns,
    pub gen_particles: Option<GenParticleColumns>,
    pub gen_jets: Option<GenJetColumns>,
}

impl CollectingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events collected so far
    pub fn events(&self) -> &[StoredEvent] {
        &self.events
    }

    /// Number of events collected so far
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no event has been collected
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TupleWriter for CollectingWriter {
    fn write_event(&mut self, event: &EventTuple<'_>) -> Result<()> {
        debug!(
            run = event.id.run,
            event = event.id.event,
            n_leptons = event.leptons.len(),
            "collecting event"
        );

        self.events.push(StoredEvent {
            id: event.id,
            weight: event.weight,
            leptons: event.leptons.clone(),
            gen_particles: event.gen_particles.cloned(),
            gen_jets: event.gen_jets.cloned(),
        });
        Ok(())
    }
}
