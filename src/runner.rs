//! # Event-Loop Driver
//!
//! Sequentially pulls transient, wide-range physics objects from an
//! [`EventSource`], encodes them into the compact records through the
//! validating setters, extracts the column buffers, and hands each event to
//! a [`TupleWriter`]. One event is fully processed before the next begins;
//! the arenas and columns are allocated once when the loop is built.

use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::objects::{GenJet, GenParticle, Lepton};
use crate::stats::WeightMeans;
use crate::store::{
    EventId, EventTuple, GenJetColumns, GenParticleColumns, LeptonColumns, SlotArena, TupleWriter,
};

/// Transient lepton as delivered by the surrounding framework
#[derive(Clone, Debug)]
pub struct LeptonInput {
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,

    /// Electric charge; must be non-zero
    pub charge: i32,

    pub rel_iso: f64,

    /// Signed transverse impact parameter, cm
    pub db: f64,

    /// Identifier / packed quality flags
    pub id: u8,
}

/// Transient generator-level particle
#[derive(Clone, Debug)]
pub struct GenParticleInput {
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    pub mass: f64,

    /// Full-range PDG ID; saturated on store
    pub pdg_id: i32,

    /// Index of the first mother in the trimmed collection, -1 for none
    pub first_mother_index: i32,

    /// Index of the last mother; -1 unless the particle has more than one
    pub last_mother_index: i32,
}

/// Transient generator-level jet
#[derive(Clone, Debug)]
pub struct GenJetInput {
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    pub mass: f64,
    pub b_multiplicity: u8,
    pub c_multiplicity: u8,
}

/// One event's worth of transient inputs
#[derive(Clone, Debug, Default)]
pub struct EventData {
    pub id: EventId,

    /// Nominal event weight
    pub weight: f64,

    /// Named alternative weights (systematic variations)
    pub alt_weights: Vec<(String, f64)>,

    pub leptons: Vec<LeptonInput>,
    pub gen_particles: Vec<GenParticleInput>,
    pub gen_jets: Vec<GenJetInput>,
}

/// Supplier of events to the loop
pub trait EventSource {
    /// Produce the next event, or `None` at the end of the run
    fn next_event(&mut self) -> Option<EventData>;
}

/// Summary of a completed run
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    /// Number of events processed
    pub n_events: u64,
}

/// The sequential event loop
///
/// Owns the arenas, the column buffers, and the weight accumulator for the
/// lifetime of a run. Not meant to be shared across threads; the tuple
/// format assumes a single sequential loop.
pub struct EventLoop {
    config: StoreConfig,

    leptons: SlotArena<Lepton>,
    gen_particles: SlotArena<GenParticle>,
    gen_jets: SlotArena<GenJet>,

    lepton_columns: LeptonColumns,
    gen_particle_columns: GenParticleColumns,
    gen_jet_columns: GenJetColumns,

    weight_means: WeightMeans,
}

impl EventLoop {
    /// Build the loop, validating the configuration and allocating every
    /// buffer the run will use
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            leptons: SlotArena::new("leptons", config.max_leptons),
            gen_particles: SlotArena::new("gen_particles", config.max_gen_particles),
            gen_jets: SlotArena::new("gen_jets", config.max_gen_jets),
            lepton_columns: LeptonColumns::with_capacity(config.max_leptons),
            gen_particle_columns: GenParticleColumns::with_capacity(config.max_gen_particles),
            gen_jet_columns: GenJetColumns::with_capacity(config.max_gen_jets),
            weight_means: WeightMeans::new(),
            config,
        })
    }

    /// Drain the source, encoding and writing every event
    pub fn run(
        &mut self,
        source: &mut impl EventSource,
        writer: &mut impl TupleWriter,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        while let Some(event) = source.next_event() {
            self.process_event(&event, writer)?;
            summary.n_events += 1;
        }

        info!(n_events = summary.n_events, "run complete");
        Ok(summary)
    }

    /// Encode and write a single event
    pub fn process_event(
        &mut self,
        event: &EventData,
        writer: &mut impl TupleWriter,
    ) -> Result<()> {
        debug!(
            run = event.id.run,
            event = event.id.event,
            n_leptons = event.leptons.len(),
            "processing event"
        );

        self.leptons.begin_event();
        self.gen_particles.begin_event();
        self.gen_jets.begin_event();

        for input in &event.leptons {
            let lepton = self.leptons.push()?;
            lepton.candidate_mut().set_pt(input.pt);
            lepton.candidate_mut().set_eta(input.eta);
            lepton.candidate_mut().set_phi(input.phi);
            lepton.set_charge(input.charge)?;
            lepton.set_rel_iso(input.rel_iso);
            lepton.set_db(input.db);
            lepton.set_id(input.id);
        }

        if self.config.store_gen_particles {
            for input in &event.gen_particles {
                let particle = self.gen_particles.push()?;
                particle.candidate_mut().set_pt(input.pt);
                particle.candidate_mut().set_eta(input.eta);
                particle.candidate_mut().set_phi(input.phi);
                particle.candidate_mut().set_mass(input.mass);
                particle.set_pdg_id(input.pdg_id);
                particle.set_first_mother_index(input.first_mother_index)?;
                particle.set_last_mother_index(input.last_mother_index)?;
            }
        }

        if self.config.store_gen_jets {
            for input in &event.gen_jets {
                let jet = self.gen_jets.push()?;
                jet.candidate_mut().set_pt(input.pt);
                jet.candidate_mut().set_eta(input.eta);
                jet.candidate_mut().set_phi(input.phi);
                jet.candidate_mut().set_mass(input.mass);
                jet.set_b_multiplicity(input.b_multiplicity);
                jet.set_c_multiplicity(input.c_multiplicity);
            }
        }

        self.lepton_columns.fill_from(self.leptons.filled());
        self.gen_particle_columns
            .fill_from(self.gen_particles.filled());
        self.gen_jet_columns.fill_from(self.gen_jets.filled());

        writer.write_event(&EventTuple {
            id: event.id,
            weight: event.weight,
            leptons: &self.lepton_columns,
            gen_particles: self
                .config
                .store_gen_particles
                .then_some(&self.gen_particle_columns),
            gen_jets: self.config.store_gen_jets.then_some(&self.gen_jet_columns),
        })?;

        if self.config.compute_mean_weights {
            self.weight_means.update(event.weight, &event.alt_weights)?;
        }

        Ok(())
    }

    /// Accumulated weight means for the run so far
    pub fn weight_means(&self) -> &WeightMeans {
        &self.weight_means
    }

    /// The validated configuration the loop was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CollectingWriter;

    fn muon(pt: f64, charge: i32) -> LeptonInput {
        LeptonInput {
            pt,
            eta: 0.4,
            phi: -1.2,
            charge,
            rel_iso: 0.05,
            db: -0.01,
            id: 1,
        }
    }

    struct VecSource(Vec<EventData>);

    impl EventSource for VecSource {
        fn next_event(&mut self) -> Option<EventData> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[test]
    fn test_run_drains_source() {
        let events = vec![
            EventData {
                id: EventId::new(1, 1, 1),
                weight: 1.0,
                leptons: vec![muon(25.0, -1)],
                ..Default::default()
            },
            EventData {
                id: EventId::new(1, 1, 2),
                weight: 0.5,
                ..Default::default()
            },
        ];

        let mut event_loop = EventLoop::new(StoreConfig::default()).unwrap();
        let mut writer = CollectingWriter::new();
        let summary = event_loop
            .run(&mut VecSource(events), &mut writer)
            .unwrap();

        assert_eq!(summary.n_events, 2);
        assert_eq!(writer.len(), 2);
        assert_eq!(writer.events()[0].leptons.len(), 1);
        assert!(writer.events()[1].leptons.is_empty());
        assert!((event_loop.weight_means().nominal_mean().unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_disabled_collections_not_written() {
        let config = StoreConfig {
            store_gen_particles: false,
            store_gen_jets: false,
            ..Default::default()
        };

        let event = EventData {
            gen_particles: vec![GenParticleInput {
                pt: 10.0,
                eta: 0.0,
                phi: 0.0,
                mass: 0.0,
                pdg_id: 21,
                first_mother_index: -1,
                last_mother_index: -1,
            }],
            ..Default::default()
        };

        let mut event_loop = EventLoop::new(config).unwrap();
        let mut writer = CollectingWriter::new();
        event_loop.process_event(&event, &mut writer).unwrap();

        let stored = &writer.events()[0];
        assert!(stored.gen_particles.is_none());
        assert!(stored.gen_jets.is_none());
    }

    #[test]
    fn test_invalid_lepton_charge_surfaces() {
        let event = EventData {
            leptons: vec![muon(25.0, 0)],
            ..Default::default()
        };

        let mut event_loop = EventLoop::new(StoreConfig::default()).unwrap();
        let mut writer = CollectingWriter::new();
        assert!(event_loop.process_event(&event, &mut writer).is_err());
        assert!(writer.is_empty());
    }
}
