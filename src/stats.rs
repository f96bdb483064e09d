//! # Event-Weight Statistics
//!
//! Running means of the nominal event weight and any number of named
//! alternative weights (systematic variations), accumulated with the online
//! update `mean += (w - mean) / (n + 1)`. The accumulator is sized lazily
//! from the first event it sees, since the number of alternative weights is
//! only known once the run starts.

use std::io::Write;

use crate::error::{PecError, Result};

/// Online means of event weights
#[derive(Clone, Debug, Default)]
pub struct WeightMeans {
    /// Weight labels; entry 0 is the nominal weight
    labels: Vec<String>,

    /// Running means, parallel to `labels`
    means: Vec<f64>,

    /// Number of events processed
    n_events: u64,
}

impl WeightMeans {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the weights of one event
    ///
    /// The first call fixes the set of alternative weights, labels
    /// included; later events must supply the same number of them and are
    /// folded in by position, with their labels ignored.
    pub fn update(&mut self, nominal: f64, alt_weights: &[(String, f64)]) -> Result<()> {
        if self.n_events == 0 {
            self.labels.reserve(1 + alt_weights.len());
            self.means.reserve(1 + alt_weights.len());

            self.labels.push("nominal".to_string());
            self.means.push(0.0);
            for (label, _) in alt_weights {
                self.labels.push(label.clone());
                self.means.push(0.0);
            }
        } else if alt_weights.len() + 1 != self.means.len() {
            return Err(PecError::invalid_argument(format!(
                "WeightMeans::update: expected {} alternative weights, got {}",
                self.means.len() - 1,
                alt_weights.len()
            )));
        }

        let n = self.n_events as f64;
        self.means[0] += (nominal - self.means[0]) / (n + 1.0);
        for (i, (_, weight)) in alt_weights.iter().enumerate() {
            self.means[i + 1] += (weight - self.means[i + 1]) / (n + 1.0);
        }

        self.n_events += 1;
        Ok(())
    }

    /// Number of events accumulated
    pub fn n_events(&self) -> u64 {
        self.n_events
    }

    /// Mean of the nominal weight, or `None` before the first event
    pub fn nominal_mean(&self) -> Option<f64> {
        (self.n_events > 0).then(|| self.means[0])
    }

    /// Labels and means of the alternative weights
    pub fn alt_means(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.means.iter())
            .skip(1)
            .map(|(label, &mean)| (label.as_str(), mean))
    }

    /// Print a text report of all accumulated means
    pub fn report(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Mean values of event weights:")?;
        writeln!(out, " index   ID   mean")?;
        writeln!(out)?;

        if self.n_events == 0 {
            writeln!(out, " (no events processed)")?;
            return Ok(());
        }

        writeln!(out, "   -   nominal   {:.10}", self.means[0])?;
        writeln!(out)?;
        for (i, (label, mean)) in self.alt_means().enumerate() {
            writeln!(out, " {:>3}   {}   {:.10}", i, label, mean)?;
        }

        Ok(())
    }
}
