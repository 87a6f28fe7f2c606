// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Batch stepping of independent simulations
//!
//! A single simulation has no internal concurrency: one tick is a fixed
//! 3x3 solve and a handful of multiplies. Parallelism pays off across
//! *instances*, as in a parameter sweep or a perturbation ensemble, where
//! every simulation owns its state exclusively and the sweep needs no
//! synchronization.
//!
//! With the `parallel` feature (on by default) [`Ensemble::advance_all`]
//! fans the tick out over Rayon's thread pool; without it the sweep runs
//! sequentially with identical semantics.

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::sim::Simulation;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A collection of independent simulations stepped in lockstep.
///
/// # Example
///
/// ```rust
/// use dipc_sim::{Ensemble, SimConfig};
///
/// let mut ensemble = Ensemble::from_config_with(4, SimConfig::damped(), |i, config| {
///     config.link1_angle = 0.001 * (i + 1) as f64;
/// })
/// .unwrap();
/// ensemble.advance_all().unwrap();
/// assert_eq!(ensemble.len(), 4);
/// ```
pub struct Ensemble {
    sims: Vec<Simulation>,
}

impl Ensemble {
    /// Build an ensemble from already-constructed simulations.
    pub fn new(sims: Vec<Simulation>) -> Self {
        Ensemble { sims }
    }

    /// Build `count` simulations from a base configuration, letting the
    /// closure perturb each copy by index before validation.
    pub fn from_config_with<F>(count: usize, base: SimConfig, mut perturb: F) -> SimResult<Self>
    where
        F: FnMut(usize, &mut SimConfig),
    {
        let mut sims = Vec::with_capacity(count);
        for i in 0..count {
            let mut config = base;
            perturb(i, &mut config);
            sims.push(Simulation::new(config)?);
        }
        Ok(Ensemble { sims })
    }

    /// Number of member simulations.
    pub fn len(&self) -> usize {
        self.sims.len()
    }

    /// Whether the ensemble has no members.
    pub fn is_empty(&self) -> bool {
        self.sims.is_empty()
    }

    /// Shared access to one member.
    pub fn get(&self, index: usize) -> Option<&Simulation> {
        self.sims.get(index)
    }

    /// Exclusive access to one member.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Simulation> {
        self.sims.get_mut(index)
    }

    /// Iterate over the members.
    pub fn iter(&self) -> std::slice::Iter<'_, Simulation> {
        self.sims.iter()
    }

    /// Iterate mutably over the members.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Simulation> {
        self.sims.iter_mut()
    }

    /// Apply one control force to every member.
    pub fn set_control_all(&mut self, force: f64) {
        for sim in &mut self.sims {
            sim.set_control(force);
        }
    }

    /// Advance every member by one tick.
    ///
    /// The first error encountered is returned. Members that already
    /// stepped keep their new state; a failed member keeps its pre-step
    /// state.
    #[cfg(feature = "parallel")]
    pub fn advance_all(&mut self) -> SimResult<()> {
        self.sims.par_iter_mut().try_for_each(|sim| sim.advance())
    }

    /// Advance every member by one tick, sequentially.
    #[cfg(not(feature = "parallel"))]
    pub fn advance_all(&mut self) -> SimResult<()> {
        self.sims.iter_mut().try_for_each(|sim| sim.advance())
    }
}
