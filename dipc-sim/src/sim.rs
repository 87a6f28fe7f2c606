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
//! The simulation facade
//!
//! A [`Simulation`] owns one validated parameter set and one mutable state
//! and exposes the tick loop to collaborators: set the control force,
//! advance one step, read the state back. Each tick runs the dynamics
//! solve, the semi-implicit Euler update, and the Cartesian projection in
//! that order; there is no other entry point that mutates the state.
//!
//! `advance` is a pure blocking computation. It must not be called
//! concurrently on one instance; callers that want many simulations at
//! once give each its own instance (see [`crate::Ensemble`]).

use crate::config::{PhysicalParams, SimConfig};
use crate::dynamics;
use crate::error::{SimError, SimResult};
use crate::integrator;
use crate::kinematics;
use crate::state::SimulationState;

/// One cart-and-two-link simulation instance.
///
/// # Example
///
/// ```rust
/// use dipc_sim::{SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig::undamped()).unwrap();
/// sim.advance().unwrap();
/// let points = sim.state().points();
/// assert!(points.link2_tip().y() > points.link1_tip().y());
/// ```
#[derive(Debug)]
pub struct Simulation {
    params: PhysicalParams,
    state: SimulationState,
}

impl Simulation {
    /// Validate a configuration and build a ready-to-step simulation.
    ///
    /// Physical parameters are checked by [`PhysicalParams::from_config`];
    /// initial coordinates, velocities, and the initial control force must
    /// additionally be finite. The Cartesian points are projected once so
    /// they are readable before the first tick.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let params = PhysicalParams::from_config(&config)?;

        let initial = [
            ("cart_position", config.cart_position),
            ("link1_angle", config.link1_angle),
            ("link2_angle", config.link2_angle),
            ("cart_velocity", config.cart_velocity),
            ("link1_velocity", config.link1_velocity),
            ("link2_velocity", config.link2_velocity),
            ("control", config.control),
        ];
        for (name, value) in initial {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter { name, value });
            }
        }

        let mut state = SimulationState::new(
            [config.cart_position, config.link1_angle, config.link2_angle],
            [
                config.cart_velocity,
                config.link1_velocity,
                config.link2_velocity,
            ],
            config.control,
        );
        state.points = kinematics::forward_kinematics(&params, &state.q);

        Ok(Simulation { params, state })
    }

    /// Set the control force applied to the cart on subsequent ticks.
    ///
    /// The value persists until changed; the core imposes no bounds, so
    /// callers that model a saturated actuator clamp before calling.
    pub fn set_control(&mut self, force: f64) {
        self.state.control = force;
    }

    /// The control force currently applied.
    pub fn control(&self) -> f64 {
        self.state.control
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// Order per tick: sanitize the cart onto the track, solve for the
    /// generalized accelerations, integrate, reproject the Cartesian
    /// points. On error the state keeps its last finite values and the
    /// instance stays usable.
    pub fn advance(&mut self) -> SimResult<()> {
        integrator::apply_track_bounds(&mut self.state);
        let qacc = dynamics::accelerations(&self.params, &self.state)?;
        integrator::integrate(&self.params, &mut self.state, qacc)?;
        self.state.points = kinematics::forward_kinematics(&self.params, &self.state.q);
        Ok(())
    }

    /// The validated physical parameters.
    pub fn params(&self) -> &PhysicalParams {
        &self.params
    }

    /// The current state: coordinates, velocities, accelerations, points.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}
