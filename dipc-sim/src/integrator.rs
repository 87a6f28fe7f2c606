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
//! Semi-implicit Euler stepping and track bounds
//!
//! Velocities are updated from the accelerations first, damping is applied,
//! and positions then advance using the *updated* velocities. Updating
//! velocities before positions is what distinguishes this from explicit
//! Euler and keeps the pendulum's oscillation from pumping energy as
//! quickly.
//!
//! The cart rides a finite track: outside `[-TRACK_LIMIT, TRACK_LIMIT]` the
//! position is pinned to the boundary and the cart velocity zeroed. A hard
//! stop, not a spring.

use crate::config::PhysicalParams;
use crate::error::{SimError, SimResult};
use crate::state::SimulationState;

/// Track bound for the cart coordinate, either side of the origin.
pub const TRACK_LIMIT: f64 = 4.0;

/// Pin the cart onto the track, zeroing its velocity on contact.
///
/// Returns `true` when a clamp occurred. Applying this to an in-bounds
/// state is a no-op, so the rule can be re-applied every tick.
pub fn apply_track_bounds(state: &mut SimulationState) -> bool {
    if state.q[0] > TRACK_LIMIT {
        state.q[0] = TRACK_LIMIT;
        state.qvel[0] = 0.0;
        true
    } else if state.q[0] < -TRACK_LIMIT {
        state.q[0] = -TRACK_LIMIT;
        state.qvel[0] = 0.0;
        true
    } else {
        false
    }
}

/// Advance velocities and coordinates one step from the given accelerations.
///
/// The new values are computed into temporaries and checked for finiteness
/// before anything is committed; on [`SimError::NonFiniteState`] the state
/// still holds the pre-step values. The track bound is re-applied after the
/// position update so the stored cart position never leaves the track.
pub fn integrate(
    params: &PhysicalParams,
    state: &mut SimulationState,
    qacc: [f64; 3],
) -> SimResult<()> {
    let dt = params.timestep();

    let mut qvel = state.qvel;
    for i in 0..3 {
        qvel[i] += qacc[i] * dt;
    }
    if params.damp_cart() {
        qvel[0] *= 1.0 - params.link1_damping();
    }
    qvel[1] *= 1.0 - params.link1_damping();
    qvel[2] *= 1.0 - params.link2_damping();
    if qvel.iter().any(|v| !v.is_finite()) {
        return Err(SimError::NonFiniteState {
            quantity: "velocity",
        });
    }

    let mut q = state.q;
    for i in 0..3 {
        q[i] += qvel[i] * dt;
    }
    if q.iter().any(|v| !v.is_finite()) {
        return Err(SimError::NonFiniteState {
            quantity: "coordinate",
        });
    }

    state.q = q;
    state.qvel = qvel;
    state.qacc = qacc;
    apply_track_bounds(state);
    Ok(())
}
