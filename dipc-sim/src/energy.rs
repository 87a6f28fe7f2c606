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
//! Mechanical energy diagnostics
//!
//! Kinetic and potential energy of the full system, computed from the
//! current state. With zero control and zero damping the total is a
//! conserved quantity of the exact dynamics, which makes it the reference
//! signal for measuring integrator drift. Potential energy is measured
//! from the pivot height, so both links upright is the maximum.

use crate::config::PhysicalParams;
use crate::state::SimulationState;

/// Kinetic energy: cart translation plus each link's center-of-mass
/// translation and rotation about its center of mass.
pub fn kinetic_energy(params: &PhysicalParams, state: &SimulationState) -> f64 {
    let half1 = params.link1_half();
    let half2 = params.link2_half();
    let len1 = params.link1_length();

    let (sin1, cos1) = state.q[1].sin_cos();
    let (sin2, cos2) = state.q[2].sin_cos();
    let v0 = state.qvel[0];
    let omega1 = state.qvel[1];
    let omega2 = state.qvel[2];

    let cart = 0.5 * params.cart_mass() * v0 * v0;

    let v1x = v0 + half1 * cos1 * omega1;
    let v1y = -half1 * sin1 * omega1;
    let link1 = 0.5 * params.link1_mass() * (v1x * v1x + v1y * v1y)
        + 0.5 * params.link1_inertia() * omega1 * omega1;

    let v2x = v0 + len1 * cos1 * omega1 + half2 * cos2 * omega2;
    let v2y = -len1 * sin1 * omega1 - half2 * sin2 * omega2;
    let link2 = 0.5 * params.link2_mass() * (v2x * v2x + v2y * v2y)
        + 0.5 * params.link2_inertia() * omega2 * omega2;

    cart + link1 + link2
}

/// Potential energy of both link centers of mass relative to the pivot.
pub fn potential_energy(params: &PhysicalParams, state: &SimulationState) -> f64 {
    let g = params.gravity();
    let cos1 = state.q[1].cos();
    let cos2 = state.q[2].cos();
    params.link1_mass() * g * params.link1_half() * cos1
        + params.link2_mass() * g * (params.link1_length() * cos1 + params.link2_half() * cos2)
}

/// Total mechanical energy, kinetic plus potential.
pub fn total_energy(params: &PhysicalParams, state: &SimulationState) -> f64 {
    kinetic_energy(params, state) + potential_energy(params, state)
}
