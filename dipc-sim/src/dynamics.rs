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
//! Dynamics solver for the cart and two-link pendulum
//!
//! The rigid-body equations of motion are exact in angles and velocities
//! and linear in the three unknown accelerations, so each tick reduces to a
//! dense 3x3 solve:
//!
//! ```text
//! M(q) * qacc = C(q, qvel, u)
//! ```
//!
//! `M` is the symmetric mass/coupling matrix and `C` collects the control
//! force, centrifugal terms, and gravity. For positive masses and lengths
//! `M` is positive-definite at every finite state; the solver still guards
//! each pivot and reports [`SimError::SingularSystem`] rather than guessing.

use crate::config::PhysicalParams;
use crate::error::{SimError, SimResult};
use crate::state::SimulationState;

/// Pivot magnitude below which the coefficient matrix is treated as singular.
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Build the symmetric 3x3 mass/coupling matrix at the current angles.
///
/// Only the link angles enter; the cart coordinate and all velocities do
/// not affect the coefficients.
pub fn coefficient_matrix(params: &PhysicalParams, state: &SimulationState) -> [[f64; 3]; 3] {
    let m0 = params.cart_mass();
    let m1 = params.link1_mass();
    let m2 = params.link2_mass();
    let len1 = params.link1_length();
    let half1 = params.link1_half();
    let half2 = params.link2_half();

    let theta1 = state.q[1];
    let theta2 = state.q[2];
    // First mass moment of both links about the cart axis.
    let lever = m1 * half1 + m2 * len1;

    let m01 = lever * theta1.cos();
    let m02 = m2 * half2 * theta2.cos();
    let m12 = m2 * len1 * half2 * (theta1 - theta2).cos();

    [
        [m0 + m1 + m2, m01, m02],
        [
            m01,
            m2 * half1 * half1 + m2 * len1 * len1 + params.link1_inertia(),
            m12,
        ],
        [m02, m12, m2 * half2 * half2 + params.link2_inertia()],
    ]
}

/// Build the forcing vector: control force, centrifugal coupling, gravity.
pub fn forcing_vector(params: &PhysicalParams, state: &SimulationState) -> [f64; 3] {
    let m1 = params.link1_mass();
    let m2 = params.link2_mass();
    let len1 = params.link1_length();
    let half1 = params.link1_half();
    let half2 = params.link2_half();
    let g = params.gravity();

    let theta1 = state.q[1];
    let theta2 = state.q[2];
    let omega1 = state.qvel[1];
    let omega2 = state.qvel[2];
    let lever = m1 * half1 + m2 * len1;
    let relative = (theta1 - theta2).sin();

    [
        state.control
            + lever * theta1.sin() * omega1 * omega1
            + m2 * half2 * theta2.sin() * omega2 * omega2,
        lever * g * theta1.sin() - m2 * len1 * half2 * relative * omega2 * omega2,
        m2 * len1 * half2 * relative * omega1 * omega1 + m2 * half2 * g * theta2.sin(),
    ]
}

/// Solve a dense 3x3 linear system by Gaussian elimination with partial
/// pivoting.
///
/// Returns [`SimError::SingularSystem`] when the best available pivot falls
/// below [`SINGULARITY_TOLERANCE`]; no approximate solution is substituted.
pub fn solve3(mut m: [[f64; 3]; 3], mut b: [f64; 3]) -> SimResult<[f64; 3]> {
    // Forward elimination
    for k in 0..3 {
        let mut pivot_row = k;
        for i in (k + 1)..3 {
            if m[i][k].abs() > m[pivot_row][k].abs() {
                pivot_row = i;
            }
        }
        let pivot = m[pivot_row][k].abs();
        if !(pivot > SINGULARITY_TOLERANCE) {
            return Err(SimError::SingularSystem { pivot });
        }
        if pivot_row != k {
            m.swap(k, pivot_row);
            b.swap(k, pivot_row);
        }
        for i in (k + 1)..3 {
            let factor = m[i][k] / m[k][k];
            for j in k..3 {
                m[i][j] -= factor * m[k][j];
            }
            b[i] -= factor * b[k];
        }
    }

    // Back substitution
    let mut x = [0.0; 3];
    for i in (0..3).rev() {
        let mut sum = b[i];
        for j in (i + 1)..3 {
            sum -= m[i][j] * x[j];
        }
        x[i] = sum / m[i][i];
    }
    Ok(x)
}

/// Compute the generalized accelerations at the current state.
///
/// Builds the coefficient matrix and forcing vector, solves the system,
/// and checks the result for finiteness before handing it to the
/// integrator. A non-finite control force or velocity surfaces here as
/// [`SimError::NonFiniteState`] rather than poisoning the state.
pub fn accelerations(params: &PhysicalParams, state: &SimulationState) -> SimResult<[f64; 3]> {
    let m = coefficient_matrix(params, state);
    let c = forcing_vector(params, state);
    let qacc = solve3(m, c)?;
    if qacc.iter().any(|a| !a.is_finite()) {
        return Err(SimError::NonFiniteState {
            quantity: "acceleration",
        });
    }
    Ok(qacc)
}
