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
//! # DIPC Simulation Engine
//!
//! A fixed-step dynamics engine for a double inverted pendulum on a cart
//! (DIPC): a cart sliding along a horizontal track carrying two
//! serially-hinged pendulum links, driven by a scalar control force.
//!
//! ## Features
//!
//! - **Closed-form dynamics**: the 3x3 mass/coupling system of the cart and
//!   both links, solved exactly each tick
//! - **Semi-implicit Euler stepping**: velocities first, then positions from
//!   the updated velocities, with optional viscous damping
//! - **Track bounds**: a hard position clamp on the cart with velocity zeroing
//! - **Forward kinematics**: Cartesian joint points recomputed every tick for
//!   rendering and diagnostics
//! - **Ensembles**: optional Rayon-parallel sweeps over independent
//!   simulations
//!
//! ## Example
//!
//! ```rust
//! use dipc_sim::{SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::damped()).unwrap();
//! sim.set_control(40.0);
//! for _ in 0..100 {
//!     sim.advance().unwrap();
//! }
//! assert!(sim.state().is_valid());
//! ```

#![warn(missing_docs)]

/// Simulation configuration and validated physical parameters
pub mod config;

/// Dynamics solver: coefficient matrix, forcing vector, dense 3x3 solve
pub mod dynamics;

/// Mechanical energy diagnostics
pub mod energy;

/// Batch stepping of independent simulations
pub mod ensemble;

/// Error types for construction and stepping
pub mod error;

/// Semi-implicit Euler stepping and track bounds
pub mod integrator;

/// Forward kinematics from generalized coordinates to Cartesian points
pub mod kinematics;

/// The simulation facade tying solver, integrator, and kinematics together
pub mod sim;

/// Mutable simulation state
pub mod state;

pub use config::{PhysicalParams, SimConfig};
pub use ensemble::Ensemble;
pub use error::{SimError, SimResult};
pub use sim::Simulation;
pub use state::{CartesianPoints, Point2, SimulationState};
