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
//! Simulation configuration and validated physical parameters
//!
//! [`SimConfig`] is the open, named-field description of a simulation: every
//! physical constant, initial condition, and tuning knob. Two named presets
//! exist, [`SimConfig::damped`] and [`SimConfig::undamped`], differing in
//! cart mass, initial perturbation, timestep, and friction; neither is more
//! physical than the other. Individual fields are overridable with struct
//! update syntax:
//!
//! ```rust
//! use dipc_sim::SimConfig;
//!
//! let config = SimConfig {
//!     link1_angle: 0.001,
//!     timestep: 0.001,
//!     ..SimConfig::undamped()
//! };
//! assert_eq!(config.cart_mass, 20.0);
//! ```
//!
//! [`PhysicalParams`] is the validated, immutable form consumed by the
//! solver: construction rejects non-positive masses, lengths, and timesteps
//! once, so the per-tick code never re-checks them. Derived quantities
//! (half-lengths and uniform-rod inertias) are computed here exactly once.

use crate::error::{SimError, SimResult};

/// Complete named-parameter description of a simulation.
///
/// Angles are in radians measured from the upright vertical; the cart
/// coordinate shares the generalized-coordinate vector with the two link
/// angles even though it is a linear position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Initial control force on the cart.
    pub control: f64,
    /// Cart mass.
    pub cart_mass: f64,
    /// Mass of the lower link.
    pub link1_mass: f64,
    /// Mass of the upper link.
    pub link2_mass: f64,
    /// Full length of the lower link.
    pub link1_length: f64,
    /// Full length of the upper link.
    pub link2_length: f64,
    /// Cart body height; the lower link pivots at this height.
    pub cart_height: f64,
    /// Cart body width, used by renderers only.
    pub cart_width: f64,
    /// Initial cart position along the track.
    pub cart_position: f64,
    /// Initial angle of the lower link.
    pub link1_angle: f64,
    /// Initial angle of the upper link.
    pub link2_angle: f64,
    /// Initial cart velocity.
    pub cart_velocity: f64,
    /// Initial angular velocity of the lower link.
    pub link1_velocity: f64,
    /// Initial angular velocity of the upper link.
    pub link2_velocity: f64,
    /// Integration step.
    pub timestep: f64,
    /// Viscous damping factor for the lower link, in `[0, 1)`.
    pub link1_damping: f64,
    /// Viscous damping factor for the upper link, in `[0, 1)`.
    pub link2_damping: f64,
    /// Whether the cart velocity is damped with `link1_damping` as well.
    pub damp_cart: bool,
}

impl SimConfig {
    /// The damped preset: light friction on all joints, a small symmetric
    /// perturbation on both links, and a 2 ms step.
    ///
    /// This is the crate default.
    pub fn damped() -> Self {
        SimConfig {
            gravity: 10.0,
            control: 0.0,
            cart_mass: 10.0,
            link1_mass: 5.0,
            link2_mass: 5.0,
            link1_length: 1.0,
            link2_length: 1.0,
            cart_height: 0.5,
            cart_width: 1.0,
            cart_position: 0.0,
            link1_angle: 0.1,
            link2_angle: 0.1,
            cart_velocity: 0.0,
            link1_velocity: 0.0,
            link2_velocity: 0.0,
            timestep: 0.002,
            link1_damping: 0.01,
            link2_damping: 0.01,
            damp_cart: true,
        }
    }

    /// The undamped preset: a heavier cart, the lower link released from
    /// 45 degrees, no friction, and a 10 ms step.
    pub fn undamped() -> Self {
        SimConfig {
            gravity: 10.0,
            control: 0.0,
            cart_mass: 20.0,
            link1_mass: 5.0,
            link2_mass: 5.0,
            link1_length: 1.0,
            link2_length: 1.0,
            cart_height: 0.5,
            cart_width: 1.0,
            cart_position: 0.0,
            link1_angle: std::f64::consts::FRAC_PI_4,
            link2_angle: 0.0,
            cart_velocity: 0.0,
            link1_velocity: 0.0,
            link2_velocity: 0.0,
            timestep: 0.01,
            link1_damping: 0.0,
            link2_damping: 0.0,
            damp_cart: false,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig::damped()
    }
}

/// Validated, immutable physical parameters of a simulation.
///
/// Built from a [`SimConfig`] once; the derived half-lengths and
/// uniform-rod inertias about each link's center of mass are precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParams {
    gravity: f64,
    cart_mass: f64,
    link1_mass: f64,
    link2_mass: f64,
    link1_length: f64,
    link2_length: f64,
    cart_height: f64,
    cart_width: f64,
    timestep: f64,
    link1_damping: f64,
    link2_damping: f64,
    damp_cart: bool,
    // Derived
    link1_half: f64,
    link2_half: f64,
    link1_inertia: f64,
    link2_inertia: f64,
}

/// Check that a value is strictly positive and finite.
fn require_positive(name: &'static str, value: f64) -> SimResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

/// Check that a damping factor lies in `[0, 1)`.
fn require_damping(name: &'static str, value: f64) -> SimResult<f64> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

impl PhysicalParams {
    /// Validate a configuration and derive the per-link constants.
    ///
    /// Rejects non-positive or non-finite masses, lengths, cart geometry,
    /// and timestep, non-finite gravity, and damping factors outside
    /// `[0, 1)`. Initial conditions are validated separately by
    /// [`crate::Simulation::new`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use dipc_sim::{PhysicalParams, SimConfig};
    ///
    /// let params = PhysicalParams::from_config(&SimConfig::damped()).unwrap();
    /// assert_eq!(params.link1_half(), 0.5);
    /// assert!(PhysicalParams::from_config(&SimConfig {
    ///     timestep: 0.0,
    ///     ..SimConfig::damped()
    /// })
    /// .is_err());
    /// ```
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        if !config.gravity.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "gravity",
                value: config.gravity,
            });
        }
        let cart_mass = require_positive("cart_mass", config.cart_mass)?;
        let link1_mass = require_positive("link1_mass", config.link1_mass)?;
        let link2_mass = require_positive("link2_mass", config.link2_mass)?;
        let link1_length = require_positive("link1_length", config.link1_length)?;
        let link2_length = require_positive("link2_length", config.link2_length)?;
        let cart_height = require_positive("cart_height", config.cart_height)?;
        let cart_width = require_positive("cart_width", config.cart_width)?;
        let timestep = require_positive("timestep", config.timestep)?;
        let link1_damping = require_damping("link1_damping", config.link1_damping)?;
        let link2_damping = require_damping("link2_damping", config.link2_damping)?;

        Ok(PhysicalParams {
            gravity: config.gravity,
            cart_mass,
            link1_mass,
            link2_mass,
            link1_length,
            link2_length,
            cart_height,
            cart_width,
            timestep,
            link1_damping,
            link2_damping,
            damp_cart: config.damp_cart,
            link1_half: link1_length / 2.0,
            link2_half: link2_length / 2.0,
            link1_inertia: link1_mass * link1_length * link1_length / 12.0,
            link2_inertia: link2_mass * link2_length * link2_length / 12.0,
        })
    }

    /// Gravitational acceleration.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Cart mass.
    pub fn cart_mass(&self) -> f64 {
        self.cart_mass
    }

    /// Mass of the lower link.
    pub fn link1_mass(&self) -> f64 {
        self.link1_mass
    }

    /// Mass of the upper link.
    pub fn link2_mass(&self) -> f64 {
        self.link2_mass
    }

    /// Full length of the lower link.
    pub fn link1_length(&self) -> f64 {
        self.link1_length
    }

    /// Full length of the upper link.
    pub fn link2_length(&self) -> f64 {
        self.link2_length
    }

    /// Cart body height; the lower link pivots at this height.
    pub fn cart_height(&self) -> f64 {
        self.cart_height
    }

    /// Cart body width.
    pub fn cart_width(&self) -> f64 {
        self.cart_width
    }

    /// Integration step.
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Viscous damping factor for the lower link.
    pub fn link1_damping(&self) -> f64 {
        self.link1_damping
    }

    /// Viscous damping factor for the upper link.
    pub fn link2_damping(&self) -> f64 {
        self.link2_damping
    }

    /// Whether cart velocity is damped with the lower-link factor.
    pub fn damp_cart(&self) -> bool {
        self.damp_cart
    }

    /// Half-length of the lower link (pivot to center of mass).
    pub fn link1_half(&self) -> f64 {
        self.link1_half
    }

    /// Half-length of the upper link (pivot to center of mass).
    pub fn link2_half(&self) -> f64 {
        self.link2_half
    }

    /// Uniform-rod inertia of the lower link about its center of mass.
    pub fn link1_inertia(&self) -> f64 {
        self.link1_inertia
    }

    /// Uniform-rod inertia of the upper link about its center of mass.
    pub fn link2_inertia(&self) -> f64 {
        self.link2_inertia
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damped_preset() {
        let config = SimConfig::damped();
        assert_eq!(config.cart_mass, 10.0);
        assert_eq!(config.timestep, 0.002);
        assert_eq!(config.link1_damping, 0.01);
        assert!(config.damp_cart);
    }

    #[test]
    fn test_undamped_preset() {
        let config = SimConfig::undamped();
        assert_eq!(config.cart_mass, 20.0);
        assert_eq!(config.timestep, 0.01);
        assert_eq!(config.link1_damping, 0.0);
        assert_eq!(config.link2_damping, 0.0);
        assert!(!config.damp_cart);
    }

    #[test]
    fn test_default_is_damped() {
        assert_eq!(SimConfig::default(), SimConfig::damped());
    }

    #[test]
    fn test_derived_quantities() {
        let params = PhysicalParams::from_config(&SimConfig::damped()).unwrap();
        assert_eq!(params.link1_half(), 0.5);
        assert_eq!(params.link2_half(), 0.5);
        // m * L^2 / 12 with m = 5, L = 1
        assert!((params.link1_inertia() - 5.0 / 12.0).abs() < 1e-15);
        assert!((params.link2_inertia() - 5.0 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_nonpositive_mass() {
        let config = SimConfig {
            cart_mass: 0.0,
            ..SimConfig::damped()
        };
        let err = PhysicalParams::from_config(&config).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidParameter {
                name: "cart_mass",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_rejects_negative_length() {
        let config = SimConfig {
            link2_length: -1.0,
            ..SimConfig::damped()
        };
        assert!(PhysicalParams::from_config(&config).is_err());
    }

    #[test]
    fn test_rejects_nan_timestep() {
        let config = SimConfig {
            timestep: f64::NAN,
            ..SimConfig::damped()
        };
        assert!(PhysicalParams::from_config(&config).is_err());
    }

    #[test]
    fn test_rejects_damping_of_one() {
        let config = SimConfig {
            link1_damping: 1.0,
            ..SimConfig::damped()
        };
        let err = PhysicalParams::from_config(&config).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidParameter {
                name: "link1_damping",
                value: 1.0
            }
        );
    }

    #[test]
    fn test_rejects_infinite_gravity() {
        let config = SimConfig {
            gravity: f64::INFINITY,
            ..SimConfig::damped()
        };
        assert!(PhysicalParams::from_config(&config).is_err());
    }

    #[test]
    fn test_zero_damping_accepted() {
        let config = SimConfig {
            link1_damping: 0.0,
            link2_damping: 0.0,
            ..SimConfig::damped()
        };
        assert!(PhysicalParams::from_config(&config).is_ok());
    }
}
