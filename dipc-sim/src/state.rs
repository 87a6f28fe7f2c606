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
//! Mutable simulation state
//!
//! The state uses the generalized-coordinate convention: `q` holds the cart
//! position followed by the two link angles, `qvel` the matching velocities,
//! and `qacc` the accelerations from the most recent solve. The cart
//! coordinate is a linear position that rides along in the same vector as
//! the angles.
//!
//! The Cartesian points are derived data, recomputed from `q` after every
//! step; they are never mutated independently.

/// A 2D point in the cart's vertical plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    x: f64,
    y: f64,
}

impl Point2 {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Cartesian anchor points of the cart and both link tips.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianPoints {
    cart: Point2,
    link1_tip: Point2,
    link2_tip: Point2,
}

impl CartesianPoints {
    /// Bundle the three points.
    pub fn new(cart: Point2, link1_tip: Point2, link2_tip: Point2) -> Self {
        CartesianPoints {
            cart,
            link1_tip,
            link2_tip,
        }
    }

    /// Cart reference point (track position, half the cart height).
    pub fn cart(&self) -> Point2 {
        self.cart
    }

    /// Tip of the lower link.
    pub fn link1_tip(&self) -> Point2 {
        self.link1_tip
    }

    /// Tip of the upper link.
    pub fn link2_tip(&self) -> Point2 {
        self.link2_tip
    }
}

/// The complete mutable state of one simulation.
///
/// Owned exclusively by a [`crate::Simulation`] and mutated in place, tick
/// by tick. Indices are fixed: 0 is the cart, 1 the lower link, 2 the
/// upper link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub(crate) q: [f64; 3],
    pub(crate) qvel: [f64; 3],
    pub(crate) qacc: [f64; 3],
    pub(crate) control: f64,
    pub(crate) points: CartesianPoints,
}

impl SimulationState {
    /// Create a state from initial coordinates, velocities, and control.
    ///
    /// Accelerations start at zero and the Cartesian points at the origin;
    /// both are filled in by the first solve and projection.
    pub(crate) fn new(q: [f64; 3], qvel: [f64; 3], control: f64) -> Self {
        SimulationState {
            q,
            qvel,
            qacc: [0.0; 3],
            control,
            points: CartesianPoints::default(),
        }
    }

    /// Cart position along the track.
    pub fn cart_position(&self) -> f64 {
        self.q[0]
    }

    /// Angle of the lower link.
    pub fn link1_angle(&self) -> f64 {
        self.q[1]
    }

    /// Angle of the upper link.
    pub fn link2_angle(&self) -> f64 {
        self.q[2]
    }

    /// Cart velocity.
    pub fn cart_velocity(&self) -> f64 {
        self.qvel[0]
    }

    /// Angular velocity of the lower link.
    pub fn link1_velocity(&self) -> f64 {
        self.qvel[1]
    }

    /// Angular velocity of the upper link.
    pub fn link2_velocity(&self) -> f64 {
        self.qvel[2]
    }

    /// The generalized coordinate vector `[cart, link1, link2]`.
    pub fn coordinates(&self) -> [f64; 3] {
        self.q
    }

    /// The generalized velocity vector.
    pub fn velocities(&self) -> [f64; 3] {
        self.qvel
    }

    /// The acceleration vector from the most recent solve.
    pub fn accelerations(&self) -> [f64; 3] {
        self.qacc
    }

    /// Current control force on the cart.
    pub fn control(&self) -> f64 {
        self.control
    }

    /// Cartesian points from the most recent projection.
    pub fn points(&self) -> CartesianPoints {
        self.points
    }

    /// Check that every coordinate, velocity, and acceleration is finite.
    pub fn is_valid(&self) -> bool {
        self.q.iter().all(|v| v.is_finite())
            && self.qvel.iter().all(|v| v.is_finite())
            && self.qacc.iter().all(|v| v.is_finite())
    }
}
