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
//! Forward kinematics from generalized coordinates to Cartesian points
//!
//! Pure and stateless: the same coordinates always project to the same
//! points. Angles are measured from the upright vertical, so a zero angle
//! puts a link tip straight above its pivot. The lower link pivots at the
//! top of the cart body; the upper link chains from the lower link's tip.

use crate::config::PhysicalParams;
use crate::state::{CartesianPoints, Point2};

/// Project generalized coordinates onto the cart plane.
///
/// The cart reference point sits at half the cart height; each link tip is
/// offset from its parent by the link length along `(sin, cos)` of its
/// angle.
pub fn forward_kinematics(params: &PhysicalParams, q: &[f64; 3]) -> CartesianPoints {
    let h = params.cart_height();
    let cart = Point2::new(q[0], h / 2.0);
    let link1_tip = Point2::new(
        cart.x() + params.link1_length() * q[1].sin(),
        h + params.link1_length() * q[1].cos(),
    );
    let link2_tip = Point2::new(
        link1_tip.x() + params.link2_length() * q[2].sin(),
        link1_tip.y() + params.link2_length() * q[2].cos(),
    );
    CartesianPoints::new(cart, link1_tip, link2_tip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PhysicalParams, SimConfig};
    use approx::assert_relative_eq;

    fn params() -> PhysicalParams {
        PhysicalParams::from_config(&SimConfig::damped()).unwrap()
    }

    #[test]
    fn test_upright_configuration() {
        let params = params();
        let points = forward_kinematics(&params, &[0.0, 0.0, 0.0]);
        assert_eq!(points.cart().x(), 0.0);
        assert_eq!(points.cart().y(), 0.25);
        assert_eq!(points.link1_tip().x(), 0.0);
        assert_eq!(points.link1_tip().y(), 1.5);
        assert_eq!(points.link2_tip().x(), 0.0);
        assert_eq!(points.link2_tip().y(), 2.5);
    }

    #[test]
    fn test_cart_offset_translates_chain() {
        let params = params();
        let at_origin = forward_kinematics(&params, &[0.0, 0.3, -0.4]);
        let shifted = forward_kinematics(&params, &[2.0, 0.3, -0.4]);
        assert_relative_eq!(
            shifted.link2_tip().x() - at_origin.link2_tip().x(),
            2.0,
            max_relative = 1e-12
        );
        assert_eq!(shifted.link2_tip().y(), at_origin.link2_tip().y());
    }

    #[test]
    fn test_link_lengths_preserved() {
        let params = params();
        let angles: [f64; 5] = [-2.4, -0.7, 0.0, 0.9, 3.1];
        for &theta1 in &angles {
            for &theta2 in &angles {
                let q = [1.3, theta1, theta2];
                let points = forward_kinematics(&params, &q);
                let pivot = Point2::new(q[0], params.cart_height());
                assert_relative_eq!(
                    pivot.distance(&points.link1_tip()),
                    params.link1_length(),
                    max_relative = 1e-12
                );
                assert_relative_eq!(
                    points.link1_tip().distance(&points.link2_tip()),
                    params.link2_length(),
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let params = params();
        let q = [0.5, 1.2, -0.8];
        assert_eq!(
            forward_kinematics(&params, &q),
            forward_kinematics(&params, &q)
        );
    }
}
