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
//! Edge case tests: construction-time rejection, track bounds, and
//! non-finite fail-fast behavior

use dipc_sim::integrator::TRACK_LIMIT;
use dipc_sim::{SimConfig, SimError, Simulation};

#[test]
fn test_construction_rejects_each_invalid_parameter() {
    let cases: Vec<(&str, SimConfig)> = vec![
        (
            "cart_mass",
            SimConfig {
                cart_mass: 0.0,
                ..SimConfig::damped()
            },
        ),
        (
            "link1_mass",
            SimConfig {
                link1_mass: -5.0,
                ..SimConfig::damped()
            },
        ),
        (
            "link2_length",
            SimConfig {
                link2_length: 0.0,
                ..SimConfig::damped()
            },
        ),
        (
            "cart_height",
            SimConfig {
                cart_height: -0.5,
                ..SimConfig::damped()
            },
        ),
        (
            "timestep",
            SimConfig {
                timestep: 0.0,
                ..SimConfig::damped()
            },
        ),
        (
            "timestep",
            SimConfig {
                timestep: f64::NAN,
                ..SimConfig::damped()
            },
        ),
        (
            "link2_damping",
            SimConfig {
                link2_damping: 1.5,
                ..SimConfig::damped()
            },
        ),
        (
            "gravity",
            SimConfig {
                gravity: f64::NAN,
                ..SimConfig::damped()
            },
        ),
        (
            "cart_velocity",
            SimConfig {
                cart_velocity: f64::INFINITY,
                ..SimConfig::damped()
            },
        ),
    ];

    for (name, config) in cases {
        match Simulation::new(config) {
            Err(SimError::InvalidParameter { name: got, .. }) => {
                assert_eq!(got, name, "rejected the wrong field");
            }
            other => panic!("expected rejection of {}, got {:?}", name, other.is_ok()),
        }
    }
}

#[test]
fn test_cart_pinned_at_track_limit_under_constant_force() {
    let config = SimConfig {
        cart_position: 4.5,
        control: 400.0,
        ..SimConfig::damped()
    };
    let mut sim = Simulation::new(config).unwrap();

    sim.advance().unwrap();
    assert_eq!(sim.state().cart_position(), TRACK_LIMIT);
    assert_eq!(sim.state().cart_velocity(), 0.0);

    // The clamp is re-applied every tick, so the cart never creeps past
    // the stop no matter how long the force is held.
    for _ in 0..100 {
        sim.advance().unwrap();
        assert_eq!(sim.state().cart_position(), TRACK_LIMIT);
        assert_eq!(sim.state().cart_velocity(), 0.0);
    }
}

#[test]
fn test_cart_pinned_at_negative_track_limit() {
    let config = SimConfig {
        cart_position: -7.0,
        control: -400.0,
        ..SimConfig::damped()
    };
    let mut sim = Simulation::new(config).unwrap();

    sim.advance().unwrap();
    assert_eq!(sim.state().cart_position(), -TRACK_LIMIT);
    assert_eq!(sim.state().cart_velocity(), 0.0);
}

#[test]
fn test_cart_released_when_force_reverses() {
    let config = SimConfig {
        cart_position: 4.5,
        control: 400.0,
        link1_angle: 0.0,
        link2_angle: 0.0,
        ..SimConfig::damped()
    };
    let mut sim = Simulation::new(config).unwrap();
    for _ in 0..10 {
        sim.advance().unwrap();
    }
    assert_eq!(sim.state().cart_position(), TRACK_LIMIT);

    sim.set_control(-400.0);
    for _ in 0..10 {
        sim.advance().unwrap();
    }
    assert!(sim.state().cart_position() < TRACK_LIMIT);
}

#[test]
fn test_nan_control_fails_fast_and_preserves_state() {
    let mut sim = Simulation::new(SimConfig::damped()).unwrap();
    for _ in 0..10 {
        sim.advance().unwrap();
    }
    let before = *sim.state();

    sim.set_control(f64::NAN);
    let err = sim.advance().unwrap_err();
    assert!(matches!(err, SimError::NonFiniteState { .. }));

    // The failed tick committed nothing.
    assert_eq!(sim.state().coordinates(), before.coordinates());
    assert_eq!(sim.state().velocities(), before.velocities());

    // The instance stays usable once the control is finite again.
    sim.set_control(0.0);
    sim.advance().unwrap();
    assert!(sim.state().is_valid());
}

#[test]
fn test_oversized_timestep_blows_up_loudly() {
    let config = SimConfig {
        timestep: 10.0,
        ..SimConfig::undamped()
    };
    let mut sim = Simulation::new(config).unwrap();

    let mut failure = None;
    for _ in 0..100_000 {
        if let Err(err) = sim.advance() {
            failure = Some(err);
            break;
        }
    }

    // Divergence must surface as an error, never as NaN in the state.
    let err = failure.expect("runaway integration never reported an error");
    assert!(matches!(err, SimError::NonFiniteState { .. }));
    assert!(sim.state().is_valid());
}
