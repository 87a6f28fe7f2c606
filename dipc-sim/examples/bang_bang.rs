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
//! Scripted bang-bang control
//!
//! Stands in for an interactive driver: a fixed schedule of full-force
//! pushes, saturated at +/-400 units the way a keyboard loop would clamp
//! them, shoves the cart back and forth along the track. Shows the control
//! interface and the hard stop at the track limit.

use dipc_sim::integrator::TRACK_LIMIT;
use dipc_sim::{SimConfig, Simulation};

/// Saturation bound an interactive driver would apply before calling in.
const FORCE_LIMIT: f64 = 400.0;

/// Full force right for a second, left for two, right for two, then coast.
fn schedule(time: f64) -> f64 {
    let force = match time {
        t if t < 1.0 => FORCE_LIMIT,
        t if t < 3.0 => -FORCE_LIMIT,
        t if t < 5.0 => FORCE_LIMIT,
        _ => 0.0,
    };
    force.clamp(-FORCE_LIMIT, FORCE_LIMIT)
}

fn main() {
    println!("DIPC bang-bang drive (saturated at +/-{FORCE_LIMIT} units)");
    println!("====================================================\n");

    let mut sim = Simulation::new(SimConfig::damped()).expect("preset config is valid");
    let dt = sim.params().timestep();
    let ticks = (6.0 / dt) as usize;

    let mut clamp_ticks = 0usize;
    let mut max_excursion: f64 = 0.0;

    println!("time(s)    u(N)     cart(m)    theta1(rad)  theta2(rad)");
    println!("--------------------------------------------------------");
    for tick in 0..ticks {
        let time = tick as f64 * dt;
        sim.set_control(schedule(time));
        sim.advance().expect("finite step");

        let cart = sim.state().cart_position();
        max_excursion = max_excursion.max(cart.abs());
        if cart.abs() == TRACK_LIMIT {
            clamp_ticks += 1;
        }

        if tick % 250 == 0 {
            println!(
                "{:7.3}   {:+6.0}   {:+8.4}   {:+10.4}   {:+10.4}",
                time,
                sim.control(),
                cart,
                sim.state().link1_angle(),
                sim.state().link2_angle()
            );
        }
    }

    println!("\nmax cart excursion: {max_excursion:.4} m (track limit {TRACK_LIMIT} m)");
    println!("ticks spent pinned at a stop: {clamp_ticks}");
}
