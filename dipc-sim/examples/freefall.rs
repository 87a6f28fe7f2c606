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
//! Free fall from the perturbed upright position
//!
//! Runs the damped preset with no control: both links start with a small
//! tilt and topple under gravity while the cart recoils. Prints the
//! accelerations from the latest solve and a periodic state trace.

use dipc_sim::{SimConfig, Simulation};

fn main() {
    println!("DIPC free fall (damped preset, no control)");
    println!("==========================================\n");

    let mut sim = Simulation::new(SimConfig::damped()).expect("preset config is valid");

    for _ in 0..10 {
        sim.advance().expect("finite step");
    }

    let [a0, a1, a2] = sim.state().accelerations();
    println!("accelerations after 10 ticks: [{a0:.6}, {a1:.6}, {a2:.6}]");
    println!(
        "velocities: cart {:.6}, link1 {:.6}, link2 {:.6}",
        sim.state().cart_velocity(),
        sim.state().link1_velocity(),
        sim.state().link2_velocity()
    );
    println!(
        "coordinates: cart {:.6}, link1 {:.6}, link2 {:.6}\n",
        sim.state().cart_position(),
        sim.state().link1_angle(),
        sim.state().link2_angle()
    );

    println!("time(s)    cart(m)    theta1(rad)  theta2(rad)  tip2(x, y)");
    println!("------------------------------------------------------------");
    let dt = sim.params().timestep();
    for tick in 10..2500 {
        sim.advance().expect("finite step");
        if tick % 250 == 0 {
            let state = sim.state();
            let tip = state.points().link2_tip();
            println!(
                "{:7.3}   {:+8.4}   {:+10.4}   {:+10.4}   ({:+.3}, {:+.3})",
                tick as f64 * dt,
                state.cart_position(),
                state.link1_angle(),
                state.link2_angle(),
                tip.x(),
                tip.y()
            );
        }
    }
}
