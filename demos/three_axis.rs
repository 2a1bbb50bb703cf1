//! Three-axis position hold driving a damped double integrator per axis.
//! This demo requires the `--features simulation` flag to be enabled.
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

#[cfg(feature = "simulation")]
pub fn main() {
    use nalgebra as na;

    use tick_pid::time::{DeltaTimer, Seconds};
    use tick_pid::vector::PidController3;

    const FIXED_STEP_SIZE_S: f64 = 0.02;
    const DRAG: f64 = 0.8;

    let mut pid = PidController3::new(4.0, 1.0, 2.5, 15.0);
    let mut timer = DeltaTimer::new();

    let target = na::Vector3::new(1.0, -2.0, 0.5);
    let mut position = na::Vector3::<f64>::zeros();
    let mut velocity = na::Vector3::<f64>::zeros();

    println!("time,x,y,z");
    for step in 0..1500u32 {
        let now = Seconds(f64::from(step) * FIXED_STEP_SIZE_S);

        // The first tick reports dt = 0.0 and the controller drops it
        let dt = timer.tick(now);
        let accel = pid.update(target - position, dt);

        velocity += (accel - velocity * DRAG) * FIXED_STEP_SIZE_S;
        position += velocity * FIXED_STEP_SIZE_S;

        println!("{:.2},{},{},{}", now.0, position.x, position.y, position.z);
    }
}

#[cfg(not(feature = "simulation"))]
fn main() {
    eprintln!("This demo requires `--features simulation` to run.");
}
