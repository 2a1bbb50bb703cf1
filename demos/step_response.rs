//! Square-wave tracking of a mass-spring-damper system under PID control.
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

    use tick_pid::pid::PidControllerBuilder;
    use tick_pid::sim::{self, SignalGenerator, WaveForm};
    use tick_pid::time::{Millis, TickInstant};

    const FIXED_STEP_SIZE_MS: u64 = 10;
    const FIXED_STEP_SIZE_S: f64 = FIXED_STEP_SIZE_MS as f64 * 0.001;

    let mut pid = PidControllerBuilder::default()
        .kp(8.0)
        .ki(3.0)
        .kd(4.0)
        .output_limit(20.0)
        .build()
        .unwrap();

    let mdl = sim::MassSpringDamper {
        natural_frequency: 1.0,
        damping_ratio: 0.2,
    };

    // A 0/1 square wave stepping every ~12.5 seconds
    let square = SignalGenerator::new(WaveForm::Square, Millis(0), 0.5, 0.5).with_frequency(0.25);

    let mut state = na::Vector2::<f64>::zeros();
    let mut measurement: f64 = 0.0;

    // Pipe the CSV into your plotting tool of choice
    println!("time,setpoint,measurement,command");
    for step in 0..3000u64 {
        let now = Millis(step * FIXED_STEP_SIZE_MS);
        let setpoint = square.generate(now);

        let command = pid.update(setpoint - measurement, FIXED_STEP_SIZE_S);
        state = sim::rk4_step(|x| mdl.f(x, command), state, FIXED_STEP_SIZE_S);
        measurement = mdl.h(state);

        println!(
            "{},{setpoint},{measurement},{command}",
            now.seconds_since(Millis(0))
        );
    }
}

#[cfg(not(feature = "simulation"))]
fn main() {
    eprintln!("This demo requires `--features simulation` to run.");
}
