use crate::time::TickInstant;
use nalgebra as na;

/// Reference waveforms for exercising a controller in closed loop.
pub enum WaveForm {
    /// A sine at the configured frequency.
    Sine,
    /// A square wave switching at the sine's zero crossings.
    Square,
}

/// Generates setpoint signals for closed-loop tests and demos.
pub struct SignalGenerator<I: TickInstant> {
    fcn: fn(f64) -> f64,
    start: I,
    frequency: f64,
    amplitude: f64,
    offset: f64,
}

impl<I: TickInstant> SignalGenerator<I> {
    /// Creates a generator producing `amplitude * waveform + offset`,
    /// phased so the waveform starts at `start` with a default angular
    /// frequency of 1 rad/s.
    pub fn new(waveform: WaveForm, start: I, amplitude: f64, offset: f64) -> Self {
        Self {
            fcn: match waveform {
                WaveForm::Sine => f64::sin,
                WaveForm::Square => |x| x.sin().signum(),
            },
            start,
            frequency: 1.0,
            amplitude,
            offset,
        }
    }

    /// Overrides the angular frequency, in rad/s.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Samples the signal at `time`.
    pub fn generate(&self, time: I) -> f64 {
        let phase = self.frequency * time.seconds_since(self.start);
        self.amplitude * (self.fcn)(phase) + self.offset
    }
}

/// A unit-DC-gain mass-spring-damper plant, the usual second-order test
/// system:
///
/// p'' + 2ζωₙ p' + ωₙ² p = ωₙ² u
pub struct MassSpringDamper {
    /// Undamped natural frequency ωₙ, in rad/s.
    pub natural_frequency: f64,
    /// Damping ratio ζ.
    pub damping_ratio: f64,
}

impl MassSpringDamper {
    /// State derivative for state `x = [position, velocity]` under input
    /// `u`. Unit DC gain: at equilibrium the position equals the input.
    pub fn f(&self, x: na::Vector2<f64>, u: f64) -> na::Vector2<f64> {
        let wn = self.natural_frequency;
        let accel = wn * wn * (u - x[0]) - 2.0 * self.damping_ratio * wn * x[1];
        na::Vector2::new(x[1], accel)
    }

    /// Measured output: the position component of the state.
    pub fn h(&self, x: na::Vector2<f64>) -> f64 {
        x[0]
    }
}

/// Advances `x' = f(x)` by one fixed step `h` of the classical fourth-order
/// Runge-Kutta scheme.
pub fn rk4_step<F, const D: usize>(f: F, x: na::SVector<f64, D>, h: f64) -> na::SVector<f64, D>
where
    F: Fn(na::SVector<f64, D>) -> na::SVector<f64, D>,
{
    let k1 = f(x);
    let k2 = f(x + k1 * (h / 2.0));
    let k3 = f(x + k2 * (h / 2.0));
    let k4 = f(x + k3 * h);
    x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}
