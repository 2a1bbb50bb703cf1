// Applies the scalar control law component-wise to three axes at once
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

use nalgebra::{Scalar, Vector3};
use num_traits::float::FloatCore;

use crate::pid::clamp_abs;

fn contains_nan<T: FloatCore + Scalar>(v: &Vector3<T>) -> bool {
    v.iter().any(|c| c.is_nan())
}

/// A discrete-time PID controller for a three-axis control channel.
///
/// This is the scalar control law of
/// [`PidController`](crate::pid::PidController) applied component-wise to a
/// `Vector3` error: one set of scalar gains, one scalar output limit, and
/// vector-valued error history. Axes never mix, so running this type is
/// equivalent to running three scalar controllers that share their tuning,
/// with one difference: a NaN in *any* error component drops the tick for
/// the whole vector. The three axes therefore always sit on the same tick
/// sequence, which matters when the output feeds a rigid-body actuator.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use tick_pid::vector::PidController3;
///
/// let mut pid = PidController3::new(4.0, 1.0, 2.5, 15.0);
///
/// let error = Vector3::new(0.4, -0.1, 0.0);
/// let accel = pid.update(error, 0.02);
/// assert!(accel.amax() <= 15.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidController3<T: Scalar> {
    /// Proportional gain, shared by all axes.
    pub kp: T,

    /// Integral gain, shared by all axes.
    pub ki: T,

    /// Derivative gain, shared by all axes.
    pub kd: T,

    /// Magnitude bound applied to each output component independently.
    pub output_limit: T,

    prev_error: Vector3<T>,
    integral_error: Vector3<T>,
}

impl<T: FloatCore + Scalar> PidController3<T> {
    /// Creates a controller from raw gains and an output limit, with zeroed
    /// error history on every axis.
    pub fn new(kp: T, ki: T, kd: T, output_limit: T) -> Self {
        Self {
            kp,
            ki,
            kd,
            output_limit,
            prev_error: Vector3::zeros(),
            integral_error: Vector3::zeros(),
        }
    }

    /// Returns the error vector recorded on the previous effective tick.
    pub fn prev_error(&self) -> Vector3<T> {
        self.prev_error
    }

    /// Returns the time-weighted error accumulated per axis since the last
    /// reset, without the integral gain folded in.
    pub fn integral_error(&self) -> Vector3<T> {
        self.integral_error
    }

    /// Discards the error history on every axis. Gains and the output
    /// limit are untouched.
    pub fn reset(&mut self) {
        self.prev_error = Vector3::zeros();
        self.integral_error = Vector3::zeros();
    }

    /// Runs one tick of the full PID law on all three axes and returns the
    /// component-wise clamped output.
    ///
    /// If `dt` is zero or any error component is NaN the tick is dropped
    /// for the whole vector: the result is the zero vector and no history
    /// moves. Guarding per-axis instead would let one glitched axis fall a
    /// tick behind its siblings.
    pub fn update(&mut self, error: Vector3<T>, dt: T) -> Vector3<T> {
        if dt == T::zero() || contains_nan(&error) {
            return Vector3::zeros();
        }

        self.integral_error = self
            .integral_error
            .zip_map(&error, |acc, e| acc + dt * e);

        let out = Vector3::from_fn(|axis, _| {
            let e = error[axis];
            let p_out = self.kp * e;
            let i_out = self.ki * self.integral_error[axis];
            let d_out = self.kd * ((e - self.prev_error[axis]) / dt);
            clamp_abs(p_out + i_out + d_out, self.output_limit)
        });

        self.prev_error = error;
        out
    }

    /// Runs one tick of the full PID law. Alias of [`update`](Self::update).
    pub fn update_pid(&mut self, error: Vector3<T>, dt: T) -> Vector3<T> {
        self.update(error, dt)
    }

    /// Runs one tick of proportional-only control on all three axes.
    ///
    /// Takes a shared receiver; no history is read or written.
    pub fn update_p(&self, error: Vector3<T>) -> Vector3<T> {
        if contains_nan(&error) {
            return Vector3::zeros();
        }
        error.map(|e| clamp_abs(self.kp * e, self.output_limit))
    }

    /// Runs one tick of proportional-derivative control on all three axes,
    /// advancing the previous-error vector and leaving the integral
    /// accumulator alone.
    pub fn update_pd(&mut self, error: Vector3<T>, dt: T) -> Vector3<T> {
        if dt == T::zero() || contains_nan(&error) {
            return Vector3::zeros();
        }

        let out = error.zip_map(&self.prev_error, |e, prev| {
            let p_out = self.kp * e;
            let d_out = self.kd * ((e - prev) / dt);
            clamp_abs(p_out + d_out, self.output_limit)
        });

        self.prev_error = error;
        out
    }

    /// Runs one tick of proportional-integral control on all three axes,
    /// advancing the integral accumulator and leaving the previous-error
    /// vector alone.
    pub fn update_pi(&mut self, error: Vector3<T>, dt: T) -> Vector3<T> {
        if dt == T::zero() || contains_nan(&error) {
            return Vector3::zeros();
        }

        self.integral_error = self
            .integral_error
            .zip_map(&error, |acc, e| acc + dt * e);

        self.integral_error.zip_map(&error, |acc, e| {
            clamp_abs(self.kp * e + self.ki * acc, self.output_limit)
        })
    }
}
