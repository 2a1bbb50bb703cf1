use num_traits::float::FloatCore;

/// Bounds `x` to the symmetric interval `[-limit, limit]`.
///
/// Written as a min/max chain rather than `clamp` so that a NaN produced by
/// the control arithmetic degrades to `limit` instead of panicking on a
/// malformed range.
#[inline]
pub(crate) fn clamp_abs<T: FloatCore>(x: T, limit: T) -> T {
    x.min(limit).max(-limit)
}

/// Reasons a [`PidControllerBuilder`] rejects a configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum PidConfigError {
    /// The proportional gain was NaN or infinite.
    #[cfg_attr(feature = "std", error("proportional gain must be finite"))]
    InvalidProportionalGain,

    /// The integral gain was NaN or infinite.
    #[cfg_attr(feature = "std", error("integral gain must be finite"))]
    InvalidIntegralGain,

    /// The derivative gain was NaN or infinite.
    #[cfg_attr(feature = "std", error("derivative gain must be finite"))]
    InvalidDerivativeGain,

    /// The output limit was NaN or negative.
    #[cfg_attr(feature = "std", error("output limit must be non-negative"))]
    InvalidOutputLimit,
}

/// The reduced control law a controller runs on a given tick.
///
/// Each variant names one of the update operations on [`PidController`];
/// [`PidController::control_law`] selects the variant matching the gains
/// that are actually in play, and [`PidController::update_law`] dispatches
/// on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlLaw {
    /// Proportional action only.
    P,
    /// Proportional and derivative action.
    Pd,
    /// Proportional and integral action.
    Pi,
    /// All three terms.
    Pid,
}

/// A discrete-time PID controller for a single scalar control channel.
///
/// The controller carries its tuning as plain public fields and two words of
/// transient state: the error seen on the previous tick and the
/// time-weighted error accumulated so far. Call one of the update operations
/// once per control tick with the current error and the seconds elapsed
/// since the previous call; the result is clamped to
/// `[-output_limit, output_limit]`.
///
/// Degenerate input is absorbed rather than reported. A zero `dt` or a NaN
/// error turns the tick into a no-op that returns zero and leaves the
/// transient state untouched, so the surrounding control loop never branches
/// on a failure path and a single glitched sample cannot poison the error
/// history.
///
/// The type is a flat `Copy` value. A tick is a read-modify-write of the
/// transient state, so sharing one instance across threads needs external
/// serialization.
///
/// # Example
///
/// ```
/// use tick_pid::pid::PidController;
///
/// let mut pid = PidController::<f64>::new(1.5, 0.2, 0.1, 12.0);
///
/// // One 10 ms tick; error convention is setpoint minus measurement
/// let torque = pid.update(0.35, 0.01);
/// assert!(torque.abs() <= 12.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidController<T> {
    /// Proportional gain.
    pub kp: T,

    /// Integral gain. Multiplies the accumulated time-weighted error at
    /// read-out, so retuning mid-run rescales the accumulated history too.
    pub ki: T,

    /// Derivative gain.
    pub kd: T,

    /// Magnitude bound on the output; every update operation clamps its
    /// result to `[-output_limit, output_limit]`. Meaningful values are
    /// non-negative, with positive infinity disabling clamping.
    pub output_limit: T,

    prev_error: T,
    integral_error: T,
}

impl<T: FloatCore> PidController<T> {
    /// Creates a controller from raw gains and an output limit.
    ///
    /// The four parameters are stored verbatim and the transient state
    /// starts zeroed, exactly as if [`reset`](Self::reset) had just run.
    /// Nothing is validated here; use [`PidControllerBuilder`] when the
    /// tuning comes from an untrusted source.
    pub fn new(kp: T, ki: T, kd: T, output_limit: T) -> Self {
        Self {
            kp,
            ki,
            kd,
            output_limit,
            prev_error: T::zero(),
            integral_error: T::zero(),
        }
    }

    /// Returns the error recorded on the previous effective tick.
    pub fn prev_error(&self) -> T {
        self.prev_error
    }

    /// Returns the time-weighted error accumulated over all effective ticks
    /// since the last reset. The integral gain is not folded in.
    pub fn integral_error(&self) -> T {
        self.integral_error
    }

    /// Discards the error history, starting a fresh control sequence.
    ///
    /// Gains and the output limit are untouched. Idempotent. Call this on
    /// mode switches or actuator re-enable so that stale history cannot
    /// kick the output.
    pub fn reset(&mut self) {
        self.prev_error = T::zero();
        self.integral_error = T::zero();
    }

    /// Runs one tick of the full PID law and returns the clamped output.
    ///
    /// `error` is setpoint minus measurement; `dt` is the time elapsed
    /// since the previous effective tick, in seconds.
    ///
    /// If `dt` is zero or `error` is NaN the tick is dropped: the return
    /// value is zero and neither [`prev_error`](Self::prev_error) nor
    /// [`integral_error`](Self::integral_error) moves. A zero `dt` would
    /// put a division by zero in the derivative term, and a NaN error
    /// would contaminate the integral for every later tick.
    pub fn update(&mut self, error: T, dt: T) -> T {
        if dt == T::zero() || error.is_nan() {
            return T::zero();
        }

        let p_out = self.kp * error;

        self.integral_error = self.integral_error + dt * error;
        let i_out = self.ki * self.integral_error;

        let d_out = self.kd * ((error - self.prev_error) / dt);

        self.prev_error = error;

        clamp_abs(p_out + i_out + d_out, self.output_limit)
    }

    /// Runs one tick of the full PID law. Alias of [`update`](Self::update).
    pub fn update_pid(&mut self, error: T, dt: T) -> T {
        self.update(error, dt)
    }

    /// Runs one tick of proportional-only control.
    ///
    /// Takes a shared receiver: pure proportional control reads no history,
    /// so repeating the call with the same error repeats the output. No
    /// elapsed time is needed and only a NaN error is guarded.
    pub fn update_p(&self, error: T) -> T {
        if error.is_nan() {
            return T::zero();
        }
        clamp_abs(self.kp * error, self.output_limit)
    }

    /// Runs one tick of proportional-derivative control.
    ///
    /// Advances [`prev_error`](Self::prev_error) and leaves the integral
    /// accumulator alone, so interleaving this with the integral-bearing
    /// laws does not disturb their wound-up state. Same degenerate-input
    /// guard as [`update`](Self::update).
    pub fn update_pd(&mut self, error: T, dt: T) -> T {
        if dt == T::zero() || error.is_nan() {
            return T::zero();
        }

        let p_out = self.kp * error;
        let d_out = self.kd * ((error - self.prev_error) / dt);

        self.prev_error = error;

        clamp_abs(p_out + d_out, self.output_limit)
    }

    /// Runs one tick of proportional-integral control.
    ///
    /// Advances [`integral_error`](Self::integral_error) and leaves the
    /// previous-error record alone. Same degenerate-input guard as
    /// [`update`](Self::update).
    pub fn update_pi(&mut self, error: T, dt: T) -> T {
        if dt == T::zero() || error.is_nan() {
            return T::zero();
        }

        let p_out = self.kp * error;

        self.integral_error = self.integral_error + dt * error;
        let i_out = self.ki * self.integral_error;

        clamp_abs(p_out + i_out, self.output_limit)
    }

    /// Returns the reduced law matching the gains that are strictly
    /// positive.
    ///
    /// All three gains positive selects the full law; `kp` plus one other
    /// gain selects the corresponding two-term law; `kp` alone selects pure
    /// proportional control. Every other pattern, including zero or
    /// reverse-acting `kp`, falls back to the full law, which degrades to
    /// the same arithmetic with the inactive terms contributing zero.
    pub fn control_law(&self) -> ControlLaw {
        let zero = T::zero();
        match (self.kp > zero, self.ki > zero, self.kd > zero) {
            (true, true, true) => ControlLaw::Pid,
            (true, true, false) => ControlLaw::Pi,
            (true, false, true) => ControlLaw::Pd,
            (true, false, false) => ControlLaw::P,
            _ => ControlLaw::Pid,
        }
    }

    /// Runs one tick of the named reduced law.
    ///
    /// Dispatches to the matching update operation, so the mutation rules
    /// of the chosen law apply unchanged.
    pub fn update_law(&mut self, law: ControlLaw, error: T, dt: T) -> T {
        match law {
            ControlLaw::P => self.update_p(error),
            ControlLaw::Pd => self.update_pd(error, dt),
            ControlLaw::Pi => self.update_pi(error, dt),
            ControlLaw::Pid => self.update(error, dt),
        }
    }
}

/// Builder for [`PidController`] that validates the tuning before the
/// controller exists.
///
/// Defaults to unity proportional gain, zero integral and derivative gains,
/// and an infinite output limit, which together make a pass-through
/// proportional controller.
///
/// # Example
///
/// ```
/// use tick_pid::pid::PidControllerBuilder;
///
/// let pid = PidControllerBuilder::default()
///     .kp(2.0)
///     .ki(0.5)
///     .output_limit(10.0)
///     .build()
///     .expect("gains are finite");
/// assert_eq!(pid.update_p(1.0), 2.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PidControllerBuilder<T> {
    kp: T,
    ki: T,
    kd: T,
    output_limit: T,
}

impl<T: FloatCore> Default for PidControllerBuilder<T> {
    fn default() -> Self {
        Self {
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
            output_limit: T::infinity(),
        }
    }
}

impl<T: FloatCore> PidControllerBuilder<T> {
    /// Sets the proportional gain.
    pub fn kp(mut self, kp: T) -> Self {
        self.kp = kp;
        self
    }

    /// Sets the integral gain.
    pub fn ki(mut self, ki: T) -> Self {
        self.ki = ki;
        self
    }

    /// Sets the derivative gain.
    pub fn kd(mut self, kd: T) -> Self {
        self.kd = kd;
        self
    }

    /// Sets the symmetric output limit. Positive infinity disables
    /// clamping.
    pub fn output_limit(mut self, output_limit: T) -> Self {
        self.output_limit = output_limit;
        self
    }

    /// Validates the configuration and produces a ready-to-run controller.
    ///
    /// Gains must be finite; zero and negative gains are legal, since a
    /// zero gain switches its term off and a negative gain reverse-acts.
    /// The output limit must not be NaN or negative, and positive infinity
    /// is accepted as "no clamping".
    ///
    /// # Errors
    /// Reports the first offending parameter as the matching
    /// [`PidConfigError`] variant.
    pub fn build(self) -> Result<PidController<T>, PidConfigError> {
        if !self.kp.is_finite() {
            return Err(PidConfigError::InvalidProportionalGain);
        }
        if !self.ki.is_finite() {
            return Err(PidConfigError::InvalidIntegralGain);
        }
        if !self.kd.is_finite() {
            return Err(PidConfigError::InvalidDerivativeGain);
        }
        if self.output_limit.is_nan() || self.output_limit < T::zero() {
            return Err(PidConfigError::InvalidOutputLimit);
        }
        Ok(PidController::new(self.kp, self.ki, self.kd, self.output_limit))
    }
}
