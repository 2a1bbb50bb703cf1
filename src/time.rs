// Defines a trait for clock timestamps and derives per-tick elapsed time
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

use core::fmt::Debug;

/// A point in time that can report how far it sits after another one.
///
/// The update operations on the controllers consume plain elapsed seconds
/// rather than timestamps; implementing this trait lets [`DeltaTimer`]
/// derive that elapsed time from whatever clock the host control loop runs
/// on, be it a hardware tick counter or `std::time::Instant`.
///
/// Implementations saturate: an `earlier` that actually lies in the future
/// yields `0.0` rather than a negative or wrapped-around value.
pub trait TickInstant: Clone + Copy + Debug + PartialEq {
    /// Returns the seconds elapsed from `earlier` to `self`, saturating at
    /// zero.
    #[must_use]
    fn seconds_since(self, earlier: Self) -> f64;
}

/// A timestamp in whole milliseconds since an arbitrary epoch, as produced
/// by a typical embedded tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub u64);

impl TickInstant for Millis {
    fn seconds_since(self, earlier: Self) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 * 1e-3
    }
}

/// A timestamp in whole microseconds since an arbitrary epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Micros(pub u64);

impl TickInstant for Micros {
    fn seconds_since(self, earlier: Self) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 * 1e-6
    }
}

/// A timestamp in fractional seconds since an arbitrary epoch, convenient
/// for simulations that keep their own floating-point clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Seconds(pub f64);

impl TickInstant for Seconds {
    fn seconds_since(self, earlier: Self) -> f64 {
        let secs = self.0 - earlier.0;
        if secs < 0.0 {
            0.0 // saturate
        } else {
            secs
        }
    }
}

/// Produces the `dt` argument for the update operations from successive
/// clock timestamps.
///
/// The first tick after construction or [`reset`](Self::reset) has no
/// predecessor and reports `0.0`. Feeding that straight into an update
/// operation is deliberate: the controller treats a zero `dt` as a dropped
/// tick, so the pair composes into "the first tick is a no-op" with no
/// branching on the host side.
///
/// # Example
///
/// ```
/// use tick_pid::time::{DeltaTimer, Millis};
///
/// let mut timer = DeltaTimer::new();
/// assert_eq!(timer.tick(Millis(1000)), 0.0);
/// assert_eq!(timer.tick(Millis(1250)), 0.25);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeltaTimer<I> {
    last: Option<I>,
}

impl<I> Default for DeltaTimer<I> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<I: TickInstant> DeltaTimer<I> {
    /// Creates a timer with no remembered tick.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Records `now` and returns the seconds elapsed since the previously
    /// recorded tick, or `0.0` if this is the first.
    pub fn tick(&mut self, now: I) -> f64 {
        let dt = match self.last {
            Some(last) => now.seconds_since(last),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Forgets the previous tick, so the next [`tick`](Self::tick) reports
    /// `0.0` again. Pair this with
    /// [`PidController::reset`](crate::pid::PidController::reset) when a
    /// control sequence restarts after a pause.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// A wrapper around `std::time::Instant` satisfying the `TickInstant` trait.
#[cfg(feature = "std")]
mod std_instant {

    use super::TickInstant;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StdInstant(pub std::time::Instant);

    impl StdInstant {
        /// Captures the current instant from the monotonic system clock.
        pub fn now() -> Self {
            StdInstant(std::time::Instant::now())
        }
    }

    impl TickInstant for StdInstant {
        fn seconds_since(self, earlier: Self) -> f64 {
            // Instant::duration_since already saturates to zero
            self.0.duration_since(earlier.0).as_secs_f64()
        }
    }

    /// Tests that StdInstant is just one constructor call away from
    /// std::time::Instant and that seconds_since agrees with the underlying
    /// duration_since.
    #[cfg(all(test, feature = "std"))]
    #[test]
    fn test_std_instant_wrapper() {
        let start = StdInstant::now();
        let end = StdInstant(std::time::Instant::now());
        let result = end.seconds_since(start);
        let expected = end.0.duration_since(start.0).as_secs_f64();
        assert_eq!(result, expected);
    }
}

#[cfg(feature = "std")]
pub use std_instant::StdInstant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_instants_saturate_on_reversed_order() {
        assert_eq!(Millis(1500).seconds_since(Millis(500)), 1.0);
        assert_eq!(Millis(500).seconds_since(Millis(1500)), 0.0);
        assert_eq!(Micros(2_250_000).seconds_since(Micros(2_000_000)), 0.25);
        assert_eq!(Micros(0).seconds_since(Micros(1)), 0.0);
    }

    #[test]
    fn test_float_seconds_saturate_on_reversed_order() {
        assert_eq!(Seconds(4.5).seconds_since(Seconds(3.0)), 1.5);
        assert_eq!(Seconds(3.0).seconds_since(Seconds(4.5)), 0.0);
    }

    #[test]
    fn test_delta_timer_first_tick_is_zero() {
        let mut timer = DeltaTimer::new();
        assert_eq!(timer.tick(Micros(2_000_000)), 0.0);
        assert_eq!(timer.tick(Micros(2_250_000)), 0.25);

        timer.reset();
        assert_eq!(timer.tick(Micros(3_000_000)), 0.0);
        assert_eq!(timer.tick(Micros(3_500_000)), 0.5);
    }
}
